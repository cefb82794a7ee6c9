//! Track, seed, and result types exchanged with the recommendation step.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::RecommendConfig;
use crate::error::RecommendError;

/// Genre seed added when a request carries a single artist or track and no
/// genre, so Spotify has something to top up from.
pub const FALLBACK_GENRE: &str = "pop";

/// Artist reference embedded in a Spotify track.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// A candidate or recommended track, in the subset of Spotify's track shape
/// the app renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub preview_url: Option<String>,
    /// Last.fm similarity (0.0-1.0) of the artist or track this candidate
    /// was found through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastfm_match: Option<f64>,
}

impl Track {
    /// Spotify ID, treating an empty string as missing.
    #[must_use]
    pub fn track_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Whether any credited artist is in `artist_ids`.
    #[must_use]
    pub fn is_by_any(&self, artist_ids: &HashSet<&str>) -> bool {
        self.artists
            .iter()
            .filter_map(|a| a.id.as_deref())
            .any(|id| artist_ids.contains(id))
    }

    #[must_use]
    pub fn match_score(&self) -> f64 {
        self.lastfm_match.unwrap_or(0.0)
    }
}

/// What the user asked for recommendations from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seeds {
    /// Spotify artist IDs.
    #[serde(default)]
    pub artists: Vec<String>,
    /// Spotify track IDs.
    #[serde(default)]
    pub tracks: Vec<String>,
    /// Genre names.
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Seeds {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.tracks.is_empty() && self.genres.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artists.len() + self.tracks.len() + self.genres.len()
    }

    /// Genre seeds capped for Spotify's recommendation endpoint.
    #[must_use]
    pub fn spotify_genre_seeds(&self, max: usize) -> &[String] {
        &self.genres[..self.genres.len().min(max)]
    }
}

/// One request for recommendations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub seeds: Seeds,
    /// Requested list length; `None` takes [`RecommendConfig::default_limit`].
    #[serde(default)]
    pub limit: Option<usize>,
    /// Tracks already shown; non-empty when the user regenerates.
    #[serde(default)]
    pub exclude_track_ids: Vec<String>,
}

impl RecommendationRequest {
    /// The list length this request asks for, after the default and the
    /// `max_limit` cap.
    #[must_use]
    pub fn resolved_limit(&self, config: &RecommendConfig) -> usize {
        self.limit.unwrap_or(config.default_limit).min(config.max_limit)
    }

    /// Apply the request rules before any candidate is fetched.
    ///
    /// The limit is resolved and capped. Artist and track seeds are capped at
    /// `max_seed_ids` each and genres at `max_genre_seeds`. A lone artist or
    /// track seed gains [`FALLBACK_GENRE`].
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::NoSeeds`] when no seed was supplied and
    /// [`RecommendError::InvalidLimit`] for an explicit zero limit.
    pub fn normalized(&self, config: &RecommendConfig) -> Result<Self, RecommendError> {
        if self.seeds.is_empty() {
            return Err(RecommendError::NoSeeds);
        }
        let limit = self.resolved_limit(config);
        if limit == 0 {
            return Err(RecommendError::InvalidLimit);
        }

        let mut genres = self.seeds.spotify_genre_seeds(config.max_genre_seeds).to_vec();
        if self.seeds.len() == 1 && genres.is_empty() {
            genres.push(FALLBACK_GENRE.to_owned());
        }
        let seeds = Seeds {
            artists: self.seeds.artists.iter().take(config.max_seed_ids).cloned().collect(),
            tracks: self.seeds.tracks.iter().take(config.max_seed_ids).cloned().collect(),
            genres,
        };

        Ok(Self { seeds, limit: Some(limit), exclude_track_ids: self.exclude_track_ids.clone() })
    }
}

/// Candidate tracks the caller fetched from each source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidatePools {
    /// Ranked Last.fm-derived candidates (see [`crate::rank_lastfm_candidates`]).
    pub lastfm: Vec<Track>,
    /// Spotify recommendations seeded by artists and genres.
    pub spotify_genre: Vec<Track>,
    /// Spotify search results used when nothing else fills the list.
    pub spotify_fallback: Vec<Track>,
}

/// Which sources contributed to a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFlags {
    pub lastfm: bool,
    pub spotify: bool,
}

/// Assembled recommendation list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub tracks: Vec<Track>,
    pub sources: SourceFlags,
}
