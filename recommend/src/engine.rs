//! Strategy selection and candidate merging.
//!
//! DESIGN
//! ======
//! Last.fm is the primary source. Spotify's seeded recommendations and
//! search results only top up an artist-based list that Last.fm could not
//! fill. Every merge keeps the first occurrence of a track ID and drops
//! tracks without an ID or on the exclusion list.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashSet;

use crate::config::RecommendConfig;
use crate::error::RecommendError;
use crate::model::{CandidatePools, RecommendationRequest, Recommendations, Seeds, Track};

/// How a request is served, decided by which seeds are present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Only genres: Last.fm tag charts.
    GenreOnly,
    /// Any artist seed: Last.fm similar artists, topped up from Spotify.
    ArtistBased,
    /// Tracks without artists: Last.fm similar tracks.
    TrackOnly,
}

impl Strategy {
    /// Pick the strategy for `seeds`; `None` when there are no seeds.
    #[must_use]
    pub fn select(seeds: &Seeds) -> Option<Self> {
        if !seeds.artists.is_empty() {
            Some(Self::ArtistBased)
        } else if !seeds.tracks.is_empty() {
            Some(Self::TrackOnly)
        } else if !seeds.genres.is_empty() {
            Some(Self::GenreOnly)
        } else {
            None
        }
    }
}

/// Whether to widen the Last.fm fan-out; true when regenerating.
#[must_use]
pub fn expand_search(request: &RecommendationRequest) -> bool {
    !request.exclude_track_ids.is_empty()
}

/// How many candidates to fetch per source for `request`.
///
/// Regenerations fetch `limit * expansion_factor` so enough survive the
/// exclusion filter.
#[must_use]
pub fn search_limit(request: &RecommendationRequest, config: &RecommendConfig) -> usize {
    let limit = request.resolved_limit(config);
    if expand_search(request) {
        limit.saturating_mul(config.expansion_factor)
    } else {
        limit
    }
}

/// Pool Last.fm-derived candidates into one ranked list.
///
/// Drops tracks with no ID and tracks credited to a seed artist, keeps the
/// first occurrence of each ID, then orders by Last.fm match score (highest
/// first, ties keep arrival order) and truncates to `limit`.
#[must_use]
pub fn rank_lastfm_candidates(candidates: Vec<Track>, seed_artist_ids: &[String], limit: usize) -> Vec<Track> {
    let seed_artists: HashSet<&str> = seed_artist_ids.iter().map(String::as_str).collect();
    let no_exclusions = HashSet::new();
    let mut ranked = TrackList::new(&no_exclusions);
    for track in candidates {
        if !track.is_by_any(&seed_artists) {
            ranked.push(track);
        }
    }
    let mut tracks = ranked.into_tracks();
    tracks.sort_by(|a, b| b.match_score().total_cmp(&a.match_score()));
    tracks.truncate(limit);
    tracks
}

/// Merge candidate pools into the final recommendation list.
///
/// The request is normalized first (see
/// [`RecommendationRequest::normalized`]), so the default limit, the limit
/// cap, and the seed caps all apply here.
///
/// # Errors
///
/// Returns [`RecommendError::InvalidLimit`] for a zero limit and
/// [`RecommendError::NoSeeds`] when the request carries no seeds.
pub fn assemble(
    request: &RecommendationRequest,
    pools: CandidatePools,
    config: &RecommendConfig,
) -> Result<Recommendations, RecommendError> {
    let request = request.normalized(config)?;
    let limit = request.resolved_limit(config);
    let strategy = Strategy::select(&request.seeds).ok_or(RecommendError::NoSeeds)?;
    let excluded: HashSet<&str> = request.exclude_track_ids.iter().map(String::as_str).collect();

    let mut result = Recommendations::default();
    let mut list = TrackList::new(&excluded);
    list.extend(pools.lastfm);
    result.sources.lastfm = !list.is_empty();

    if strategy == Strategy::ArtistBased {
        if list.len() < limit && !request.seeds.genres.is_empty() {
            list.extend(pools.spotify_genre);
        }
        if list.len() < limit {
            result.sources.spotify = !pools.spotify_fallback.is_empty();
            list.extend(pools.spotify_fallback);
        }
    }

    result.tracks = list.into_tracks();
    result.tracks.truncate(limit);

    tracing::debug!(
        ?strategy,
        tracks = result.tracks.len(),
        lastfm = result.sources.lastfm,
        spotify = result.sources.spotify,
        "recommendations assembled"
    );
    Ok(result)
}

/// Ordered, de-duplicated track accumulator.
struct TrackList<'a> {
    excluded: &'a HashSet<&'a str>,
    seen: HashSet<String>,
    tracks: Vec<Track>,
}

impl<'a> TrackList<'a> {
    fn new(excluded: &'a HashSet<&'a str>) -> Self {
        Self { excluded, seen: HashSet::new(), tracks: Vec::new() }
    }

    fn push(&mut self, track: Track) {
        let Some(id) = track.track_id() else {
            return;
        };
        if self.excluded.contains(id) || self.seen.contains(id) {
            return;
        }
        self.seen.insert(id.to_owned());
        self.tracks.push(track);
    }

    fn extend(&mut self, tracks: Vec<Track>) {
        for track in tracks {
            self.push(track);
        }
    }

    fn len(&self) -> usize {
        self.tracks.len()
    }

    fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}
