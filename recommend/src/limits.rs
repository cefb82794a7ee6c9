//! Per-request Last.fm fan-out breadth.

/// How widely to query Last.fm for one request.
///
/// Regenerations (see [`crate::expand_search`]) go deeper into each list so
/// enough new tracks survive the exclusion filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FanoutLimits {
    pub similar_artists_fetched: usize,
    pub similar_artists_used: usize,
    pub tracks_per_artist: usize,
    pub seed_tracks: usize,
    pub similar_tracks_fetched: usize,
    pub similar_tracks_used: usize,
    pub tags_per_artist: usize,
    pub tags_used: usize,
}

impl FanoutLimits {
    #[must_use]
    pub fn for_request(expand_search: bool) -> Self {
        if expand_search {
            Self {
                similar_artists_fetched: 20,
                similar_artists_used: 15,
                tracks_per_artist: 8,
                seed_tracks: 5,
                similar_tracks_fetched: 15,
                similar_tracks_used: 10,
                tags_per_artist: 8,
                tags_used: 5,
            }
        } else {
            Self {
                similar_artists_fetched: 10,
                similar_artists_used: 8,
                tracks_per_artist: 5,
                seed_tracks: 3,
                similar_tracks_fetched: 10,
                similar_tracks_used: 5,
                tags_per_artist: 5,
                tags_used: 3,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_limits_are_never_narrower() {
        let normal = FanoutLimits::for_request(false);
        let wide = FanoutLimits::for_request(true);
        assert!(wide.similar_artists_fetched >= normal.similar_artists_fetched);
        assert!(wide.similar_artists_used >= normal.similar_artists_used);
        assert!(wide.tracks_per_artist >= normal.tracks_per_artist);
        assert!(wide.seed_tracks >= normal.seed_tracks);
        assert!(wide.similar_tracks_used >= normal.similar_tracks_used);
        assert!(wide.tags_used >= normal.tags_used);
    }

    #[test]
    fn used_never_exceeds_fetched() {
        for expand in [false, true] {
            let limits = FanoutLimits::for_request(expand);
            assert!(limits.similar_artists_used <= limits.similar_artists_fetched);
            assert!(limits.similar_tracks_used <= limits.similar_tracks_fetched);
        }
    }

    #[test]
    fn normal_limits_match_default_breadth() {
        let limits = FanoutLimits::for_request(false);
        assert_eq!(limits.similar_artists_used, 8);
        assert_eq!(limits.tracks_per_artist, 5);
        assert_eq!(limits.seed_tracks, 3);
    }
}
