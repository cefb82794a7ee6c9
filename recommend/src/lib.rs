//! Recommendation assembly shared by the app's back end.
//!
//! This crate owns the merge-and-rank step that turns candidate tracks
//! fetched from Last.fm and Spotify into one recommendation list. It performs
//! no I/O: callers fetch each candidate pool themselves (sized with
//! [`search_limit`] and [`FanoutLimits`]) and hand the results to
//! [`assemble`].

pub mod config;
pub mod engine;
pub mod error;
pub mod limits;
pub mod model;
pub mod tags;

pub use config::RecommendConfig;
pub use engine::{Strategy, assemble, expand_search, rank_lastfm_candidates, search_limit};
pub use error::{ConfigError, RecommendError};
pub use limits::FanoutLimits;
pub use model::{
    ArtistRef, CandidatePools, RecommendationRequest, Recommendations, Seeds, SourceFlags, Track,
};
pub use tags::genre_tags;
