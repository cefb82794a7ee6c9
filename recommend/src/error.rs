//! Error types for recommendation assembly and configuration.

/// Error returned by [`crate::assemble`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendError {
    /// No artist, track, or genre seed was supplied.
    #[error("at least one artist, track, or genre seed is required")]
    NoSeeds,
    #[error("recommendation limit must be at least 1")]
    InvalidLimit,
}

/// Error returned by [`crate::RecommendConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}
