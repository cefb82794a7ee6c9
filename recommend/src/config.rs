//! Recommendation tuning parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_LIMIT: usize = 20;
pub const DEFAULT_MAX_LIMIT: usize = 100;
pub const DEFAULT_EXPANSION_FACTOR: usize = 3;
pub const DEFAULT_MAX_SEED_IDS: usize = 5;
pub const DEFAULT_MAX_GENRE_SEEDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Limit applied when a request does not name one.
    pub default_limit: usize,
    /// Upper bound on any request's limit.
    pub max_limit: usize,
    /// Multiplier on the limit when regenerating with exclusions.
    pub expansion_factor: usize,
    /// Cap on artist seeds and, separately, on track seeds.
    pub max_seed_ids: usize,
    /// Cap on genre seeds forwarded to Spotify.
    pub max_genre_seeds: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            expansion_factor: DEFAULT_EXPANSION_FACTOR,
            max_seed_ids: DEFAULT_MAX_SEED_IDS,
            max_genre_seeds: DEFAULT_MAX_GENRE_SEEDS,
        }
    }
}

impl RecommendConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `RECOMMEND_DEFAULT_LIMIT`: default 20
    /// - `RECOMMEND_MAX_LIMIT`: default 100
    /// - `RECOMMEND_EXPANSION_FACTOR`: default 3
    /// - `RECOMMEND_MAX_SEED_IDS`: default 5
    /// - `RECOMMEND_MAX_GENRE_SEEDS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a variable is set but is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            default_limit: parse_positive(&lookup, "RECOMMEND_DEFAULT_LIMIT", DEFAULT_LIMIT)?,
            max_limit: parse_positive(&lookup, "RECOMMEND_MAX_LIMIT", DEFAULT_MAX_LIMIT)?,
            expansion_factor: parse_positive(&lookup, "RECOMMEND_EXPANSION_FACTOR", DEFAULT_EXPANSION_FACTOR)?,
            max_seed_ids: parse_positive(&lookup, "RECOMMEND_MAX_SEED_IDS", DEFAULT_MAX_SEED_IDS)?,
            max_genre_seeds: parse_positive(&lookup, "RECOMMEND_MAX_GENRE_SEEDS", DEFAULT_MAX_GENRE_SEEDS)?,
        })
    }
}

fn parse_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}
