use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn missing_vars_use_defaults() {
    let config = RecommendConfig::from_lookup(lookup_from(&[])).expect("config");
    assert_eq!(config, RecommendConfig::default());
    assert_eq!(config.default_limit, 20);
    assert_eq!(config.max_limit, 100);
    assert_eq!(config.expansion_factor, 3);
    assert_eq!(config.max_seed_ids, 5);
    assert_eq!(config.max_genre_seeds, 5);
}

#[test]
fn set_vars_override_defaults() {
    let config = RecommendConfig::from_lookup(lookup_from(&[
        ("RECOMMEND_DEFAULT_LIMIT", "50"),
        ("RECOMMEND_EXPANSION_FACTOR", " 4 "),
        ("RECOMMEND_MAX_LIMIT", "60"),
        ("RECOMMEND_MAX_SEED_IDS", "2"),
    ]))
    .expect("config");
    assert_eq!(config.default_limit, 50);
    assert_eq!(config.max_limit, 60);
    assert_eq!(config.max_seed_ids, 2);
    assert_eq!(config.expansion_factor, 4);
    assert_eq!(config.max_genre_seeds, DEFAULT_MAX_GENRE_SEEDS);
}

#[test]
fn non_numeric_value_is_rejected() {
    let err = RecommendConfig::from_lookup(lookup_from(&[("RECOMMEND_MAX_GENRE_SEEDS", "five")]))
        .expect_err("should fail");
    assert_eq!(
        err,
        ConfigError::InvalidNumber { var: "RECOMMEND_MAX_GENRE_SEEDS", value: "five".to_owned() }
    );
}

#[test]
fn zero_is_rejected() {
    let err = RecommendConfig::from_lookup(lookup_from(&[("RECOMMEND_EXPANSION_FACTOR", "0")]))
        .expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidNumber { var: "RECOMMEND_EXPANSION_FACTOR", .. }));
}
