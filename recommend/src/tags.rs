//! Last.fm tag cleanup for genre-based recommendations.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use std::collections::HashSet;

/// Popular Last.fm tags that describe the listener, not the music.
pub const NON_GENRE_TAGS: &[&str] = &["seen live", "favorites", "favourite", "seen", "live", "my music"];

/// Reduce raw artist tags to at most `max` distinct genre names.
///
/// Tags are lowercased and trimmed; blank and non-genre tags are dropped.
/// The first occurrence of each tag keeps its position.
#[must_use]
pub fn genre_tags<S: AsRef<str>>(tags: &[S], max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty() && !NON_GENRE_TAGS.contains(&tag.as_str()))
        .filter(|tag| seen.insert(tag.clone()))
        .take(max)
        .collect()
}
