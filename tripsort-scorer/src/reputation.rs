//! Reputation lookup for categorical attributes.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

/// Look up a category's reputation score, case-insensitively.
///
/// Table keys are expected to be lowercase — configuration validation folds
/// them — so the probe key is trimmed and lowercased before matching.
/// Unknown categories score `fallback`; scraped category strings are too
/// unreliable for a miss to be an error.
///
/// The lookup is fully deterministic: the same key always yields the same
/// score, with no hashing tricks and no time-based variation.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use tripsort_scorer::lookup;
///
/// let table = BTreeMap::from([("emirates".to_owned(), 92.0)]);
/// assert_eq!(lookup("Emirates", &table, 70.0), 92.0);
/// assert_eq!(lookup("Zyxwvut", &table, 70.0), 70.0);
/// ```
#[must_use]
pub fn lookup(key: &str, table: &BTreeMap<String, f32>, fallback: f32) -> f32 {
    table
        .get(&key.trim().to_lowercase())
        .copied()
        .unwrap_or(fallback)
}
