//! Category registry - the single source of truth for the navigation bar
//! and for `?category=` query validation.

use once_cell::sync::Lazy;

/// Categories in navigation order. The first entry is the default context
/// when the page is opened without an explicit `?category=` parameter.
pub static CATEGORIES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["Smartphones", "Tablets", "Laptops"]);

pub fn default_category() -> Option<&'static str> {
    CATEGORIES.first().copied()
}

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.iter().any(|category| *category == name)
}
