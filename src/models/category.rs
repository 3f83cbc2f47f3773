//! Category labels for transactions.
//!
//! The store does not enforce a category enum, any non-empty string is
//! accepted. The fixed set below only affects display: clients should render
//! unrecognized categories with the fallback label.

/// The category labels the application knows how to display.
pub const KNOWN_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Utilities",
    "Shopping",
    "Entertainment",
    "Health",
    "Other",
];

/// The display label used for categories not in [KNOWN_CATEGORIES].
pub const FALLBACK_CATEGORY: &str = "Other";

/// Get the display label for `category`.
///
/// Returns `category` unchanged if it is one of [KNOWN_CATEGORIES], otherwise
/// [FALLBACK_CATEGORY].
pub fn display_label(category: &str) -> &str {
    if KNOWN_CATEGORIES.contains(&category) {
        category
    } else {
        FALLBACK_CATEGORY
    }
}
