//! Thin categories - category slugs expected to be sparse in most cities

/// Category slugs that get a relaxed admission gate.
///
/// Fixed for the process lifetime.
pub const THIN_CATEGORIES: [&str; 6] = [
    "kids_activities",
    "tours",
    "waterfront",
    "theater",
    "historical_place",
    "art_gallery",
];

/// Check whether a category slug belongs to the thin set.
///
/// Matching is exact and case-sensitive.
pub fn is_thin_category(slug: &str) -> bool {
    THIN_CATEGORIES.contains(&slug)
}
