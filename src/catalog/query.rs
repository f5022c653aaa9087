//! Query operations over the catalog.
//!
//! All three operations are total: absence comes back as `None`, a search
//! that matches nothing comes back as an empty `Vec`. Nothing here returns
//! `Result` or panics on any input.

use crate::catalog::Resource;
use crate::catalog::data::RESOURCES;

/// The full ordered record set, in declaration order.
///
/// The returned slice is the backing store itself; it is immutable by
/// construction, so no caller can disturb another.
pub fn list_resources() -> &'static [Resource] {
    &RESOURCES
}

/// Case-insensitive substring search against `name` and `description`.
///
/// Matches are returned in catalog order with no re-ranking. An empty or
/// whitespace-only keyword is defined to match nothing, not everything;
/// a keyword with interior content is matched verbatim, surrounding
/// whitespace included.
pub fn search_resources(keyword: &str) -> Vec<&'static Resource> {
    if keyword.trim().is_empty() {
        return Vec::new();
    }
    let needle = keyword.to_lowercase();
    RESOURCES
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Resolve a record by zero-based index.
///
/// Returns `None` for out-of-range instead of erroring; callers decide
/// whether absence is worth reporting.
pub fn get_resource(index: usize) -> Option<&'static Resource> {
    RESOURCES.get(index)
}
