//! Record type for catalog entries.

use serde::Serialize;

/// One curated entry: an external tool or guide for safe software practice.
///
/// Every field is a compile-time string constant. `stars` is a free-form
/// popularity snapshot (for example "~24k", or the sentinel "N/A") and is
/// never parsed or refreshed. `link` is not validated for well-formedness
/// or reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Display title, unique within the catalog by convention.
    pub name: &'static str,
    /// One-sentence summary.
    pub description: &'static str,
    /// Primary ecosystem tag; "Multi" and "All" mean cross-ecosystem.
    pub language: &'static str,
    /// Approximate star-count snapshot as text, or "N/A".
    pub stars: &'static str,
    /// Resource URL.
    pub link: &'static str,
}
