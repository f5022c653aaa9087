//! The curated resource catalog.
//!
//! Twenty records describing external tools and guides for safe software
//! practice, compiled into the binary as constants and exposed through
//! three read-only queries. The catalog never changes at runtime; index
//! positions are stable for the life of the process and match declaration
//! order in `data.rs`.

mod data;
pub mod model;
pub mod query;

pub use model::Resource;
pub use query::{get_resource, list_resources, search_resources};

/// Number of records in the catalog.
pub const CATALOG_LEN: usize = data::RESOURCES.len();
