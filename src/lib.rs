//! Curated catalog of safe-code tooling and guides.
//!
//! The catalog is a fixed, compile-time record set; the library surface is
//! three read-only queries plus the text formatter the `safe-code` binary
//! prints with. Embedders use the re-exports below.

pub mod catalog;
pub mod format;

pub use catalog::{CATALOG_LEN, Resource, get_resource, list_resources, search_resources};
pub use format::{format_resource, summary_line};
