//! Human-readable rendering of catalog records.
//!
//! Pure string builders with no I/O; the CLI decides where the text goes.

use crate::catalog::Resource;

/// Render one record as a five-line block: title, then indented
/// `Description`, `Language`, `Stars`, and `Link` lines, with a trailing
/// newline. Field values are embedded verbatim.
pub fn format_resource(resource: &Resource) -> String {
    format!(
        "{}\n  Description: {}\n  Language: {}\n  Stars: {}\n  Link: {}\n",
        resource.name, resource.description, resource.language, resource.stars, resource.link
    )
}

/// Render the one-line catalog listing entry used by the no-keyword CLI path.
pub fn summary_line(index: usize, resource: &Resource) -> String {
    format!(
        "[{}] {} ({}) - {}",
        index, resource.name, resource.language, resource.link
    )
}
