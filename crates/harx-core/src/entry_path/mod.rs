//! Mapping captured URLs to filesystem-safe relative paths.
//!
//! Mirrors the captured site's path structure: directory-like URLs get an
//! `index.html` leaf, query strings are folded into the index file name,
//! and every segment is sanitized for the target filesystem.

mod map;
mod sanitize;

pub use map::relative_path_for;
pub use sanitize::sanitize_segment;

use std::path::PathBuf;
use url::Url;

/// Derives the relative output path for one entry's request URL.
///
/// Fails only when the URL cannot be parsed as an absolute URL; the caller
/// treats that as a per-entry skip, not an archive failure.
pub fn map_entry_path(url: &str, max_name_len: usize) -> Result<PathBuf, url::ParseError> {
    let parsed = Url::parse(url)?;
    Ok(relative_path_for(&parsed, max_name_len))
}
