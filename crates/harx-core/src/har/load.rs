//! Read and decode one HAR file into its entry list.

use anyhow::{Context, Result};
use std::path::Path;

use super::parse::{HarEntry, HarLog};

/// Loads a HAR file and returns its entries in capture order.
///
/// Any read or JSON decode failure abandons the whole archive; the caller
/// decides whether to continue with other archives.
pub fn load_archive(path: &Path) -> Result<Vec<HarEntry>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;
    Ok(har.log.entries)
}
