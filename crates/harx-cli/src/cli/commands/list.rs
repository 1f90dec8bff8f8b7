//! `harx list <path>` – show the entries of one HAR file.

use anyhow::Result;
use harx_core::har;
use std::path::Path;

pub fn run_list(path: &Path) -> Result<()> {
    let entries = har::load_archive(path)?;
    if entries.is_empty() {
        println!("No entries in {}", path.display());
        return Ok(());
    }
    println!("{:<8} {:<10} {}", "STATUS", "BYTES", "URL");
    for entry in &entries {
        let bytes = entry
            .response
            .content
            .body_bytes()
            .map(|b| b.len().to_string())
            .unwrap_or_else(|_| "-".to_string());
        println!(
            "{:<8} {:<10} {}",
            entry.response.status, bytes, entry.request.url
        );
    }
    Ok(())
}
