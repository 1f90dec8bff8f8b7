//! Sequential extraction driver: archives one at a time, entries in order.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::entry_path;
use crate::har::{self, HarEntry};

use super::dir::OutputDirAllocator;
use super::write::{self, EntryError, WriteOutcome};
use super::ExtractOptions;

/// Counts for one extracted archive.
#[derive(Debug)]
pub struct ArchiveSummary {
    pub name: String,
    pub output_dir: PathBuf,
    pub saved: u32,
    pub removed: u32,
    pub failed: u32,
}

/// Counts for a whole run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub archives: Vec<ArchiveSummary>,
    /// Archives that could not be loaded at all (malformed JSON, unreadable).
    pub archives_failed: u32,
}

impl RunSummary {
    pub fn saved(&self) -> u32 {
        self.archives.iter().map(|a| a.saved).sum()
    }

    pub fn removed(&self) -> u32 {
        self.archives.iter().map(|a| a.removed).sum()
    }

    pub fn failed_entries(&self) -> u32 {
        self.archives.iter().map(|a| a.failed).sum()
    }
}

/// Maps and writes a single entry under `output_dir`.
pub fn extract_entry(
    entry: &HarEntry,
    output_dir: &Path,
    opts: &ExtractOptions,
) -> Result<WriteOutcome, EntryError> {
    let rel = entry_path::map_entry_path(&entry.request.url, opts.max_filename_len).map_err(
        |source| EntryError::MalformedUrl {
            url: entry.request.url.clone(),
            source,
        },
    )?;
    write::write_body(&output_dir.join(rel), &entry.response.content, opts)
}

/// Extracts one archive into a freshly allocated directory under the
/// allocator's root. Per-entry failures are logged and counted, never fatal;
/// a load failure abandons the archive before any directory is allocated.
pub fn extract_archive(
    har_path: &Path,
    alloc: &mut OutputDirAllocator,
    opts: &ExtractOptions,
) -> Result<ArchiveSummary> {
    let entries = har::load_archive(har_path)?;
    let base = archive_base_name(har_path);
    let output_dir = alloc.allocate(&base);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    tracing::info!("extracting {} -> {}", har_path.display(), output_dir.display());

    let mut summary = ArchiveSummary {
        name: base,
        output_dir: output_dir.clone(),
        saved: 0,
        removed: 0,
        failed: 0,
    };
    for entry in &entries {
        match extract_entry(entry, &output_dir, opts) {
            Ok(WriteOutcome::Saved(path)) => {
                summary.saved += 1;
                tracing::info!("saved {}", path.display());
            }
            Ok(WriteOutcome::RemovedEmpty(path)) => {
                summary.removed += 1;
                tracing::info!("removed 0-byte file {}", path.display());
            }
            Err(err) => {
                summary.failed += 1;
                tracing::warn!("skipped entry {}: {}", entry.request.url, err);
            }
        }
    }
    Ok(summary)
}

/// Runs extraction over every archive found at `input` (a single `.har` file
/// or a directory scanned for them). One archive's failure never stops the
/// next; partially written directories are left in place.
pub fn extract_all(input: &Path, output_root: &Path, opts: &ExtractOptions) -> Result<RunSummary> {
    fs::create_dir_all(output_root)
        .with_context(|| format!("create output root: {}", output_root.display()))?;
    let archives = discover_archives(input)?;
    if archives.is_empty() {
        tracing::warn!("no .har files found in {}", input.display());
    }

    let mut alloc = OutputDirAllocator::new(output_root);
    let mut run = RunSummary::default();
    for har_path in &archives {
        match extract_archive(har_path, &mut alloc, opts) {
            Ok(summary) => {
                tracing::info!(
                    "{}: saved {}, removed {}, failed {}",
                    summary.name,
                    summary.saved,
                    summary.removed,
                    summary.failed
                );
                run.archives.push(summary);
            }
            Err(err) => {
                run.archives_failed += 1;
                tracing::error!("skipping archive {}: {:#}", har_path.display(), err);
            }
        }
    }
    Ok(run)
}

/// Archive files at `input`: the file itself, or the directory's `.har`
/// entries (extension matched case-insensitively), sorted by name.
fn discover_archives(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let read =
        fs::read_dir(input).with_context(|| format!("read input dir: {}", input.display()))?;
    let mut archives = Vec::new();
    for dirent in read {
        let path = dirent?.path();
        if path.is_file() && has_har_extension(&path) {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives)
}

fn has_har_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("har"))
        .unwrap_or(false)
}

fn archive_base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::HarContent;

    fn opts() -> ExtractOptions {
        ExtractOptions {
            remove_empty_files: true,
            max_filename_len: 250,
        }
    }

    #[test]
    fn discover_archives_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.har", "a.HAR", "notes.txt", "c.harx"] {
            std::fs::write(dir.path().join(name), b"{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("sub.har")).unwrap();
        let found = discover_archives(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.HAR", "b.har"]);
    }

    #[test]
    fn discover_archives_single_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.har");
        std::fs::write(&file, b"{}").unwrap();
        assert_eq!(discover_archives(&file).unwrap(), vec![file]);
    }

    #[test]
    fn discover_archives_missing_dir_err() {
        assert!(discover_archives(Path::new("/nonexistent/input")).is_err());
    }

    #[test]
    fn archive_base_name_strips_extension() {
        assert_eq!(archive_base_name(Path::new("/tmp/session.har")), "session");
        assert_eq!(archive_base_name(Path::new("capture.v2.har")), "capture.v2");
    }

    #[test]
    fn extract_entry_malformed_url_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let entry = HarEntry {
            request: crate::har::HarRequest {
                url: "::not-a-url::".to_string(),
            },
            response: crate::har::HarResponse {
                status: 200,
                content: HarContent {
                    text: Some("x".to_string()),
                    encoding: None,
                },
            },
        };
        let err = extract_entry(&entry, dir.path(), &opts()).unwrap_err();
        assert!(matches!(err, EntryError::MalformedUrl { .. }));
    }
}
