//! Decode and write one entry's response body to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::har::HarContent;

use super::ExtractOptions;

/// What happened to one entry's output file.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File written and kept.
    Saved(PathBuf),
    /// File written empty and deleted under the zero-byte policy.
    RemovedEmpty(PathBuf),
}

/// Why one entry was skipped. Never aborts the archive or the run.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("malformed URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("base64 decode failed: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("filesystem: {0}")]
    Filesystem(#[from] std::io::Error),
}

/// Decodes `content` and writes it to `target`, overwriting an existing file.
/// Parent directories are created as needed. With the zero-byte policy on,
/// an empty result is deleted again and reported as removed.
pub fn write_body(
    target: &Path,
    content: &HarContent,
    opts: &ExtractOptions,
) -> Result<WriteOutcome, EntryError> {
    let body = content.body_bytes()?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, &body)?;

    if opts.remove_empty_files && fs::metadata(target)?.len() == 0 {
        fs::remove_file(target)?;
        return Ok(WriteOutcome::RemovedEmpty(target.to_path_buf()));
    }
    Ok(WriteOutcome::Saved(target.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(remove_empty: bool) -> ExtractOptions {
        ExtractOptions {
            remove_empty_files: remove_empty,
            max_filename_len: 250,
        }
    }

    fn text_content(text: &str) -> HarContent {
        HarContent {
            text: Some(text.to_string()),
            encoding: None,
        }
    }

    #[test]
    fn writes_plain_text_body() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("page/index.html");
        let outcome = write_body(&target, &text_content("hello"), &opts(true)).unwrap();
        assert_eq!(outcome, WriteOutcome::Saved(target.clone()));
        assert_eq!(fs::read(&target).unwrap(), b"hello");
    }

    #[test]
    fn writes_base64_body() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("img.png");
        let content = HarContent {
            text: Some("AQID".to_string()),
            encoding: Some("base64".to_string()),
        };
        write_body(&target, &content, &opts(true)).unwrap();
        assert_eq!(fs::read(&target).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn creates_nested_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c/d.txt");
        write_body(&target, &text_content("x"), &opts(true)).unwrap();
        assert!(target.exists());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("f.txt");
        write_body(&target, &text_content("first"), &opts(true)).unwrap();
        write_body(&target, &text_content("second"), &opts(true)).unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"second");
    }

    #[test]
    fn empty_body_removed_under_policy() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("empty.html");
        let outcome = write_body(&target, &text_content(""), &opts(true)).unwrap();
        assert_eq!(outcome, WriteOutcome::RemovedEmpty(target.clone()));
        assert!(!target.exists());
    }

    #[test]
    fn empty_body_kept_without_policy() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("empty.html");
        let outcome = write_body(&target, &text_content(""), &opts(false)).unwrap();
        assert_eq!(outcome, WriteOutcome::Saved(target.clone()));
        assert!(target.exists());
        assert_eq!(fs::metadata(&target).unwrap().len(), 0);
    }

    #[test]
    fn invalid_base64_is_entry_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("bad.bin");
        let content = HarContent {
            text: Some("!!!".to_string()),
            encoding: Some("base64".to_string()),
        };
        let err = write_body(&target, &content, &opts(true)).unwrap_err();
        assert!(matches!(err, EntryError::Decode(_)));
        assert!(!target.exists());
    }
}
