//! `harx extract <input>` – extract HAR archives into the output root.

use anyhow::Result;
use harx_core::config::HarxConfig;
use harx_core::extract::{self, ExtractOptions};
use std::path::{Path, PathBuf};

pub fn run_extract(
    cfg: &HarxConfig,
    input: &Path,
    out: Option<&Path>,
    keep_empty: bool,
    max_name_len: Option<usize>,
) -> Result<()> {
    let output_root: PathBuf = out
        .map(Path::to_path_buf)
        .or_else(|| cfg.output_root.clone())
        .unwrap_or_else(|| PathBuf::from("output"));
    let opts = ExtractOptions {
        remove_empty_files: if keep_empty {
            false
        } else {
            cfg.remove_empty_files
        },
        max_filename_len: max_name_len.unwrap_or(cfg.max_filename_len),
    };

    let run = extract::extract_all(input, &output_root, &opts)?;

    for archive in &run.archives {
        println!(
            "{}: saved {}, removed {}, failed {} -> {}",
            archive.name,
            archive.saved,
            archive.removed,
            archive.failed,
            archive.output_dir.display()
        );
    }
    println!(
        "Done: {} archive(s), {} saved, {} removed, {} failed entries",
        run.archives.len(),
        run.saved(),
        run.removed(),
        run.failed_entries()
    );

    if run.archives_failed > 0 {
        anyhow::bail!("{} archive(s) could not be loaded", run.archives_failed);
    }
    Ok(())
}
