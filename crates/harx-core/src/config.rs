use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default cap on a generated file name's length, in characters.
/// Stays under common filesystem filename limits (Windows in particular).
pub const DEFAULT_MAX_FILENAME_LEN: usize = 250;

fn default_remove_empty() -> bool {
    true
}

fn default_max_filename_len() -> usize {
    DEFAULT_MAX_FILENAME_LEN
}

/// Global configuration loaded from `~/.config/harx/config.toml`.
/// CLI flags override individual fields per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarxConfig {
    /// Default output root for extracted trees. When missing, the CLI
    /// falls back to `./output` relative to the current directory.
    #[serde(default)]
    pub output_root: Option<PathBuf>,
    /// Delete zero-byte output files after writing and count them separately.
    #[serde(default = "default_remove_empty")]
    pub remove_empty_files: bool,
    /// Maximum length of a generated file name; longer names are truncated
    /// with their extension preserved.
    #[serde(default = "default_max_filename_len")]
    pub max_filename_len: usize,
}

impl Default for HarxConfig {
    fn default() -> Self {
        Self {
            output_root: None,
            remove_empty_files: true,
            max_filename_len: DEFAULT_MAX_FILENAME_LEN,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarxConfig = toml::from_str(&data)?;
    Ok(cfg)
}
