use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "staffseed";
const CONFIG_FILE: &str = "config.yaml";

pub const DEFAULT_DB_PATH: &str = "example.db";
pub const DEFAULT_TABLE: &str = "employees";
pub const DEFAULT_COUNT: usize = 100;

/// Where and how to seed. Every field may be omitted from the YAML file.
///
/// Defaults: `example.db` in the working directory, table `employees`,
/// 100 records, wipe before inserting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub db_path: PathBuf,
    pub table: String,
    pub default_count: usize,
    pub wipe: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            table: DEFAULT_TABLE.to_string(),
            default_count: DEFAULT_COUNT,
            wipe: true,
        }
    }
}

impl SeedConfig {
    /// Load `config.yaml` from the app config directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        let path = app_config_dir()?.join(CONFIG_FILE);
        Self::load_from(&path)
    }

    /// Load from an explicit file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: SeedConfig = serde_yaml::from_slice(&data)
            .with_context(|| format!("failed to parse YAML at {}", path.display()))?;
        Ok(config)
    }

    /// The database path with `~` and environment variables expanded.
    pub fn resolved_db_path(&self) -> Result<PathBuf> {
        expand_path(&self.db_path)
            .ok_or_else(|| anyhow::anyhow!("cannot expand file path {}", self.db_path.display()))
    }
}

/// `<os config dir>/staffseed`, created on first use. macOS uses `~/.config`.
pub fn app_config_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs_next::home_dir().map(|home| home.join(".config"))
    } else {
        dirs_next::config_dir()
    };
    let dir = base
        .context("no per-user config directory on this platform")?
        .join(APP_NAME);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Expand a leading `~` and whole-component `$VAR` (unix) or `%VAR%` (windows).
/// Unset variables expand to nothing.
pub fn expand_path(path: &Path) -> Option<PathBuf> {
    path.components().try_fold(PathBuf::new(), |mut expanded, component| {
        let part = component.as_os_str().to_str()?;
        if part == "~" && expanded.as_os_str().is_empty() {
            expanded.push(dirs_next::home_dir()?);
        } else if let Some(var) = env_var_name(part) {
            expanded.push(std::env::var(var).unwrap_or_default());
        } else {
            expanded.push(part);
        }
        Some(expanded)
    })
}

fn env_var_name(part: &str) -> Option<&str> {
    if cfg!(windows) {
        part.strip_prefix('%')?.strip_suffix('%')
    } else {
        part.strip_prefix('$')
    }
}
