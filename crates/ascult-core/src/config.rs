use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Number of insert attempts before find-or-create gives up on a contended identity.
pub const DEFAULT_INSERT_ATTEMPTS: u32 = 3;

/// Find-or-create tuning (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalConfig {
    /// Maximum inserts per canonicalization. Each lost race re-queries and tries again.
    pub insert_attempts: u32,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            insert_attempts: DEFAULT_INSERT_ATTEMPTS,
        }
    }
}

/// Enrichment queue parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Pending notifications held before new ones are dropped.
    pub queue_capacity: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self { queue_capacity: 64 }
    }
}

/// Global configuration loaded from `~/.config/ascult/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AscultConfig {
    /// Database file; defaults to `~/.local/state/ascult/urls.db`.
    #[serde(default)]
    pub database_path: Option<String>,
    #[serde(default)]
    pub canonical: CanonicalConfig,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ascult")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AscultConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AscultConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AscultConfig = toml::from_str(&data)?;
    Ok(cfg)
}
