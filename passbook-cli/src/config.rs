use anyhow::{Context, Result};
use passbook_analysis::{DEFAULT_RECENT_LIMIT, Granularity};
use passbook_analysis::rollups::TOP_MERCHANTS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_passbook_home, passbook_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Bucket size for `passbook periods`
    pub granularity: Granularity,
    /// Rows shown by `passbook recent`
    pub recent_limit: usize,
    /// Merchants shown by `passbook merchants`
    pub top_merchants: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// tracing filter directive, e.g. "warn" or "passbook_ingest=debug"
    pub level: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            granularity: Granularity::Monthly,
            recent_limit: DEFAULT_RECENT_LIMIT,
            top_merchants: TOP_MERCHANTS,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(passbook_home()?.join("config.toml"))
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = ensure_passbook_home()?.join("config.toml");
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
