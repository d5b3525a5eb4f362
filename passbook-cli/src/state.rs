use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$PASSBOOK_HOME`, or `~/.passbook` when unset.
pub fn passbook_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("PASSBOOK_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".passbook"))
}

pub fn ensure_passbook_home() -> Result<PathBuf> {
    let dir = passbook_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
