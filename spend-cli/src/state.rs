use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the home directory (scripts, tests).
pub const HOME_ENV: &str = "SMART_SPENDS_HOME";

pub fn spends_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".smart-spends"))
}

pub fn ensure_spends_home() -> Result<PathBuf> {
    let dir = spends_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Data directory: the configured one, else `<home>/data`.
pub fn data_dir(home: &Path, configured: Option<&str>) -> PathBuf {
    match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home.join("data"),
    }
}
