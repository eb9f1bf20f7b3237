use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Data directory: `$FAMLEDGER_HOME`, else `~/.famledger`.
pub fn famledger_home() -> Result<PathBuf> {
    resolve_home(
        std::env::var("FAMLEDGER_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

pub fn ensure_famledger_home() -> Result<PathBuf> {
    let dir = famledger_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

fn resolve_home(famledger_home: Option<String>, home: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = famledger_home.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = home.context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".famledger"))
}
