use anyhow::{Context, Result};
use famledger_core::WhatIf;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_famledger_home, famledger_home};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSection,
    pub logging: LoggingSection,
    /// Defaults for goal simulations whose payload has no `what_if`
    pub simulation: WhatIf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Pretty-print JSON output (overridden by `--compact`)
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive used when neither `RUST_LOG` nor `--verbose` is set
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Where the config lives. Resolving the path never creates the directory.
pub fn config_path() -> Result<PathBuf> {
    Ok(famledger_home()?.join(CONFIG_FILE))
}

/// Effective config: defaults when the home directory cannot be resolved
/// or holds no config file.
pub fn load_config() -> Result<Config> {
    load_config_in(famledger_home().ok().as_deref())
}

fn load_config_in(home: Option<&Path>) -> Result<Config> {
    match home {
        Some(dir) => load_config_from(&dir.join(CONFIG_FILE)),
        None => Ok(Config::default()),
    }
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
    let p = ensure_famledger_home()?.join(CONFIG_FILE);
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    let cfg = load_config()?;
    println!("# {}", p.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
