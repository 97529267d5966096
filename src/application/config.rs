use crate::domain::CalendarProps;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CALVIEW_CONFIG";
/// Log filter directives, in `env_logger` syntax (e.g. `debug`, `calview=trace`)
pub const LOG_ENV: &str = "CALVIEW_LOG";

pub struct Config {
    pub props_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let props_path = lookup(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("calview")
                    .join("calendar.json")
            });

        Self { props_path }
    }

    /// Load calendar props from the configured file.
    /// A missing file gives default props.
    pub fn load_props(&self) -> Result<CalendarProps> {
        load_props(&self.props_path)
    }
}

pub fn load_props(path: &Path) -> Result<CalendarProps> {
    if !path.exists() {
        log::debug!("no props file at {}, using defaults", path.display());
        return Ok(CalendarProps::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read props file {}", path.display()))?;
    let props = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse props file {}", path.display()))?;
    log::debug!("loaded calendar props from {}", path.display());
    Ok(props)
}
