use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::PlannerConfig;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "dayplan.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "DAYPLAN_CONFIG";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Pick the config file to load.
///
/// An explicit path wins, then `$DAYPLAN_CONFIG`, then `dayplan.toml` in
/// `cwd` if it exists. `None` means built-in defaults.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value));
    }
    let local = cwd.join(CONFIG_FILE_NAME);
    local.is_file().then_some(local)
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<PlannerConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve and load the effective config for this process, along with the
/// file it came from (`None` for built-in defaults)
pub fn load_config(
    explicit: Option<&Path>,
) -> Result<(PlannerConfig, Option<PathBuf>), ConfigError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    match resolve_config_path(explicit, env_value.as_deref(), &cwd) {
        Some(path) => Ok((read_config(&path)?, Some(path))),
        None => Ok((PlannerConfig::default(), None)),
    }
}

/// Render a config as TOML text
pub fn config_to_string(config: &PlannerConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}
