//! Environment-driven configuration for the `engineer` binary.
use std::env;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    /// Directory holding `modules.ron` and optional table overrides.
    pub data_dir: PathBuf,
    /// When set, logs are also written to `engineer.log` in this directory.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ENGINEER_DATA_DIR` - content directory (default: platform data dir)
    /// - `ENGINEER_LOG_DIR` - enables file logging into this directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: read_var(&lookup, "ENGINEER_DATA_DIR").unwrap_or_else(default_data_dir),
            log_dir: read_var(&lookup, "ENGINEER_LOG_DIR"),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_dir: None,
        }
    }
}

/// Platform data directory for engineering content.
///
/// - macOS: `~/Library/Application Support/engineer`
/// - Linux: `~/.local/share/engineer` (or `$XDG_DATA_HOME/engineer`)
/// - Windows: `%APPDATA%\engineer`
/// - Fallback: `./data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "engineer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = lookup(key)?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn reads_directories_from_environment() {
        let config = config_from(&[
            ("ENGINEER_DATA_DIR", "/srv/engineer"),
            ("ENGINEER_LOG_DIR", "/var/log/engineer"),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/engineer"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/engineer")));
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = config_from(&[("ENGINEER_DATA_DIR", "  "), ("ENGINEER_LOG_DIR", "")]);
        assert_eq!(config, CliConfig::default());
    }
}
