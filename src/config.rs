//! Optional per-user defaults.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/i3ws/config.json`
//! (falling back to `~/.config/i3ws/config.json`).  Command-line flags
//! always take precedence over the file.
//!
//! # Example
//!
//! ```json
//! {
//!   "new": { "max": 10, "reserved": [1, 2, 9] },
//!   "rename": { "input_cmd": "rofi -dmenu -p {prompt} -filter {prefix}", "send_to_wm": true }
//! }
//! ```

use crate::allocator::DEFAULT_MAX;
use crate::model::WorkspaceNum;
use crate::renamer::DEFAULT_INPUT_CMD;
use crate::workspaces::WorkspaceSet;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional; a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Defaults for `new-i3-workspace`.
    #[serde(default)]
    pub new: NewConfig,

    /// Defaults for `rename-i3-workspace`.
    #[serde(default)]
    pub rename: RenameConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewConfig {
    /// Highest workspace number handed out.  Default: `20`.
    pub max: WorkspaceNum,
    /// Numbers never handed out.  Default: none.
    pub reserved: WorkspaceSet,
}

impl Default for NewConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            reserved: WorkspaceSet::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Prompt command template.  Default: `i3-input -F {i3cmd} -P {prompt}{prefix}`.
    pub input_cmd: String,
    /// Send the rename command after reading input.  Default: `false`.
    pub send_to_wm: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            input_cmd: DEFAULT_INPUT_CMD.to_string(),
            send_to_wm: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Load the user's configuration, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load_default() -> Self {
        let path = config_dir().join("config.json");
        match Self::load(&path) {
            Ok(cfg) => {
                info!("loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                info!("no config file ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/i3ws`).
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("i3ws")
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "new": { "max": 9, "reserved": [3, 1, 3] },
            "rename": { "input_cmd": "rofi -dmenu", "send_to_wm": true }
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.new.max, 9);
        assert_eq!(cfg.new.reserved.to_vec(), vec![1, 3]);
        assert_eq!(cfg.rename.input_cmd, "rofi -dmenu");
        assert!(cfg.rename.send_to_wm);
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.new.max, DEFAULT_MAX);
        assert!(cfg.new.reserved.is_empty());
        assert_eq!(cfg.rename.input_cmd, DEFAULT_INPUT_CMD);
        assert!(!cfg.rename.send_to_wm);
    }

    #[test]
    fn deserialize_partial_section() {
        let cfg: Config = serde_json::from_str(r#"{ "rename": { "send_to_wm": true } }"#).unwrap();
        assert!(cfg.rename.send_to_wm);
        assert_eq!(cfg.rename.input_cmd, DEFAULT_INPUT_CMD);
        assert_eq!(cfg.new.max, DEFAULT_MAX);
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "new": {}, "future_section": { "key": 42 } }"#;
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_missing_file_fails() {
        let err = Config::load(Path::new("/nonexistent/i3ws/config.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
