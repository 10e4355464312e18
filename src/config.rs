//! Config file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::converter::ConversionMode;

/// uzconvert settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppConfig {
    /// Mode used when neither --mode nor auto-detection applies
    #[serde(default = "default_mode")]
    pub default_mode: ConversionMode,
    /// Pick the transliteration direction from the input script
    /// when no mode is given
    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,
}

fn default_mode() -> ConversionMode {
    ConversionMode::CyrillicToLatin
}

fn default_auto_detect() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            auto_detect: default_auto_detect(),
        }
    }
}

/// Config file path: $XDG_CONFIG_HOME/uzconvert/config.json
/// (~/.config/uzconvert/config.json when XDG_CONFIG_HOME is unset)
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_absolute())
                .map(|home| home.join(".config"))
        })
        // no usable HOME: fall back to a writable location
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("uzconvert").join("config.json")
}

/// Load the config file (defaults when missing or unparsable)
pub fn load_config() -> AppConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("config file {} is invalid: {}", path.display(), e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Save the config file
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("cannot create config dir: {}", e))?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| format!("serialization failed: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("cannot write config file: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_mode, ConversionMode::CyrillicToLatin);
        assert!(config.auto_detect);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = AppConfig {
            default_mode: ConversionMode::LatinToCyrillic,
            auto_detect: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_mode, ConversionMode::LatinToCyrillic);
        assert!(!parsed.auto_detect);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"auto_detect": false}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_mode, ConversionMode::CyrillicToLatin);
        assert!(!config.auto_detect);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        assert_eq!(config_path(), dir.path().join("uzconvert").join("config.json"));

        let config = AppConfig {
            default_mode: ConversionMode::LatinToCyrillic,
            auto_detect: false,
        };
        save_config(&config).unwrap();

        let loaded = load_config();
        assert_eq!(loaded.default_mode, ConversionMode::LatinToCyrillic);
        assert!(!loaded.auto_detect);

        std::env::remove_var("XDG_CONFIG_HOME");
    }
}
