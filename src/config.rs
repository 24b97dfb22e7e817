// src/config.rs
use serde::Deserialize;
use std::sync::OnceLock;

use crate::enums::{CipherMode, PaddingPolicy};

/// Global config — loaded once, built-in defaults when no file exists
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub limits: Limits,
}

/// Caller-consumed hints for pre-selecting a mode and policy (e.g. in a
/// form or CLI flag default). The transform entry points take mode and
/// policy explicitly and never consult these — transforms stay free of
/// process-global state.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Defaults {
    #[serde(default)]
    pub mode: CipherMode,
    #[serde(default)]
    pub padding: PaddingPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

// 100 MiB — transforms are single-pass and fully in-memory
fn default_max_file_size() -> u64 {
    100 * 1024 * 1024
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing
///
/// `CIPHER_TOOLKIT_CONFIG` names the TOML file, defaulting to
/// `cipher-toolkit.toml` in the working directory.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path = std::env::var("CIPHER_TOOLKIT_CONFIG")
            .unwrap_or_else(|_| "cipher-toolkit.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            match std::fs::read_to_string(&config_path)
                .map_err(|e| e.to_string())
                .and_then(|content| toml::from_str(&content).map_err(|e| e.to_string()))
            {
                Ok(conf) => return conf,
                Err(err) => {
                    log::warn!("ignoring unreadable config {config_path}: {err}");
                }
            }
        }

        Config {
            defaults: Defaults::default(),
            limits: Limits::default(),
        }
    })
}
