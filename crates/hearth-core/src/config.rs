use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

// Protocol constants — must match schedule-list client expectations
pub const PROTOCOL_VERSION: u32 = 1;
pub const DEFAULT_PORT: u16 = 18790;
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const MAX_PAYLOAD_BYTES: usize = 128 * 1024; // 128 KB hard cap per frame
pub const HEARTBEAT_INTERVAL_SECS: u64 = 30; // tick event cadence

/// Top-level config (hearth.toml + HEARTH_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HearthConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Where durable state lives. The schedule backing file is a hidden JSON
/// file inside this directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_storage_dir() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.hearth", home)
}

impl HearthConfig {
    /// Load config from a TOML file with HEARTH_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.hearth/hearth.toml
    ///
    /// A missing file yields the defaults; a present but invalid file is a
    /// config error.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: HearthConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("HEARTH_").split("_"))
            .extract()
            .map_err(|e| crate::error::HearthError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.hearth/hearth.toml", home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_usable() {
        let config = HearthConfig::default();
        assert_eq!(config.gateway.port, DEFAULT_PORT);
        assert_eq!(config.gateway.bind, DEFAULT_BIND);
        assert!(!config.storage.dir.is_empty());
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hearth.toml");
        fs::write(&path, "[gateway]\nport = 9999\n").expect("write");

        let config = HearthConfig::load(path.to_str()).expect("load");
        assert_eq!(config.gateway.port, 9999);
        // untouched sections keep their defaults
        assert_eq!(config.gateway.bind, DEFAULT_BIND);
        assert!(!config.storage.dir.is_empty());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = HearthConfig::load(Some("/nonexistent/hearth.toml")).expect("load");
        assert_eq!(config.gateway.port, DEFAULT_PORT);
    }
}
