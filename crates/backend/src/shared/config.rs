use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FixturesConfig {
    /// JSON file served at `/customers`; the embedded sample is used when absent
    pub customers_path: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[fixtures]
customers_path = "db.json"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the customers fixture path.
/// Relative paths are taken relative to the executable directory.
pub fn get_customers_fixture_path(config: &Config) -> Option<PathBuf> {
    let raw = config.fixtures.customers_path.as_deref()?;
    Some(resolve_path(raw, exe_dir().as_deref()))
}

fn resolve_path(raw: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match base_dir {
        Some(dir) => dir.join(path),
        None => PathBuf::from(raw),
    }
}

fn exe_dir() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    exe_path.parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.fixtures.customers_path.as_deref(), Some("db.json"));
    }

    #[test]
    fn test_sections_optional() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.fixtures.customers_path.is_none());
        assert!(get_customers_fixture_path(&config).is_none());
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/opt/toystore");
        assert_eq!(
            resolve_path("db.json", Some(base)),
            PathBuf::from("/opt/toystore/db.json")
        );
        assert_eq!(resolve_path("db.json", None), PathBuf::from("db.json"));
        assert_eq!(
            resolve_path("/data/db.json", Some(base)),
            PathBuf::from("/data/db.json")
        );
    }
}
