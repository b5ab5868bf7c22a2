//! Application configuration.
//!
//! Values resolve with priority: `config.toml` > environment (`.env` is loaded
//! unless `ENV=production`) > defaults.
//!
//! ```toml
//! [database]
//! path = "data/sentences.db"
//!
//! [server]
//! addr = "0.0.0.0"
//! port = 8080
//!
//! [seed]
//! path = "sentences.toml"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Server address to bind to when nothing is configured
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0";

pub const DEFAULT_SERVER_PORT: u16 = 8080;

pub const DEFAULT_DATABASE_PATH: &str = "data/sentences.db";

pub const CONFIG_FILE: &str = "config.toml";

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<DatabaseSection>,
    server: Option<ServerSection>,
    seed: Option<SeedSection>,
}

#[derive(Debug, Deserialize)]
struct DatabaseSection {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    addr: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct SeedSection {
    path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub addr: String,
    pub port: u16,
    /// Optional TOML sentence bank used to seed an empty database
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load from `config.toml`, the process environment and `.env`.
    pub fn load() -> Self {
        if std::env::var("ENV").as_deref() != Ok("production") {
            if let Err(e) = dotenvy::dotenv() {
                tracing::debug!("No .env file loaded: {}", e);
            }
        }

        let file = read_file_config(Path::new(CONFIG_FILE));
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let database_path = file
            .database
            .and_then(|db| db.path)
            .or_else(|| env("DATABASE_PATH"))
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        let (file_addr, file_port) = file
            .server
            .map(|s| (s.addr, s.port))
            .unwrap_or((None, None));
        let addr = file_addr
            .or_else(|| env("ADDR"))
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let port = file_port
            .or_else(|| env("PORT").and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_SERVER_PORT);

        let seed_path = file
            .seed
            .and_then(|s| s.path)
            .or_else(|| env("SEED_PATH"))
            .map(PathBuf::from);

        tracing::info!(database = %database_path, %addr, port, "Configuration resolved");

        Self {
            database_path: PathBuf::from(database_path),
            addr,
            port,
            seed_path,
        }
    }

    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

fn read_file_config(path: &Path) -> FileConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return FileConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(FileConfig::default(), env_from(&[]));
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = env_from(&[
            ("DATABASE_PATH", "/tmp/drill.db"),
            ("PORT", "9000"),
            ("SEED_PATH", "bank.toml"),
        ]);
        let config = AppConfig::resolve(FileConfig::default(), env);
        assert_eq!(config.database_path, PathBuf::from("/tmp/drill.db"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed_path, Some(PathBuf::from("bank.toml")));
    }

    #[test]
    fn test_file_overrides_env() {
        let file: FileConfig = toml::from_str(
            r#"
            [database]
            path = "from-file.db"

            [server]
            port = 3001
            "#,
        )
        .unwrap();
        let env = env_from(&[("DATABASE_PATH", "from-env.db"), ("PORT", "9000"), ("ADDR", "127.0.0.1")]);

        let config = AppConfig::resolve(file, env);
        assert_eq!(config.database_path, PathBuf::from("from-file.db"));
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = AppConfig::resolve(FileConfig::default(), env_from(&[("PORT", "http")]));
        assert_eq!(config.port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_missing_config_file_is_default() {
        let config = read_file_config(Path::new("definitely/not/here.toml"));
        assert!(config.database.is_none());
        assert!(config.server.is_none());
    }
}
