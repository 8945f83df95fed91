use std::{env, fs, path::PathBuf, process};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub core: CoreConfig,
    pub uploader: UploaderConfig,
    pub shortener: ShortenerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub secure: bool,
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    pub directory: String,
    pub blacklisted: Vec<String>,
    pub length: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShortenerConfig {
    pub length: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            secure: false,
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            redis_url: None,
        }
    }
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            directory: "./uploads".to_string(),
            blacklisted: Vec::new(),
            length: 6,
        }
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self { length: 4 }
    }
}

impl Config {
    /// Reads `config.json` (or `$VOIDBIN_CONFIG`) and terminates the process
    /// on a missing or malformed file.
    pub fn load() -> Self {
        let path = env::var("VOIDBIN_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.json"));
        if !path.exists() {
            tracing::error!(path = %path.display(), "Config file not found, please create one.");
            process::exit(1);
        }
        tracing::info!(path = %path.display(), "Reading config file");
        let raw = fs::read_to_string(&path).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to read config file");
            process::exit(1);
        });
        match Self::parse(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse config file");
                process::exit(1);
            }
        }
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.core.host, self.core.port)
    }

    /// `DATABASE_URL` overrides the config value.
    pub fn database_url(&self) -> String {
        env::var("DATABASE_URL")
            .ok()
            .or_else(|| self.core.database_url.clone())
            .unwrap_or_else(|| {
                tracing::error!("No database URL in config.json or DATABASE_URL");
                process::exit(1);
            })
    }

    /// `REDIS_URL` overrides the config value.
    pub fn redis_url(&self) -> String {
        env::var("REDIS_URL")
            .ok()
            .or_else(|| self.core.redis_url.clone())
            .unwrap_or_else(|| {
                tracing::error!("No redis URL in config.json or REDIS_URL");
                process::exit(1);
            })
    }

    /// Scheme for generated URLs, per the `core.secure` flag.
    pub fn scheme(&self) -> &'static str {
        if self.core.secure {
            "https"
        } else {
            "http"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let raw = r#"{
            "core": {
                "secure": true,
                "host": "127.0.0.1",
                "port": 8080,
                "database_url": "postgres://localhost/voidbin",
                "redis_url": "redis://localhost"
            },
            "uploader": {
                "directory": "/var/lib/voidbin",
                "blacklisted": ["exe", "bat"],
                "length": 8
            },
            "shortener": { "length": 5 }
        }"#;
        let config = Config::parse(raw).unwrap();
        assert!(config.core.secure);
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.scheme(), "https");
        assert_eq!(config.uploader.blacklisted, vec!["exe", "bat"]);
        assert_eq!(config.uploader.length, 8);
        assert_eq!(config.shortener.length, 5);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::parse("{}").unwrap();
        assert!(!config.core.secure);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.scheme(), "http");
        assert_eq!(config.uploader.directory, "./uploads");
        assert!(config.uploader.blacklisted.is_empty());
        assert_eq!(config.uploader.length, 6);
        assert_eq!(config.shortener.length, 4);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Config::parse("{ not json").is_err());
    }
}
