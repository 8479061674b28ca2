use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Process settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Reject signups once `max_participants` is reached. Off by default.
    pub enforce_capacity: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            enforce_capacity: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let enforce_capacity = match lookup("ENFORCE_CAPACITY") {
            Some(v) => parse_bool(&v)
                .with_context(|| format!("ENFORCE_CAPACITY must be true or false, got '{}'", v))?,
            None => defaults.enforce_capacity,
        };

        Ok(Self {
            host,
            port,
            static_dir,
            enforce_capacity,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.port, 8000);
        assert!(!cfg.enforce_capacity);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3001"),
            ("STATIC_DIR", "public"),
            ("ENFORCE_CAPACITY", "Yes"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.static_dir, PathBuf::from("public"));
        assert!(cfg.enforce_capacity);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("ENFORCE_CAPACITY", "maybe")])).is_err());
    }
}
