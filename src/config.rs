use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Directory holding the employees and leaves tables
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,

    // Rate limiting, per client IP. 0 disables it.
    pub rate_per_min: u32,

    pub api_prefix: String,

    /// Frontend origin allowed by CORS, alongside the local dev origins
    pub base_url: String,
}

/// Dev-server origins that are always allowed.
const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8000".to_string(),
            data_dir: PathBuf::from("data"),
            log_dir: PathBuf::from("logs"),
            rate_per_min: 600,
            api_prefix: String::new(),
            base_url: "http://localhost:5173".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let rate_per_min = match lookup("RATE_PER_MIN") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("RATE_PER_MIN must be a non-negative integer, got {raw:?}"))?,
            None => defaults.rate_per_min,
        };

        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or(defaults.server_addr),
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            log_dir: lookup("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            rate_per_min,
            api_prefix: lookup("API_PREFIX")
                .map(|p| p.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_prefix),
            base_url: lookup("BASE_URL")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or(defaults.base_url),
        })
    }

    /// Origins the CORS layer accepts: `base_url` plus the dev origins.
    pub fn cors_origins(&self) -> Vec<&str> {
        let mut origins = vec![self.base_url.as_str()];
        for dev in DEV_ORIGINS {
            if !origins.contains(&dev) {
                origins.push(dev);
            }
        }
        origins
    }
}
