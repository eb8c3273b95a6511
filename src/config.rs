//! Server configuration read from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "b2b_health_app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TEMPLATES_GLOB: &str = "templates/**/*";
const DEFAULT_STOREFRONT_DIR: &str = "./pharmacure";
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_PRESCRIPTIONS_DIR: &str = "./static/prescriptions";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Runtime settings of the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Glob handed to Tera to discover page templates.
    pub templates_glob: String,
    /// Directory served under `/pharmacure`.
    pub storefront_dir: PathBuf,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
    /// Where uploaded prescriptions are written.
    pub prescriptions_dir: PathBuf,
    pub pool_size: u32,
}

impl ServerConfig {
    /// Read the configuration from the process environment, loading `.env`
    /// first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Unset or
    /// unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT `{raw}`, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let pool_size = lookup("DB_POOL_SIZE")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_POOL_SIZE);

        Self {
            database_url: string("DATABASE_URL", DEFAULT_DATABASE_URL),
            address: string("ADDRESS", DEFAULT_ADDRESS),
            port,
            templates_glob: string("TEMPLATES_GLOB", DEFAULT_TEMPLATES_GLOB),
            storefront_dir: PathBuf::from(string("STOREFRONT_DIR", DEFAULT_STOREFRONT_DIR)),
            assets_dir: PathBuf::from(string("ASSETS_DIR", DEFAULT_ASSETS_DIR)),
            prescriptions_dir: PathBuf::from(string(
                "PRESCRIPTIONS_DIR",
                DEFAULT_PRESCRIPTIONS_DIR,
            )),
            pool_size,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
