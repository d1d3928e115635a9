use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// When unset the catalog lives in process memory only.
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let host: IpAddr = env_or("SHOWCASE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SHOWCASE_HOST: {e}"))?;

        let port: u16 = env_or("SHOWCASE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SHOWCASE_PORT: {e}"))?;

        let static_dir = PathBuf::from(env_or("SHOWCASE_STATIC_DIR", "static"));

        let max_body_size: usize = env_or("SHOWCASE_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SHOWCASE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("SHOWCASE_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            static_dir,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
