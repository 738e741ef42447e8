use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    /// Access-token (and session cookie) lifetime.
    pub session_minutes: i64,
    pub max_body_size: usize,
    /// Proxies whose X-Forwarded-For is trusted when resolving the
    /// source IP recorded in the activity log.
    pub trusted_proxies: Vec<IpNet>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("FITGYM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FITGYM_HOST: {e}"))?;

        let port: u16 = env_or("FITGYM_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid FITGYM_PORT: {e}"))?;

        let session_minutes: i64 = env_or("FITGYM_SESSION_MINUTES", "60")
            .parse()
            .map_err(|e| format!("Invalid FITGYM_SESSION_MINUTES: {e}"))?;

        let max_body_size: usize = env_or("FITGYM_MAX_BODY_SIZE", "262144")
            .parse()
            .map_err(|e| format!("Invalid FITGYM_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = env_or("FITGYM_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid FITGYM_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log_level = env_or("FITGYM_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            session_minutes,
            max_body_size,
            trusted_proxies,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
