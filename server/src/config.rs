//! Server configuration, read from the environment at startup.

use std::env;

/// Runtime configuration. Everything is environment-level; there are no
/// dynamic runtime options.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// MySQL connection URL for the task store; absent means in-memory.
    pub database_url: Option<String>,
    /// The single origin allowed by CORS.
    pub cors_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: None,
            cors_origin: "http://localhost:4200".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_string("TASKBOARD_HOST", &defaults.host),
            port: env_u16("TASKBOARD_PORT", defaults.port),
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            cors_origin: env_string("TASKBOARD_CORS_ORIGIN", &defaults.cors_origin),
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}
