use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on request bodies. Kept above the 5 MB file limit so
    /// oversized files reach the validator and get a proper message.
    pub body_limit_bytes: usize,
    /// Seeds every session's random source, for reproducible demos.
    pub shuffle_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            body_limit_bytes: 10 * 1024 * 1024,
            shuffle_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            body_limit_bytes: match std::env::var("BODY_LIMIT_MB") {
                Ok(mb) => {
                    mb.parse::<usize>()
                        .context("BODY_LIMIT_MB must be a whole number of megabytes")?
                        * 1024
                        * 1024
                }
                Err(_) => defaults.body_limit_bytes,
            },
            shuffle_seed: std::env::var("SHUFFLE_SEED")
                .ok()
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("SHUFFLE_SEED must be an unsigned integer")?,
        })
    }
}
