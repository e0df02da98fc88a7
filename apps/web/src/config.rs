use anyhow::{bail, Context, Result};

/// Which job backend the store talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendKind {
    /// The external job API over HTTP. Production default.
    Http { base_url: String },
    /// In-process demo data. Local development only.
    Memory,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendKind,
    pub backend_timeout_secs: u64,
    pub signin_path: String,
    pub assets_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let backend = match std::env::var("JOB_BACKEND")
            .unwrap_or_else(|_| "http".to_string())
            .as_str()
        {
            "http" => BackendKind::Http {
                base_url: require_env("JOB_API_URL")?,
            },
            "memory" => BackendKind::Memory,
            other => bail!("JOB_BACKEND must be 'http' or 'memory', got '{other}'"),
        };

        Ok(Config {
            backend,
            backend_timeout_secs: std::env::var("BACKEND_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("BACKEND_TIMEOUT_SECS must be a whole number of seconds")?,
            signin_path: std::env::var("SIGNIN_PATH").unwrap_or_else(|_| "/signin".to_string()),
            assets_dir: std::env::var("ASSETS_DIR")
                .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/assets").to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
