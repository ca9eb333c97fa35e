//! Configuration module for the Vida Carioca backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Unparseable `VIDA_BIND_ADDR` value replaced by the default, logged at startup
    pub rejected_bind_addr: Option<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// API key for the hosted model. Translation and chat fail without it.
    pub gemini_api_key: Option<String>,
    /// Model used for translation and chat
    pub gemini_model: String,
    /// Base URL of the generative language API
    pub gemini_base_url: String,
    /// Upper bound on a single translator call
    pub translate_timeout: Duration,
    /// Largest request body accepted on admin routes (image uploads)
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let raw_bind_addr = env::var("VIDA_BIND_ADDR").ok();
        let parsed_bind_addr: Option<SocketAddr> =
            raw_bind_addr.as_deref().and_then(|raw| raw.parse().ok());
        let rejected_bind_addr = match parsed_bind_addr {
            Some(_) => None,
            None => raw_bind_addr,
        };
        let bind_addr = parsed_bind_addr.unwrap_or_else(default_bind_addr);

        let log_level = env::var("VIDA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let gemini_api_key = env::var("VIDA_GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let gemini_model =
            env::var("VIDA_GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let gemini_base_url = env::var("VIDA_GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());

        let translate_timeout = env::var("VIDA_TRANSLATE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TRANSLATE_TIMEOUT_SECS));

        let max_upload_bytes = env::var("VIDA_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            bind_addr,
            rejected_bind_addr,
            log_level,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            translate_timeout,
            max_upload_bytes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            rejected_bind_addr: None,
            log_level: "info".to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            translate_timeout: Duration::from_secs(DEFAULT_TRANSLATE_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}
