use std::net::IpAddr;
use std::time::Duration;

use crate::i18n::Language;

/// Apps Script web app the original form posted to.
pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbxlFYgzbrPgEMsZJ90nKf-t96gq-govSvqRHRGyLQ5V9C84njlQJ-ORPTpbnLCTq-Frjw/exec";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub endpoint_url: String,
    pub forward_timeout: Duration,
    pub default_language: Language,
    pub session_ttl: Duration,
    pub secure_cookie: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = env_or("FEEDBACK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FEEDBACK_HOST: {e}"))?;

        let port: u16 = env_or("FEEDBACK_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FEEDBACK_PORT: {e}"))?;

        let endpoint_url = env_or("FEEDBACK_ENDPOINT_URL", DEFAULT_ENDPOINT_URL);
        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(format!("Invalid FEEDBACK_ENDPOINT_URL: {endpoint_url}"));
        }

        let forward_timeout_secs: u64 = env_or("FEEDBACK_FORWARD_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid FEEDBACK_FORWARD_TIMEOUT_SECS: {e}"))?;

        let default_language = Language::from_code(&env_or("FEEDBACK_DEFAULT_LANGUAGE", "ar"))
            .ok_or_else(|| "Invalid FEEDBACK_DEFAULT_LANGUAGE: expected 'ar' or 'en'".to_string())?;

        let session_ttl_secs: u64 = env_or("FEEDBACK_SESSION_TTL_SECS", "3600")
            .parse()
            .map_err(|e| format!("Invalid FEEDBACK_SESSION_TTL_SECS: {e}"))?;

        let secure_cookie = matches!(
            env_or("FEEDBACK_SECURE_COOKIE", "false").as_str(),
            "true" | "1" | "yes"
        );

        let log_level = env_or("FEEDBACK_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            endpoint_url,
            forward_timeout: Duration::from_secs(forward_timeout_secs),
            default_language,
            session_ttl: Duration::from_secs(session_ttl_secs),
            secure_cookie,
            log_level,
        })
    }
}
