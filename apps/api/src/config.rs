use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::chat::gateway::DEFAULT_GENERATION_TIMEOUT_SECS;
use crate::chat::session::DEFAULT_SESSION_TTL_SECS;
use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Fails at startup if `API_KEY` is missing or a numeric value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub resume_path: PathBuf,
    pub owner_name: String,
    pub model: String,
    pub api_base: String,
    /// Unsigned so a negative TTL is rejected at startup.
    pub session_ttl_secs: u32,
    pub generation_timeout_secs: u64,
    /// Unset means the whole history is sent with every question.
    pub history_window: Option<usize>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: require_env("API_KEY")?,
            resume_path: env_or("RESUME_PATH", "resume.pdf").into(),
            owner_name: env_or("OWNER_NAME", "the candidate"),
            model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            session_ttl_secs: parse_env("SESSION_TTL_SECS")?.unwrap_or(DEFAULT_SESSION_TTL_SECS),
            generation_timeout_secs: parse_env("GENERATION_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECS),
            history_window: parse_env("HISTORY_WINDOW")?,
            port: parse_env("PORT")?.unwrap_or(8080),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.session_ttl_secs))
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names; the process environment is shared.

    #[test]
    fn test_parse_env_unset_is_none() {
        std::env::remove_var("RESUMEBOT_TEST_UNSET");
        assert_eq!(parse_env::<u16>("RESUMEBOT_TEST_UNSET").unwrap(), None);
    }

    #[test]
    fn test_parse_env_valid_number() {
        std::env::set_var("RESUMEBOT_TEST_WINDOW", " 12 ");
        assert_eq!(parse_env::<usize>("RESUMEBOT_TEST_WINDOW").unwrap(), Some(12));
    }

    #[test]
    fn test_parse_env_invalid_number_names_variable() {
        std::env::set_var("RESUMEBOT_TEST_PORT", "eighty");
        let err = parse_env::<u16>("RESUMEBOT_TEST_PORT").unwrap_err();
        assert!(err.to_string().contains("RESUMEBOT_TEST_PORT"));
    }

    #[test]
    fn test_negative_ttl_is_rejected() {
        std::env::set_var("RESUMEBOT_TEST_TTL_NEGATIVE", "-5");
        let err = parse_env::<u32>("RESUMEBOT_TEST_TTL_NEGATIVE").unwrap_err();
        assert!(err.to_string().contains("RESUMEBOT_TEST_TTL_NEGATIVE"));
    }

    #[test]
    fn test_oversized_ttl_is_rejected() {
        std::env::set_var("RESUMEBOT_TEST_TTL_HUGE", "9223372036854775807");
        assert!(parse_env::<u32>("RESUMEBOT_TEST_TTL_HUGE").is_err());
    }

    #[test]
    fn test_session_ttl_converts_largest_value() {
        let config = Config {
            api_key: "k".to_string(),
            resume_path: PathBuf::from("resume.pdf"),
            owner_name: "Jane".to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            session_ttl_secs: u32::MAX,
            generation_timeout_secs: DEFAULT_GENERATION_TIMEOUT_SECS,
            history_window: None,
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.session_ttl().num_seconds(), i64::from(u32::MAX));
    }

    #[test]
    fn test_require_env_missing_names_variable() {
        std::env::remove_var("RESUMEBOT_TEST_KEY");
        let err = require_env("RESUMEBOT_TEST_KEY").unwrap_err();
        assert!(err.to_string().contains("RESUMEBOT_TEST_KEY"));
    }
}
