use anyhow::{Context, Result};

/// Grammar service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GrammarConfig {
    pub languagetool_url: String,
    pub language: String,
    pub port: u16,
    pub rust_log: String,
}

impl GrammarConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(GrammarConfig {
            languagetool_url: env_or("LANGUAGETOOL_URL", "http://localhost:8081"),
            language: env_or("LANGUAGETOOL_LANGUAGE", "en-US"),
            port: parse_port("GRAMMAR_SERVICE_PORT", &env_or("GRAMMAR_SERVICE_PORT", "5001"))?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// Essay service configuration loaded from environment variables.
/// A missing `OPENAI_API_KEY` is not fatal: the completion client starts
/// unavailable and every analysis request answers 503.
#[derive(Debug, Clone)]
pub struct EssayConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl EssayConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(EssayConfig {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            openai_model: env_or("OPENAI_MODEL", "gpt-4"),
            port: parse_port("ESSAY_SERVICE_PORT", &env_or("ESSAY_SERVICE_PORT", "5000"))?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_port(key: &str, raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("{key} must be a valid port number, got '{raw}'"))
}
