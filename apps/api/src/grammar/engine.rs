//! Grammar engine — the external checker behind the grammar service.
//!
//! Production talks to a LanguageTool HTTP server. The engine is probed once at
//! startup; if the probe fails it stays unavailable for the life of the process.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::config::GrammarConfig;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grammar engine is not available")]
    Unavailable,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("engine error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One match reported by the engine, already flattened out of the wire shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarMatch {
    pub rule_id: String,
    pub category: String,
    pub message: String,
    pub replacements: Vec<String>,
    /// Offset into the checked text in UTF-16 code units, as LanguageTool reports it.
    pub offset: usize,
    pub length: usize,
    pub context: String,
}

#[async_trait]
pub trait GrammarEngine: Send + Sync {
    fn available(&self) -> bool;

    async fn check(&self, text: &str) -> Result<Vec<GrammarMatch>, EngineError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LanguageTool wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<LtMatch>,
}

#[derive(Debug, Deserialize)]
struct LtMatch {
    message: String,
    #[serde(default)]
    replacements: Vec<LtReplacement>,
    offset: usize,
    length: usize,
    context: LtContext,
    rule: LtRule,
}

#[derive(Debug, Deserialize)]
struct LtReplacement {
    value: String,
}

#[derive(Debug, Deserialize)]
struct LtContext {
    text: String,
}

#[derive(Debug, Deserialize)]
struct LtRule {
    id: String,
    category: LtCategory,
}

#[derive(Debug, Deserialize)]
struct LtCategory {
    id: String,
}

impl From<LtMatch> for GrammarMatch {
    fn from(m: LtMatch) -> Self {
        GrammarMatch {
            rule_id: m.rule.id,
            category: m.rule.category.id,
            message: m.message,
            replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            offset: m.offset,
            length: m.length,
            context: m.context.text,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LanguageToolEngine
// ────────────────────────────────────────────────────────────────────────────

/// Holds the HTTP client only when the startup probe succeeded; `None` is the
/// uninitialized engine.
pub struct LanguageToolEngine {
    client: Option<Client>,
    base_url: String,
    language: String,
}

impl LanguageToolEngine {
    /// Builds the engine and probes the server once.
    /// Never fails: an unreachable server yields an unavailable engine.
    pub async fn connect(config: &GrammarConfig) -> Self {
        let base_url = config.languagetool_url.trim_end_matches('/').to_string();

        let client = match Client::builder().build() {
            Ok(client) => match probe(&client, &base_url).await {
                Ok(()) => {
                    info!("LanguageTool initialized successfully ({base_url}, {})", config.language);
                    Some(client)
                }
                Err(e) => {
                    error!("Failed to initialize LanguageTool at {base_url}: {e}");
                    None
                }
            },
            Err(e) => {
                error!("Failed to build LanguageTool HTTP client: {e}");
                None
            }
        };

        Self {
            client,
            base_url,
            language: config.language.clone(),
        }
    }
}

async fn probe(client: &Client, base_url: &str) -> Result<(), EngineError> {
    let response = client.get(format!("{base_url}/v2/languages")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(EngineError::Api {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        });
    }
    Ok(())
}

#[async_trait]
impl GrammarEngine for LanguageToolEngine {
    fn available(&self) -> bool {
        self.client.is_some()
    }

    async fn check(&self, text: &str) -> Result<Vec<GrammarMatch>, EngineError> {
        let client = self.client.as_ref().ok_or(EngineError::Unavailable)?;

        let response = client
            .post(format!("{}/v2/check", self.base_url))
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: CheckResponse = response.json().await?;
        Ok(body.matches.into_iter().map(GrammarMatch::from).collect())
    }
}
