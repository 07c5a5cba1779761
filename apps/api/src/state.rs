use std::sync::Arc;

use crate::grammar::engine::GrammarEngine;
use crate::llm_client::CompletionClient;

/// State injected into grammar service handlers via Axum extractors.
/// The engine is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct GrammarState {
    pub engine: Arc<dyn GrammarEngine>,
}

/// State injected into essay service handlers.
#[derive(Clone)]
pub struct EssayState {
    pub llm: Arc<dyn CompletionClient>,
}
