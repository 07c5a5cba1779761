pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::essays::handlers as essays;
use crate::grammar::handlers as grammar;
use crate::state::{EssayState, GrammarState};

pub fn build_grammar_router(state: GrammarState) -> Router {
    Router::new()
        .route("/health", get(health::grammar_health_handler))
        .route("/analyze", post(grammar::handle_analyze))
        .route("/suggestions", post(grammar::handle_suggestions))
        .route("/check", post(grammar::handle_check))
        .with_state(state)
}

pub fn build_essay_router(state: EssayState) -> Router {
    Router::new()
        .route("/health", get(health::essay_health_handler))
        .route("/api/essays/analyze", post(essays::handle_analyze_essay))
        .route("/api/essays/insights", post(essays::handle_cultural_insights))
        .with_state(state)
}
