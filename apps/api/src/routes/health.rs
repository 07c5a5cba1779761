use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::{EssayState, GrammarState};

/// GET /health (grammar service)
/// Always 200; reports whether the grammar engine initialized.
pub async fn grammar_health_handler(State(state): State<GrammarState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "grammar-checker",
        "tool_available": state.engine.available()
    }))
}

/// GET /health (essay service)
pub async fn essay_health_handler(State(state): State<EssayState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "essay-analyzer",
        "llm_available": state.llm.available()
    }))
}
