//! Axum route handlers for the grammar service.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::grammar::analyzer::{
    analyze_text, get_suggestions, quick_check, GrammarReport, QuickCheck, Suggestion,
};
use crate::state::GrammarState;

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Rejects missing and whitespace-only text with 400.
fn require_text(payload: Result<Json<TextRequest>, JsonRejection>) -> Result<String, AppError> {
    let Json(request) = payload?;
    let text = request
        .text
        .ok_or_else(|| AppError::Validation("Text is required".to_string()))?;
    if text.trim().is_empty() {
        return Err(AppError::Validation("Text cannot be empty".to_string()));
    }
    Ok(text)
}

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<GrammarState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<GrammarReport>, AppError> {
    let text = require_text(payload)?;
    let report = analyze_text(&text, state.engine.as_ref()).await?;
    Ok(Json(report))
}

/// POST /suggestions
///
/// Only issues that carry a replacement are returned.
pub async fn handle_suggestions(
    State(state): State<GrammarState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let text = require_text(payload)?;
    let suggestions = get_suggestions(&text, state.engine.as_ref()).await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}

/// POST /check
pub async fn handle_check(
    State(state): State<GrammarState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<QuickCheck>, AppError> {
    let text = require_text(payload)?;
    let check = quick_check(&text, state.engine.as_ref()).await?;
    Ok(Json(check))
}
