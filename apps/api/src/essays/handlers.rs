//! Axum route handlers for the essay service.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::essays::analyzer::{
    analyze_essay, generate_cultural_insights, EssayInput, DEFAULT_LANGUAGE,
};
use crate::essays::models::{EssayAnalysis, EssayType};
use crate::state::EssayState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeEssayRequest {
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub essay_type: Option<String>,
    pub target_school: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}

fn require_content(content: Option<String>) -> Result<String, AppError> {
    let content =
        content.ok_or_else(|| AppError::Validation("Missing required field: content".to_string()))?;
    if content.trim().is_empty() {
        return Err(AppError::Validation("Essay content cannot be empty".to_string()));
    }
    Ok(content)
}

impl TryFrom<AnalyzeEssayRequest> for EssayInput {
    type Error = AppError;

    fn try_from(request: AnalyzeEssayRequest) -> Result<Self, Self::Error> {
        let content = require_content(request.content)?;
        let essay_type = request
            .essay_type
            .ok_or_else(|| AppError::Validation("Missing required field: type".to_string()))?
            .parse::<EssayType>()
            .map_err(AppError::Validation)?;
        let target_school = request
            .target_school
            .filter(|school| !school.trim().is_empty());
        let language = request
            .language
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Ok(EssayInput {
            content,
            essay_type,
            target_school,
            language,
        })
    }
}

/// POST /api/essays/analyze
pub async fn handle_analyze_essay(
    State(state): State<EssayState>,
    payload: Result<Json<AnalyzeEssayRequest>, JsonRejection>,
) -> Result<Json<EssayAnalysis>, AppError> {
    let Json(request) = payload?;
    let input = EssayInput::try_from(request)?;

    let analysis = analyze_essay(&input, state.llm.as_ref()).await?;
    Ok(Json(analysis))
}

/// POST /api/essays/insights
///
/// Always 200 once the request is valid; upstream failures yield the fallback list.
pub async fn handle_cultural_insights(
    State(state): State<EssayState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<InsightsResponse>, AppError> {
    let Json(request) = payload?;
    let content = require_content(request.content)?;

    let insights = generate_cultural_insights(&content, state.llm.as_ref()).await;
    Ok(Json(InsightsResponse { insights }))
}
