//! Essay analyzer — builds the culturally-aware prompt, calls the completion
//! API once and maps the JSON reply onto typed records.
//!
//! A malformed reply fails the request. Only the insights-only call has a
//! fallback value.

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::essays::models::{EssayAnalysis, EssayType, ModelAnalysis};
use crate::essays::prompts::{
    build_analysis_prompt, build_insights_prompt, ANALYSIS_SYSTEM, INSIGHTS_SYSTEM,
};
use crate::essays::schools::find_school;
use crate::llm_client::{complete_json, CompletionClient, CompletionRequest};

pub const TEMPERATURE: f32 = 0.3;
pub const ANALYSIS_MAX_TOKENS: u32 = 2000;
pub const INSIGHTS_MAX_TOKENS: u32 = 500;
pub const DEFAULT_LANGUAGE: &str = "ko";
pub const INSIGHTS_FALLBACK: &str = "Cultural analysis temporarily unavailable";

/// A validated analysis request.
#[derive(Debug, Clone)]
pub struct EssayInput {
    pub content: String,
    pub essay_type: EssayType,
    pub target_school: Option<String>,
    pub language: String,
}

/// Reproducible identifier derived from the essay text.
pub fn essay_id(content: &str) -> String {
    format!(
        "essay_{}",
        Uuid::new_v5(&Uuid::NAMESPACE_OID, content.as_bytes()).simple()
    )
}

/// Runs the full analysis.
pub async fn analyze_essay(
    input: &EssayInput,
    llm: &dyn CompletionClient,
) -> Result<EssayAnalysis, AppError> {
    if !llm.available() {
        return Err(AppError::EngineUnavailable(
            "completion client is not configured".to_string(),
        ));
    }

    let school = input.target_school.as_deref().and_then(find_school);
    if let (Some(requested), None) = (&input.target_school, school) {
        info!("Unknown target school '{requested}', analyzing without school context");
    }

    let prompt = build_analysis_prompt(&input.content, input.essay_type, school, &input.language);
    let request = CompletionRequest {
        system: ANALYSIS_SYSTEM,
        prompt: &prompt,
        temperature: TEMPERATURE,
        max_tokens: ANALYSIS_MAX_TOKENS,
    };

    let reply: ModelAnalysis = complete_json(llm, &request).await?;

    let mut analytics = reply.analytics;
    if school.is_none() {
        analytics.school_fit_score = None;
    }

    let feedback = reply
        .feedback
        .into_iter()
        .enumerate()
        .map(|(index, fb)| fb.into_feedback(index))
        .collect();

    Ok(EssayAnalysis {
        essay_id: essay_id(&input.content),
        analytics,
        feedback,
        summary: reply.summary,
        recommendations: reply.recommendations,
        cultural_context: reply.cultural_context,
    })
}

/// Asks for 3–5 cultural insights. Never fails: any error yields the
/// single-element fallback list.
pub async fn generate_cultural_insights(essay_text: &str, llm: &dyn CompletionClient) -> Vec<String> {
    let prompt = build_insights_prompt(essay_text);
    let request = CompletionRequest {
        system: INSIGHTS_SYSTEM,
        prompt: &prompt,
        temperature: TEMPERATURE,
        max_tokens: INSIGHTS_MAX_TOKENS,
    };

    match complete_json::<Vec<String>>(llm, &request).await {
        Ok(insights) => insights,
        Err(e) => {
            warn!("Cultural insights generation failed: {e}");
            vec![INSIGHTS_FALLBACK.to_string()]
        }
    }
}
