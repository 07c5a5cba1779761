use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::models::Severity;

/// The kind of essay being analyzed. Parsed from the request tag exactly:
/// no trimming, no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EssayType {
    PersonalStatement,
    Supplemental,
    CommonApp,
    Scholarship,
}

impl EssayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EssayType::PersonalStatement => "personal-statement",
            EssayType::Supplemental => "supplemental",
            EssayType::CommonApp => "common-app",
            EssayType::Scholarship => "scholarship",
        }
    }
}

impl fmt::Display for EssayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EssayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal-statement" => Ok(EssayType::PersonalStatement),
            "supplemental" => Ok(EssayType::Supplemental),
            "common-app" => Ok(EssayType::CommonApp),
            "scholarship" => Ok(EssayType::Scholarship),
            other => Err(format!("Invalid essay type: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackKind {
    Grammar,
    Style,
    Content,
    Cultural,
    Structure,
    SchoolFit,
}

#[derive(Debug, Clone, Serialize)]
pub struct EssayFeedback {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub suggestion: String,
    pub line_number: Option<u32>,
    pub word_range: Option<(u32, u32)>,
}

/// Sub-scores are on the 1–10 scale the prompt asks for and pass through as sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssayAnalytics {
    pub overall_score: f64,
    pub grammar_score: f64,
    pub style_score: f64,
    pub content_score: f64,
    pub cultural_score: f64,
    pub structure_score: f64,
    pub word_count: u32,
    pub reading_level: String,
    pub cultural_insights: Vec<String>,
    #[serde(default)]
    pub school_fit_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EssayAnalysis {
    pub essay_id: String,
    pub analytics: EssayAnalytics,
    pub feedback: Vec<EssayFeedback>,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub cultural_context: Map<String, Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Model reply shape
// ────────────────────────────────────────────────────────────────────────────

/// The JSON object the model is instructed to return. Every key except the
/// optional feedback fields and `school_fit_score` is required.
#[derive(Debug, Deserialize)]
pub struct ModelAnalysis {
    pub analytics: EssayAnalytics,
    pub feedback: Vec<ModelFeedback>,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub cultural_context: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct ModelFeedback {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub suggestion: String,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default, deserialize_with = "optional_word_range")]
    pub word_range: Option<(u32, u32)>,
}

/// `null` and `[]` both mean "no range". Any length other than 0 or 2 is rejected.
fn optional_word_range<'de, D>(deserializer: D) -> Result<Option<(u32, u32)>, D::Error>
where
    D: Deserializer<'de>,
{
    let range: Option<Vec<u32>> = Option::deserialize(deserializer)?;
    match range.as_deref() {
        None | Some([]) => Ok(None),
        Some(&[start, end]) => Ok(Some((start, end))),
        Some(other) => Err(de::Error::invalid_length(
            other.len(),
            &"an empty array or a [start, end] pair",
        )),
    }
}

impl ModelFeedback {
    pub fn into_feedback(self, index: usize) -> EssayFeedback {
        EssayFeedback {
            id: format!("fb_{index}"),
            kind: self.kind,
            severity: self.severity,
            title: self.title,
            description: self.description,
            suggestion: self.suggestion,
            line_number: self.line_number,
            word_range: self.word_range,
        }
    }
}
