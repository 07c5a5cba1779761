//! Grammar analysis — reshapes engine matches into issues, a penalty score and
//! a human-readable summary.
//!
//! Score: `max(0, 100 - 5 * issue_count)`. Zero issues scores exactly 100.

use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::grammar::engine::{GrammarEngine, GrammarMatch};
use crate::models::Severity;

const PENALTY_PER_ISSUE: u32 = 5;
const NO_ISSUES_SUMMARY: &str = "No grammar issues found. Great job!";

/// A single issue in the uniform schema returned to the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub rule_id: String,
    pub category: String,
    pub message: String,
    pub suggestion: Option<String>,
    pub offset: usize,
    pub length: usize,
    pub context: String,
    pub severity: Severity,
}

impl From<GrammarMatch> for Issue {
    fn from(m: GrammarMatch) -> Self {
        let severity = severity_for(&m.category);
        Issue {
            rule_id: m.rule_id,
            suggestion: m.replacements.into_iter().next(),
            category: m.category,
            message: m.message,
            offset: m.offset,
            length: m.length,
            context: m.context,
            severity,
        }
    }
}

/// Full analysis returned by `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct GrammarReport {
    pub score: u32,
    pub total_errors: usize,
    pub issues: Vec<Issue>,
    pub summary: String,
}

/// A fix for one issue, with the offending substring cut out of the input.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub original: String,
    pub suggestion: String,
    pub explanation: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickCheck {
    pub has_errors: bool,
    pub error_count: usize,
    pub score: u32,
}

/// Severity is a pure function of the engine category.
pub fn severity_for(category: &str) -> Severity {
    match category {
        "GRAMMAR" => Severity::High,
        "SPELLING" | "PUNCTUATION" => Severity::Medium,
        "STYLE" | "TYPOS" => Severity::Low,
        _ => Severity::Medium,
    }
}

pub fn compute_score(issue_count: usize) -> u32 {
    let count = u32::try_from(issue_count).unwrap_or(u32::MAX);
    100u32.saturating_sub(count.saturating_mul(PENALTY_PER_ISSUE))
}

/// "Found 3 total issues: 1 grammar issue, 2 spelling issues."
/// Categories are listed in order of first appearance.
pub fn build_summary(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return NO_ISSUES_SUMMARY.to_string();
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for issue in issues {
        match counts.iter_mut().find(|(cat, _)| *cat == issue.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((issue.category.as_str(), 1)),
        }
    }

    let parts: Vec<String> = counts
        .iter()
        .map(|(cat, count)| {
            let plural = if *count == 1 { "" } else { "s" };
            format!("{count} {} issue{plural}", cat.to_lowercase())
        })
        .collect();

    format!("Found {} total issues: {}.", issues.len(), parts.join(", "))
}

/// Cuts `length` UTF-16 units starting at `offset` out of `text`.
/// Out-of-range spans are truncated rather than panicking.
fn slice_utf16(text: &str, offset: usize, length: usize) -> String {
    let end = offset.saturating_add(length);
    let mut position = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        if position >= end {
            break;
        }
        if position >= offset {
            out.push(ch);
        }
        position += ch.len_utf16();
    }
    out
}

fn ensure_available(engine: &dyn GrammarEngine) -> Result<(), AppError> {
    if engine.available() {
        Ok(())
    } else {
        Err(AppError::EngineUnavailable(
            "grammar engine failed to initialize".to_string(),
        ))
    }
}

/// Checks `text` and builds the full report.
pub async fn analyze_text(text: &str, engine: &dyn GrammarEngine) -> Result<GrammarReport, AppError> {
    ensure_available(engine)?;

    let matches = engine.check(text).await?;
    let issues: Vec<Issue> = matches.into_iter().map(Issue::from).collect();
    debug!("Grammar check found {} issues", issues.len());

    Ok(GrammarReport {
        score: compute_score(issues.len()),
        total_errors: issues.len(),
        summary: build_summary(&issues),
        issues,
    })
}

/// Returns fixes only for matches that carry at least one replacement.
pub async fn get_suggestions(
    text: &str,
    engine: &dyn GrammarEngine,
) -> Result<Vec<Suggestion>, AppError> {
    ensure_available(engine)?;

    let matches = engine.check(text).await?;
    Ok(matches
        .into_iter()
        .filter_map(|m| {
            let suggestion = m.replacements.into_iter().next()?;
            Some(Suggestion {
                original: slice_utf16(text, m.offset, m.length),
                suggestion,
                explanation: m.message,
                category: m.category,
            })
        })
        .collect())
}

pub async fn quick_check(text: &str, engine: &dyn GrammarEngine) -> Result<QuickCheck, AppError> {
    ensure_available(engine)?;

    let error_count = engine.check(text).await?.len();
    Ok(QuickCheck {
        has_errors: error_count > 0,
        error_count,
        score: compute_score(error_count),
    })
}
