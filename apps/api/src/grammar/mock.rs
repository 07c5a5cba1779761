use async_trait::async_trait;

use super::engine::{EngineError, GrammarEngine, GrammarMatch};

/// A grammar engine for tests: returns a fixed match list, fails, or reports
/// itself unavailable.
pub struct StaticEngine {
    matches: Vec<GrammarMatch>,
    available: bool,
    fail: bool,
}

impl StaticEngine {
    pub fn with_matches(matches: Vec<GrammarMatch>) -> Self {
        Self {
            matches,
            available: true,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            matches: Vec::new(),
            available: true,
            fail: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            matches: Vec::new(),
            available: false,
            fail: false,
        }
    }
}

#[async_trait]
impl GrammarEngine for StaticEngine {
    fn available(&self) -> bool {
        self.available
    }

    async fn check(&self, _text: &str) -> Result<Vec<GrammarMatch>, EngineError> {
        if !self.available {
            return Err(EngineError::Unavailable);
        }
        if self.fail {
            return Err(EngineError::Api {
                status: 500,
                message: "scripted engine failure".to_string(),
            });
        }
        Ok(self.matches.clone())
    }
}

/// Builds a match with the given category and optional first replacement.
pub fn grammar_match(
    category: &str,
    offset: usize,
    length: usize,
    replacement: Option<&str>,
) -> GrammarMatch {
    GrammarMatch {
        rule_id: format!("{category}_RULE"),
        category: category.to_string(),
        message: format!("{} problem", category.to_lowercase()),
        replacements: replacement.map(|r| vec![r.to_string()]).unwrap_or_default(),
        offset,
        length,
        context: "context".to_string(),
    }
}
