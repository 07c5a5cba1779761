// All LLM prompt text for the essay service.
// Prompts are assembled in a fixed order; the essay text is inserted verbatim.

use crate::essays::models::EssayType;
use crate::essays::schools::SchoolProfile;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// System message for the full analysis call.
pub const ANALYSIS_SYSTEM: &str = "You are an expert college admissions essay analyst \
    with deep understanding of Korean culture and U.S. college admissions.";

/// System message for the insights-only call.
pub const INSIGHTS_SYSTEM: &str =
    "You are a cultural bridge expert specializing in Korean-American cultural exchange.";

const ANALYST_PREAMBLE: &str = "You are an expert college admissions essay analyst \
specializing in Korean students applying to U.S. universities.
Analyze the following essay with cultural sensitivity and provide detailed feedback.";

/// Five weighted dimensions; the weights sum to 100%.
pub const RUBRIC_WEIGHTS: [(&str, u32); 5] = [
    ("Grammar and mechanics", 25),
    ("Style and flow", 20),
    ("Content and substance", 30),
    ("Cultural adaptation", 15),
    ("Structure and organization", 10),
];

const RUBRIC_DETAILS: &str = r#"2. DETAILED FEEDBACK:
- Specific grammar corrections with line numbers
- Style improvements for better flow
- Content suggestions for stronger impact
- Cultural context enhancements
- Structure and organization tips

3. CULTURAL INSIGHTS:
- How well Korean cultural values are presented
- Suggestions for better cultural bridge-building
- ESL-specific improvements
- Cultural humility and authenticity assessment

4. SCHOOL FIT ANALYSIS (if target school provided):
- Alignment with school values
- Specific improvements for target school
- Cultural fit recommendations

5. ACTIONABLE RECOMMENDATIONS:
- 3-5 specific, actionable improvements
- Priority order for revisions
- Cultural context suggestions"#;

const OUTPUT_SCHEMA: &str = r#"Format your response as JSON with the following structure:
{
  "analytics": {
    "overall_score": float,
    "grammar_score": float,
    "style_score": float,
    "content_score": float,
    "cultural_score": float,
    "structure_score": float,
    "word_count": int,
    "reading_level": string,
    "cultural_insights": [string],
    "school_fit_score": float
  },
  "feedback": [
    {
      "type": "grammar|style|content|cultural|structure|school-fit",
      "severity": "low|medium|high",
      "title": string,
      "description": string,
      "suggestion": string,
      "line_number": int,
      "word_range": [int, int]
    }
  ],
  "summary": string,
  "recommendations": [string],
  "cultural_context": {
    "korean_values_present": [string],
    "cultural_bridge_opportunities": [string],
    "esl_improvements": [string]
  }
}"#;

fn school_block(school: &SchoolProfile) -> String {
    format!(
        "Target School: {}\nSchool Values: {}\nEssay Preferences: {}\nCultural Fit Factors: {}\n",
        school.name,
        school.values.join(", "),
        school.essay_preferences.join(", "),
        school.cultural_fit.join(", "),
    )
}

fn rubric() -> String {
    let mut out = String::from(
        "Please provide a comprehensive analysis including:\n\n1. OVERALL SCORE (1-10 scale):\n",
    );
    for (dimension, weight) in RUBRIC_WEIGHTS {
        out.push_str(&format!("- {dimension} ({weight}% weight)\n"));
    }
    out.push('\n');
    out.push_str(RUBRIC_DETAILS);
    out
}

/// Builds the full analysis prompt. The school block appears only when a
/// recognized profile is passed.
pub fn build_analysis_prompt(
    essay_text: &str,
    essay_type: EssayType,
    school: Option<&SchoolProfile>,
    language: &str,
) -> String {
    let school_context = school.map(school_block).unwrap_or_default();

    format!(
        "{ANALYST_PREAMBLE}\n\n\
         ESSAY TYPE: {essay_type}\n\
         TARGET LANGUAGE: {language}\n\
         {school_context}\n\
         ESSAY TEXT:\n\
         {essay_text}\n\n\
         {rubric}\n\n\
         {OUTPUT_SCHEMA}\n\n\
         {JSON_ONLY_INSTRUCTION}",
        rubric = rubric(),
    )
}

/// Builds the narrower insights-only prompt.
pub fn build_insights_prompt(essay_text: &str) -> String {
    format!(
        "Analyze this essay from a Korean cultural perspective and provide specific insights:\n\n\
         ESSAY: {essay_text}\n\n\
         Focus on:\n\
         1. How Korean cultural values are expressed\n\
         2. Opportunities to better bridge Korean and American cultures\n\
         3. ESL patterns that could be improved\n\
         4. Cultural authenticity and humility\n\n\
         Provide 3-5 specific insights as a JSON array of strings.\n\
         {JSON_ONLY_INSTRUCTION}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::essays::schools::find_school;

    const ESSAY: &str = "Growing up in Seoul, I was fascinated by how technology bridges cultures.";

    #[test]
    fn test_rubric_weights_sum_to_100() {
        let total: u32 = RUBRIC_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_prompt_embeds_school_block_for_known_school() {
        let prompt = build_analysis_prompt(
            ESSAY,
            EssayType::PersonalStatement,
            find_school("stanford"),
            "ko",
        );
        assert!(prompt.contains("Target School: Stanford University"));
        assert!(prompt.contains(
            "School Values: innovation, entrepreneurship, intellectual vitality, diversity"
        ));
        assert!(prompt.contains("Cultural Fit Factors: global perspective, collaboration, risk-taking"));
    }

    #[test]
    fn test_prompt_omits_school_block_without_school() {
        let prompt = build_analysis_prompt(ESSAY, EssayType::Supplemental, None, "en");
        assert!(!prompt.contains("Target School:"));
        assert!(!prompt.contains("School Values:"));
    }

    #[test]
    fn test_prompt_carries_type_language_essay_rubric_and_schema() {
        let prompt = build_analysis_prompt(ESSAY, EssayType::CommonApp, None, "ko");
        assert!(prompt.starts_with("You are an expert college admissions essay analyst"));
        assert!(prompt.contains("ESSAY TYPE: common-app"));
        assert!(prompt.contains("TARGET LANGUAGE: ko"));
        assert!(prompt.contains(ESSAY));
        assert!(prompt.contains("- Content and substance (30% weight)"));
        assert!(prompt.contains("- Structure and organization (10% weight)"));
        assert!(prompt.contains("\"cultural_context\""));

        let essay_at = prompt.find(ESSAY).unwrap();
        let rubric_at = prompt.find("OVERALL SCORE").unwrap();
        let schema_at = prompt.find("Format your response as JSON").unwrap();
        assert!(essay_at < rubric_at && rubric_at < schema_at);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_analysis_prompt(ESSAY, EssayType::Scholarship, find_school("mit"), "ko");
        let b = build_analysis_prompt(ESSAY, EssayType::Scholarship, find_school("MIT"), "ko");
        assert_eq!(a, b);
    }

    #[test]
    fn test_insights_prompt_asks_for_array() {
        let prompt = build_insights_prompt(ESSAY);
        assert!(prompt.contains(ESSAY));
        assert!(prompt.contains("JSON array of strings"));
    }
}
