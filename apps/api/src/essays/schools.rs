//! Static school reference data, keyed by lowercase slug.

#[derive(Debug, Clone)]
pub struct SchoolProfile {
    pub slug: &'static str,
    pub name: &'static str,
    pub values: &'static [&'static str],
    pub essay_preferences: &'static [&'static str],
    pub cultural_fit: &'static [&'static str],
}

pub static SCHOOL_PROFILES: &[SchoolProfile] = &[
    SchoolProfile {
        slug: "stanford",
        name: "Stanford University",
        values: &["innovation", "entrepreneurship", "intellectual vitality", "diversity"],
        essay_preferences: &[
            "personal stories",
            "intellectual curiosity",
            "leadership",
            "community impact",
        ],
        cultural_fit: &["global perspective", "collaboration", "risk-taking"],
    },
    SchoolProfile {
        slug: "harvard",
        name: "Harvard University",
        values: &["leadership", "academic excellence", "service", "character"],
        essay_preferences: &[
            "leadership examples",
            "intellectual growth",
            "service to others",
            "personal values",
        ],
        cultural_fit: &["global citizenship", "ethical leadership", "intellectual rigor"],
    },
    SchoolProfile {
        slug: "mit",
        name: "MIT",
        values: &["innovation", "problem-solving", "collaboration", "hands-on learning"],
        essay_preferences: &[
            "technical interests",
            "problem-solving examples",
            "collaboration",
            "practical applications",
        ],
        cultural_fit: &["technical curiosity", "teamwork", "practical innovation"],
    },
];

/// Case-insensitive lookup. Unknown slugs return `None`.
pub fn find_school(slug: &str) -> Option<&'static SchoolProfile> {
    let slug = slug.to_lowercase();
    SCHOOL_PROFILES.iter().find(|profile| profile.slug == slug)
}
