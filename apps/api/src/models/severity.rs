use serde::{Deserialize, Serialize};

/// How urgently an issue or feedback item should be addressed.
/// Closed set: anything other than `low`, `medium`, `high` fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}
