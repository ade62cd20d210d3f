use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single rule violation reported by the reviewer model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    /// The specific rule violated
    pub rule: String,
    /// Where in the document, or the number of the offending WHEREAS clause
    pub location: String,
    /// Explanation of the violation
    pub description: String,
    /// How to fix it
    pub suggestion: String,
}

/// Parsed review of one resolution
///
/// All three keys are required; a response missing any of them is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewResult {
    /// Deviations from required structure or semantic content
    pub template_violations: Vec<Violation>,
    /// Deviations from punctuation and wording conventions
    pub formatting_violations: Vec<Violation>,
    /// Brief summary of the resolution's compliance
    pub overall_assessment: String,
}

impl ReviewResult {
    pub fn is_clean(&self) -> bool {
        self.template_violations.is_empty() && self.formatting_violations.is_empty()
    }
}
