use crate::types::{ReviewResult, Violation};

/// Format a review as Markdown, one section per violation group
pub fn format_review(result: &ReviewResult) -> String {
    let mut output = String::from("# Review Results\n\n");
    format_group(
        &mut output,
        "Template Violations",
        "No template violations found.",
        &result.template_violations,
    );
    format_group(
        &mut output,
        "Formatting Violations",
        "No formatting violations found.",
        &result.formatting_violations,
    );
    output.push_str("## Overall Assessment\n\n");
    output.push_str(result.overall_assessment.trim());
    output.push('\n');
    output
}

fn format_group(output: &mut String, title: &str, empty: &str, violations: &[Violation]) {
    output.push_str(&format!("## {}\n\n", title));
    if violations.is_empty() {
        output.push_str(&format!("{}\n\n", empty));
        return;
    }
    for violation in violations {
        output.push_str(&format!("### Violation at {}\n\n", violation.location));
        output.push_str(&format!("- **Rule:** {}\n", violation.rule));
        output.push_str(&format!("- **Issue:** {}\n", violation.description));
        output.push_str(&format!("- **Suggestion:** {}\n\n", violation.suggestion));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CLEAN_RESPONSE, MISSING_HEADER_RESPONSE};

    #[test]
    fn test_format_review_clean() {
        let result: ReviewResult = serde_json::from_str(CLEAN_RESPONSE).unwrap();
        let output = format_review(&result);
        assert!(output.contains("No template violations found."));
        assert!(output.contains("No formatting violations found."));
        assert!(output.ends_with("## Overall Assessment\n\nThe resolution complies with the template.\n"));
    }

    #[test]
    fn test_format_review_with_violations() {
        let result: ReviewResult = serde_json::from_str(MISSING_HEADER_RESPONSE).unwrap();
        let output = format_review(&result);
        assert!(output.contains("### Violation at Line 1\n\n- **Rule:** Template structure: first line\n"));
        assert!(output.contains("### Violation at Before RESOLVED"));
        assert!(!output.contains("No template violations found."));

        let template_at = output.find("## Template Violations").unwrap();
        let formatting_at = output.find("## Formatting Violations").unwrap();
        let line_one_at = output.find("Violation at Line 1").unwrap();
        assert!(template_at < line_one_at && line_one_at < formatting_at);
    }
}
