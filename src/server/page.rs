//! HTML rendering for the upload and results pages

use crate::error::ReviewError;
use crate::session::InteractionReport;
use crate::types::{ReviewResult, Violation};

const TITLE: &str = "CUNY Resolution Reviewer";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem auto; max-width: 72rem; padding: 0 1rem; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.info { background: #e8f0fe; padding: 0.75rem 1rem; border-radius: 4px; }
.success { background: #e6f4ea; padding: 0.75rem 1rem; border-radius: 4px; }
.error { background: #fce8e6; padding: 0.75rem 1rem; border-radius: 4px; }
details { border: 1px solid #ddd; border-radius: 4px; margin: 0.5rem 0; padding: 0.5rem 1rem; }
textarea { width: 100%; font-family: monospace; }
"#;

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
        <title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
        <h1>{title}</h1>\n\
        <p>This tool analyzes CUNY Board of Trustees resolutions for compliance with templates and rules.</p>\n\
        <h2>Upload a Resolution Document</h2>\n\
        <form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n\
        <label>Upload a .docx file: <input type=\"file\" name=\"document\" accept=\".docx\"></label>\n\
        <button type=\"submit\" name=\"action\" value=\"preview\">Preview</button>\n\
        <button type=\"submit\" name=\"action\" value=\"analyze\">Analyze Resolution</button>\n\
        </form>\n{content}</body>\n</html>\n",
        title = TITLE,
        style = STYLE,
        content = content
    )
}

/// Landing page with nothing uploaded
pub fn index() -> String {
    layout("<p class=\"info\">Please upload a .docx file to begin.</p>\n")
}

/// Page shown when the submission itself could not be accepted
pub fn rejected(message: &str) -> String {
    layout(&format!(
        "<p class=\"error\">{}</p>\n<p class=\"info\">Please upload a .docx file to begin.</p>\n",
        escape_html(message)
    ))
}

/// Page for a completed interaction: preview panel, then results or error
pub fn interaction(filename: &str, report: &InteractionReport) -> String {
    let mut content = format!("<p>Document: <strong>{}</strong></p>\n", escape_html(filename));

    if let Some(preview) = &report.preview {
        content.push_str("<details>\n<summary>Preview Extracted Text from Document</summary>\n");
        match preview {
            Ok(text) => content.push_str(&format!(
                "<label>Extracted Text<textarea readonly rows=\"15\">{}</textarea></label>\n",
                escape_html(text)
            )),
            Err(e) => content.push_str(&format!(
                "<p class=\"error\">Could not extract text: {}</p>\n",
                escape_html(&e.to_string())
            )),
        }
        content.push_str("</details>\n");
    }

    match &report.review {
        Some(Ok(result)) => content.push_str(&results(result)),
        Some(Err(e)) => content.push_str(&review_error(e)),
        None => {}
    }

    layout(&content)
}

fn review_error(error: &ReviewError) -> String {
    format!(
        "<p class=\"error\" data-kind=\"{}\">An error occurred: {}</p>\n",
        error.kind(),
        escape_html(&error.to_string())
    )
}

fn results(result: &ReviewResult) -> String {
    format!(
        "<h2>Review Results</h2>\n<div class=\"columns\">\n{}{}</div>\n\
        <h3>Overall Assessment</h3>\n<p class=\"info\">{}</p>\n",
        column(
            "Template Violations",
            "No template violations found.",
            &result.template_violations
        ),
        column(
            "Formatting Violations",
            "No formatting violations found.",
            &result.formatting_violations
        ),
        escape_html(&result.overall_assessment)
    )
}

fn column(title: &str, empty: &str, violations: &[Violation]) -> String {
    let mut html = format!("<section>\n<h3>{}</h3>\n", title);
    if violations.is_empty() {
        html.push_str(&format!("<p class=\"success\">{}</p>\n", empty));
    }
    for violation in violations {
        html.push_str(&format!(
            "<details open>\n<summary>Violation at {}</summary>\n\
            <p><strong>Rule:</strong> {}</p>\n\
            <p><strong>Issue:</strong> {}</p>\n\
            <p><strong>Suggestion:</strong> {}</p>\n</details>\n",
            escape_html(&violation.location),
            escape_html(&violation.rule),
            escape_html(&violation.description),
            escape_html(&violation.suggestion)
        ));
    }
    html.push_str("</section>\n");
    html
}
