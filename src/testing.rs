//! Shared fixtures for unit tests

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::error::ReviewError;
use crate::review::client::ChatClient;

/// Escape text for embedding in a `w:t` element
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Minimal `word/document.xml`; empty strings become empty paragraphs.
/// Text is inserted as-is, so callers may pass pre-escaped entities.
pub fn document_xml(paragraphs: &[&str]) -> String {
    let mut body = String::new();
    for text in paragraphs {
        if text.is_empty() {
            body.push_str("<w:p/>");
        } else {
            body.push_str(&format!(
                "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
                text
            ));
        }
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
        <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
        <w:body>{}<w:sectPr/></w:body></w:document>",
        body
    )
}

/// In-memory .docx archive with one paragraph per entry
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let escaped: Vec<String> = paragraphs.iter().map(|p| escape_xml(p)).collect();
    let refs: Vec<&str> = escaped.iter().map(String::as_str).collect();

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer
        .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .unwrap();
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(document_xml(&refs).as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Model response with no violations
pub const CLEAN_RESPONSE: &str = r#"{
    "template_violations": [],
    "formatting_violations": [],
    "overall_assessment": "The resolution complies with the template."
}"#;

/// Model response flagging a missing header
pub const MISSING_HEADER_RESPONSE: &str = r#"{
    "template_violations": [
        {
            "rule": "Template structure: first line",
            "location": "Line 1",
            "description": "The header line 'Board of Trustees of The City University of New York' is missing.",
            "suggestion": "Add the required header lines before the first WHEREAS clause."
        }
    ],
    "formatting_violations": [
        {
            "rule": "NOW, THEREFORE, BE IT",
            "location": "Before RESOLVED",
            "description": "The 'NOW, THEREFORE, BE IT' marker is missing.",
            "suggestion": "Insert 'NOW, THEREFORE, BE IT' after the last WHEREAS clause."
        }
    ],
    "overall_assessment": "The resolution is missing its header structure."
}"#;

/// Chat client returning a canned reply and recording the prompts it saw
#[derive(Clone)]
pub struct FixtureClient {
    reply: Result<String, String>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl FixtureClient {
    pub fn replying(content: &str) -> Self {
        Self {
            reply: Ok(content.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Client whose every call is rejected by the endpoint
    pub fn rejecting(body: &str) -> Self {
        Self {
            reply: Err(body.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl ChatClient for FixtureClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ReviewError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        match &self.reply {
            Ok(content) => Ok(content.clone()),
            Err(body) => Err(ReviewError::Rejected {
                status: reqwest::StatusCode::TOO_MANY_REQUESTS,
                body: body.clone(),
            }),
        }
    }
}
