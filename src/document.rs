use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Archive entry holding the main document body
const DOCUMENT_PART: &str = "word/document.xml";

const WORDML_NS: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

#[derive(Debug, thiserror::Error)]
pub enum DocumentReadError {
    #[error("could not open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid .docx archive: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{} has no word/document.xml part", path.display())]
    MissingBody { path: PathBuf },

    #[error("{} contains malformed document XML: {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },
}

/// Read a .docx file and join its body paragraphs with newlines
///
/// Only paragraphs directly under `w:body` are returned, in document order.
/// Empty paragraphs are kept as empty lines. No other structure survives.
pub fn read_document(path: &Path) -> Result<String, DocumentReadError> {
    debug!("Reading document {}", path.display());
    let file = File::open(path).map_err(|source| DocumentReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|source| DocumentReadError::Archive {
        path: path.to_path_buf(),
        source,
    })?;

    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)
                .map_err(|source| DocumentReadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(DocumentReadError::MissingBody {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(DocumentReadError::Archive {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let paragraphs = body_paragraphs(&xml).map_err(|source| DocumentReadError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Extracted {} paragraphs", paragraphs.len());
    Ok(paragraphs.join("\n"))
}

/// Walk `word/document.xml` and collect the text of each body-level paragraph
///
/// Elements are matched by the WordprocessingML namespace, whatever prefix
/// binds it. Table cells, text boxes and other nested paragraphs are skipped.
/// Within a paragraph, `w:t` runs are concatenated, `w:tab`/`w:ptab` become
/// tabs, `w:br`/`w:cr` become newlines and `w:noBreakHyphen` becomes `-`.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = NsReader::from_str(xml);
    let mut paragraphs = Vec::new();

    // Number of currently open ancestor elements
    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut current: Option<String> = None;
    let mut nested_paragraphs = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        let word = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == WORDML_NS);
        match event {
            Event::Start(e) => {
                match (word, e.local_name().as_ref()) {
                    (true, b"body") => body_depth = Some(depth),
                    (true, b"p") => {
                        if current.is_some() {
                            nested_paragraphs += 1;
                        } else if body_depth.is_some_and(|b| depth == b + 1) {
                            current = Some(String::new());
                        }
                    }
                    (true, b"r") => run_depth += 1,
                    (true, b"t") => in_text = true,
                    _ => {}
                }
                depth += 1;
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                match (word, e.local_name().as_ref()) {
                    (true, b"body") => body_depth = None,
                    (true, b"p") => {
                        if nested_paragraphs > 0 {
                            nested_paragraphs -= 1;
                        } else if let Some(text) = current.take() {
                            trace!("Paragraph {}: {:?}", paragraphs.len(), text);
                            paragraphs.push(text);
                        }
                    }
                    (true, b"r") => run_depth = run_depth.saturating_sub(1),
                    (true, b"t") => in_text = false,
                    _ => {}
                }
            }
            Event::Empty(e) => {
                let in_run = run_depth > 0 && nested_paragraphs == 0;
                let inline = match (word, e.local_name().as_ref()) {
                    (true, b"p") => {
                        if current.is_none() && body_depth.is_some_and(|b| depth == b + 1) {
                            paragraphs.push(String::new());
                        }
                        None
                    }
                    (true, b"tab" | b"ptab") if in_run => Some('\t'),
                    (true, b"br" | b"cr") if in_run => Some('\n'),
                    (true, b"noBreakHyphen") if in_run => Some('-'),
                    _ => None,
                };
                if let (Some(c), Some(text)) = (inline, current.as_mut()) {
                    text.push(c);
                }
            }
            Event::Text(t) if in_text && nested_paragraphs == 0 => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
