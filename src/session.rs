//! One upload-preview-review cycle and the temporary file it owns

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::ReviewError;
use crate::review::Reviewer;
use crate::types::ReviewResult;

/// Uploaded document stored at a fixed path, removed when dropped
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// Write `bytes` to `path`; a partially written file is removed on error
    pub fn store(path: &Path, bytes: &[u8]) -> Result<Self, ReviewError> {
        let upload = Self {
            path: path.to_path_buf(),
        };
        fs::write(&upload.path, bytes).map_err(|source| ReviewError::Upload {
            path: upload.path.clone(),
            source,
        })?;
        debug!("Stored {} bytes at {}", bytes.len(), path.display());
        Ok(upload)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Ready,
    Reviewing,
    Displayed,
    Failed,
}

/// What the user asked for after uploading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Preview,
    Analyze,
}

/// Result of one interaction, ready for rendering
#[derive(Debug)]
pub struct InteractionReport {
    /// Extracted text, or the error that prevented extraction
    pub preview: Option<Result<String, ReviewError>>,
    /// Review result when analysis was requested
    pub review: Option<Result<ReviewResult, ReviewError>>,
    /// Last stage reached before cleanup
    pub stage: Stage,
}

/// A single review interaction
///
/// Idle -> Ready on upload, Ready -> Reviewing -> Displayed or Failed on
/// review, and back to Idle once the temporary file is removed.
pub struct Interaction {
    stage: Stage,
    upload: Option<TempUpload>,
}

impl Interaction {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            upload: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, next: Stage) {
        debug!("Interaction {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }

    pub fn upload(&mut self, path: &Path, bytes: &[u8]) -> Result<(), ReviewError> {
        match TempUpload::store(path, bytes) {
            Ok(upload) => {
                self.upload = Some(upload);
                self.advance(Stage::Ready);
                Ok(())
            }
            Err(e) => {
                self.advance(Stage::Failed);
                Err(e)
            }
        }
    }

    /// Extract the uploaded document's text without changing stage
    pub fn preview(&self, reviewer: &Reviewer) -> Option<Result<String, ReviewError>> {
        let upload = self.upload.as_ref()?;
        Some(reviewer.read_document(upload.path()))
    }

    pub async fn review(&mut self, reviewer: &Reviewer) -> Option<Result<ReviewResult, ReviewError>> {
        let path = self.upload.as_ref()?.path().to_path_buf();
        self.advance(Stage::Reviewing);
        let result = reviewer.review_resolution(&path).await;
        match &result {
            Ok(_) => self.advance(Stage::Displayed),
            Err(e) => {
                warn!("Review failed ({}): {}", e.kind(), e);
                self.advance(Stage::Failed);
            }
        }
        Some(result)
    }

    /// Remove the temporary file and return to Idle, reporting the stage reached
    pub fn finish(&mut self) -> Stage {
        let reached = self.stage();
        self.upload = None;
        self.advance(Stage::Idle);
        reached
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a full interaction for uploaded bytes
///
/// The file at `upload_path` exists only for the duration of this call,
/// whatever the outcome.
pub async fn run_interaction(
    reviewer: &Reviewer,
    upload_path: &Path,
    bytes: &[u8],
    action: Action,
) -> InteractionReport {
    let mut interaction = Interaction::new();
    if let Err(e) = interaction.upload(upload_path, bytes) {
        return InteractionReport {
            preview: None,
            review: Some(Err(e)),
            stage: interaction.finish(),
        };
    }

    let preview = interaction.preview(reviewer);
    let review = match action {
        Action::Preview => None,
        Action::Analyze => {
            info!("Analyzing uploaded resolution");
            interaction.review(reviewer).await
        }
    };

    InteractionReport {
        preview,
        review,
        stage: interaction.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::WorkedExample;
    use crate::testing::{CLEAN_RESPONSE, FixtureClient, docx_bytes};

    fn reviewer(reply: &str) -> Reviewer {
        Reviewer::new(
            Box::new(FixtureClient::replying(reply)),
            WorkedExample::default(),
        )
    }

    #[test]
    fn test_temp_upload_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp_resolution.docx");
        {
            let upload = TempUpload::store(&path, b"bytes").unwrap();
            assert!(upload.path().exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_upload_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("temp_resolution.docx");
        let err = TempUpload::store(&path, b"bytes").unwrap_err();
        assert_eq!(err.kind(), "upload");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_temp_upload_failed_write_leaves_no_file() {
        // /dev/full accepts the open and fails every write with ENOSPC
        if !Path::new("/dev/full").exists() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp_resolution.docx");
        std::os::unix::fs::symlink("/dev/full", &path).unwrap();

        let err = TempUpload::store(&path, b"partial upload").unwrap_err();
        assert_eq!(err.kind(), "upload");
        assert!(std::fs::symlink_metadata(&path).is_err());
    }

    #[tokio::test]
    async fn test_interaction_stages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp_resolution.docx");
        let reviewer = reviewer(CLEAN_RESPONSE);

        let mut interaction = Interaction::new();
        assert_eq!(interaction.stage(), Stage::Idle);
        interaction.upload(&path, &docx_bytes(&["RESOLUTION TO"])).unwrap();
        assert_eq!(interaction.stage(), Stage::Ready);
        assert!(interaction.review(&reviewer).await.unwrap().is_ok());
        assert_eq!(interaction.stage(), Stage::Displayed);
        assert_eq!(interaction.finish(), Stage::Displayed);
        assert_eq!(interaction.stage(), Stage::Idle);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_run_interaction_success_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp_resolution.docx");
        let bytes = docx_bytes(&["WHEREAS, test; and", "", "RESOLVED, Done."]);

        let report = run_interaction(&reviewer(CLEAN_RESPONSE), &path, &bytes, Action::Analyze).await;
        assert_eq!(report.stage, Stage::Displayed);
        assert_eq!(
            report.preview.unwrap().unwrap(),
            "WHEREAS, test; and\n\nRESOLVED, Done."
        );
        assert!(report.review.unwrap().unwrap().is_clean());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_run_interaction_failure_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp_resolution.docx");
        let bytes = docx_bytes(&["RESOLUTION TO"]);

        let report = run_interaction(&reviewer("{\"oops\": true}"), &path, &bytes, Action::Analyze).await;
        assert_eq!(report.stage, Stage::Failed);
        assert_eq!(report.review.unwrap().unwrap_err().kind(), "review_parse");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_run_interaction_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp_resolution.docx");

        let report = run_interaction(&reviewer(CLEAN_RESPONSE), &path, b"garbage", Action::Analyze).await;
        assert_eq!(report.preview.unwrap().unwrap_err().kind(), "document_read");
        assert_eq!(report.review.unwrap().unwrap_err().kind(), "document_read");
        assert_eq!(report.stage, Stage::Failed);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_run_interaction_preview_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp_resolution.docx");
        let client = FixtureClient::replying(CLEAN_RESPONSE);
        let reviewer = Reviewer::new(Box::new(client.clone()), WorkedExample::default());

        let report =
            run_interaction(&reviewer, &path, &docx_bytes(&["RESOLUTION TO"]), Action::Preview).await;
        assert_eq!(report.stage, Stage::Ready);
        assert!(report.review.is_none());
        assert_eq!(report.preview.unwrap().unwrap(), "RESOLUTION TO");
        assert!(client.calls.lock().unwrap().is_empty());
        assert!(!path.exists());
    }
}
