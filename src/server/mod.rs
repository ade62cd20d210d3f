//! Web interface: upload a resolution, preview its text, review it

pub mod page;

use anyhow::Context;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::ReviewError;
use crate::review::Reviewer;
use crate::session::{Action, run_interaction};

#[derive(Clone)]
pub struct AppState {
    reviewer: Arc<Reviewer>,
    upload_path: PathBuf,
    // Held for a whole interaction so at most one upload exists at a time
    upload_slot: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(reviewer: Reviewer, upload_path: PathBuf) -> Self {
        Self {
            reviewer: Arc::new(reviewer),
            upload_path,
            upload_slot: Arc::new(Mutex::new(())),
        }
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/api/review", post(api_review_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Serve the web interface until the process is stopped
pub async fn serve(config: &ServerConfig, reviewer: Reviewer) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    let state = AppState::new(reviewer, config.upload_path.clone());
    axum::serve(listener, router(state, config.max_upload_bytes)).await?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum SubmissionError {
    #[error("Please upload a .docx file.")]
    NoFile,
    #[error("Please upload a single .docx file.")]
    MultipleFiles,
    #[error("Unsupported file type '{0}'. Please upload a .docx file.")]
    UnsupportedType(String),
    #[error("Failed to read upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl SubmissionError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NoFile => "no_file",
            Self::MultipleFiles => "multiple_files",
            Self::UnsupportedType(_) => "unsupported_type",
            Self::Multipart(_) => "upload",
        }
    }
}

struct Submission {
    filename: String,
    bytes: Vec<u8>,
    action: Action,
}

/// Collect the `document` file and `action` fields from a multipart form
async fn read_submission(mut multipart: Multipart) -> Result<Submission, SubmissionError> {
    let mut document: Option<(String, Vec<u8>)> = None;
    let mut action = Action::Preview;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "document" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was chosen
                if !filename.is_empty() || !bytes.is_empty() {
                    if document.is_some() {
                        return Err(SubmissionError::MultipleFiles);
                    }
                    document = Some((filename, bytes.to_vec()));
                }
            }
            "action" => {
                if field.text().await?.trim() == "analyze" {
                    action = Action::Analyze;
                }
            }
            other => debug!("Ignoring form field '{}'", other),
        }
    }

    let (filename, bytes) = document.ok_or(SubmissionError::NoFile)?;
    if !filename.to_lowercase().ends_with(".docx") {
        return Err(SubmissionError::UnsupportedType(filename));
    }
    debug!(filename = %filename, bytes = bytes.len(), ?action, "Received upload");
    Ok(Submission {
        filename,
        bytes,
        action,
    })
}

async fn index_handler() -> Html<String> {
    Html(page::index())
}

#[tracing::instrument(skip_all)]
async fn submit_handler(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let submission = match read_submission(multipart).await {
        Ok(s) => s,
        Err(SubmissionError::NoFile) => return Html(page::index()),
        Err(e) => {
            warn!("Rejected upload: {}", e);
            return Html(page::rejected(&e.to_string()));
        }
    };

    let _slot = state.upload_slot.lock().await;
    let report = run_interaction(
        &state.reviewer,
        &state.upload_path,
        &submission.bytes,
        submission.action,
    )
    .await;
    info!(filename = %submission.filename, stage = ?report.stage, "Interaction complete");
    Html(page::interaction(&submission.filename, &report))
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    kind: &'static str,
}

fn error_response(status: StatusCode, error: String, kind: &'static str) -> Response {
    (status, Json(ErrorResponse { error, kind })).into_response()
}

fn review_error_status(error: &ReviewError) -> StatusCode {
    match error {
        ReviewError::DocumentRead(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ReviewError::Upload { .. } | ReviewError::MissingCredential => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ReviewError::Request(_)
        | ReviewError::Rejected { .. }
        | ReviewError::EmptyResponse
        | ReviewError::Parse(_) => StatusCode::BAD_GATEWAY,
    }
}

/// JSON variant of the review action: always analyzes, returns the ReviewResult
#[tracing::instrument(skip_all)]
async fn api_review_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let submission = match read_submission(multipart).await {
        Ok(s) => s,
        Err(e) => {
            warn!("Rejected upload: {}", e);
            return error_response(StatusCode::BAD_REQUEST, e.to_string(), e.kind());
        }
    };

    let _slot = state.upload_slot.lock().await;
    let report = run_interaction(
        &state.reviewer,
        &state.upload_path,
        &submission.bytes,
        Action::Analyze,
    )
    .await;
    info!(filename = %submission.filename, stage = ?report.stage, "Interaction complete");

    match report.review {
        Some(Ok(result)) => Json(result).into_response(),
        Some(Err(e)) => error_response(review_error_status(&e), e.to_string(), e.kind()),
        None => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Review did not run".to_string(),
            "internal",
        ),
    }
}
