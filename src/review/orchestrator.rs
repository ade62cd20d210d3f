use super::{Reviewer, render};
use crate::types::ReviewResult;
use std::path::Path;
use tracing::{error, info};

pub const EXIT_FAILURE: i32 = 1;

/// Review one document from the command line and report the result
///
/// Results are logged line by line, or written to `output` as `.md` or `.json`.
/// Returns the process exit code: 0 when the review completed, 1 on any error.
pub async fn review_and_report(reviewer: &Reviewer, file: &Path, output: Option<&str>) -> i32 {
    info!("Analyzing resolution {}", file.display());
    let result = match reviewer.review_resolution(file).await {
        Ok(result) => result,
        Err(e) => {
            error!("An error occurred ({}): {}", e.kind(), e);
            return EXIT_FAILURE;
        }
    };

    info!(
        "Review complete: {} template violations, {} formatting violations",
        result.template_violations.len(),
        result.formatting_violations.len()
    );
    if result.is_clean() {
        info!("No violations found");
    }

    match output {
        Some(path) => match write_output(path, &result) {
            Ok(()) => {
                info!("Results written to {}", path);
                0
            }
            Err(e) => {
                error!("{}", e);
                EXIT_FAILURE
            }
        },
        None => {
            for line in render::format_review(&result).lines() {
                info!("{}", line);
            }
            0
        }
    }
}

/// Write a review to file in JSON or Markdown format
fn write_output(path: &str, result: &ReviewResult) -> anyhow::Result<()> {
    let content = if path.ends_with(".json") {
        serde_json::to_string_pretty(result)?
    } else if path.ends_with(".md") {
        render::format_review(result)
    } else {
        anyhow::bail!("Output file must end with .md or .json");
    };

    std::fs::write(path, content)
        .map_err(|e| anyhow::anyhow!("Failed to write output file {}: {}", path, e))?;
    Ok(())
}
