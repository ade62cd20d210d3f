use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Display order for API key option (placed at top of help text)
const API_KEY_DISPLAY_ORDER: usize = 0;
// Display order for log level option (placed at end of help text)
const LOG_LEVEL_DISPLAY_ORDER: usize = 100;

/// CLI arguments
#[derive(Parser)]
#[command(
    name = "resolution-reviewer",
    version,
    about = "Reviews CUNY Board of Trustees resolutions for template and formatting compliance",
    long_about = None
)]
pub struct Cli {
    /// Log level (see https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
    /// [env: RESOLUTION_REVIEWER_LOG=] [default: info]
    #[arg(
        long,
        env = "RESOLUTION_REVIEWER_LOG",
        default_value = "info",
        global = true,
        hide_default_value = true,
        hide_env = true,
        display_order = LOG_LEVEL_DISPLAY_ORDER,
        verbatim_doc_comment
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a default reviewer.toml config file
    Init(InitArgs),
    /// Serve the upload-and-review web interface
    Serve(ServeArgs),
    /// Review a single .docx resolution from the terminal
    Review(ReviewArgs),
    /// Print the text extracted from a .docx resolution
    Preview(PreviewArgs),
    /// Print the JSON Schema of the review result
    Schema,
}

/// Arguments for the init command
#[derive(Parser)]
pub struct InitArgs {
    /// Path to config file
    #[arg(long, default_value = "reviewer.toml")]
    pub config: String,

    /// Override existing config file
    #[arg(long)]
    pub r#override: bool,
}

/// Options shared by commands that call the model
#[derive(Parser, Debug)]
pub struct ModelArgs {
    /// Path to config file (initialize with `resolution-reviewer init`)
    #[arg(long, default_value = "reviewer.toml")]
    pub config: String,

    /// Override config values using dot notation (e.g. llm.model=gpt-4.1)
    #[arg(long = "config-override")]
    pub config_overrides: Vec<String>,

    /// LLM API key
    #[arg(
        long,
        env = "OPENAI_API_KEY",
        hide_env_values = true,
        display_order = API_KEY_DISPLAY_ORDER
    )]
    pub api_key: Option<String>,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Listen address (overrides server.bind)
    #[arg(long)]
    pub bind: Option<String>,
}

/// Arguments for the review command
#[derive(Parser, Debug)]
pub struct ReviewArgs {
    /// Resolution document (.docx)
    #[arg(long)]
    pub file: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Output file path (.md or .json)
    #[arg(long)]
    pub output: Option<String>,
}

/// Arguments for the preview command
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Resolution document (.docx)
    #[arg(long)]
    pub file: PathBuf,
}
