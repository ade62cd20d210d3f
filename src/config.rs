use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// OpenAI-compatible API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every review
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature, omitted from the request when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Request timeout in seconds, none when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Extra HTTP headers
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Extra top-level request body fields
    #[serde(default = "default_body")]
    pub body: serde_json::Value,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: None,
            timeout_secs: None,
            headers: HashMap::new(),
            body: default_body(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the web interface listens on
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Fixed path the uploaded document is stored at during one review
    #[serde(default = "default_upload_path")]
    pub upload_path: PathBuf,
    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            upload_path: default_upload_path(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    /// TOML file with an alternative worked example (original, modified, changes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4.1-mini-2025-04-14".to_string()
}

fn default_body() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_upload_path() -> PathBuf {
    PathBuf::from("temp_resolution.docx")
}

fn default_max_upload_bytes() -> usize {
    // 10 MiB
    10 * 1024 * 1024
}

impl Config {
    /// Load config from a TOML file, falling back to defaults when it is absent,
    /// then apply `key.path=value` overrides
    pub fn load(path: &str, overrides: &[String]) -> anyhow::Result<Self> {
        let mut value = if Path::new(path).exists() {
            let content =
                fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
            toml::from_str::<toml::Table>(&content)
                .with_context(|| format!("Failed to parse {}", path))?
        } else {
            debug!("Config file {} not found, using defaults", path);
            toml::Table::new()
        };

        for item in overrides {
            apply_override(&mut value, item)?;
        }

        let config: Config = toml::Value::Table(value)
            .try_into()
            .with_context(|| format!("Invalid configuration in {}", path))?;
        Ok(config)
    }

    /// Render the default config as TOML for `init`
    pub fn default_toml() -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(&Config::default())?)
    }
}

/// Set a dotted key such as `llm.model=gpt-4.1` on a TOML table
///
/// The value is parsed as a TOML value when possible, otherwise kept as a string.
fn apply_override(table: &mut toml::Table, item: &str) -> anyhow::Result<()> {
    let Some((key, raw)) = item.split_once('=') else {
        bail!("Invalid config override '{}', expected key=value", item);
    };
    let segments: Vec<&str> = key.trim().split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        bail!("Invalid config override key '{}'", key);
    }

    let raw = raw.trim();
    let value = toml::from_str::<toml::Table>(&format!("v = {}", raw))
        .ok()
        .and_then(|mut t| t.remove("v"))
        .unwrap_or_else(|| toml::Value::String(raw.to_string()));

    let (last, parents) = segments.split_last().context("Empty override key")?;
    let mut current = table;
    for segment in parents {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        current = match entry {
            toml::Value::Table(t) => t,
            _ => bail!("Config override '{}' traverses a non-table value", key),
        };
    }
    debug!("Config override: {} = {}", key, value);
    current.insert(last.to_string(), value);
    Ok(())
}
