//! Analyzer configuration
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! `POKER_VISION_*` environment overrides.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:1234/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google_gemma-3-27b-it";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_PROMPT: &str = "Analyze this poker table screenshot. Tell me the current game state including: number of players, my cards, community cards, current pot size, and any other relevant information you can see.";

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_PATH_ENV: &str = "POKER_VISION_CONFIG";

const ENDPOINT_ENV: &str = "POKER_VISION_ENDPOINT";
const MODEL_ENV: &str = "POKER_VISION_MODEL";
const MAX_TOKENS_ENV: &str = "POKER_VISION_MAX_TOKENS";
const TIMEOUT_ENV: &str = "POKER_VISION_TIMEOUT_SECS";
const PROMPT_ENV: &str = "POKER_VISION_PROMPT";

/// Settings for one analyzer instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Chat-completion URL the payload is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model used when the caller does not name one.
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Instruction sent alongside the image.
    #[serde(default = "default_prompt")]
    pub prompt_text: String,
    /// Request timeout. `None` waits for the endpoint indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_model: default_model(),
            max_tokens: default_max_tokens(),
            prompt_text: default_prompt(),
            timeout_secs: None,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                "Invalid configuration YAML",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("config_file"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Cannot read configuration file {}", path.display()),
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("config_file"),
            )
        })?;
        Self::from_yaml_str(&content)
    }

    /// Defaults, then the file named by `POKER_VISION_CONFIG` (if set), then
    /// individual environment overrides.
    pub fn from_env() -> Result<Self> {
        let base = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|key| env::var(key).ok())
    }

    /// Apply `POKER_VISION_*` overrides from `lookup` and re-validate.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENDPOINT_ENV) {
            self.endpoint = v.trim().to_string();
        }
        if let Some(v) = lookup(MODEL_ENV) {
            self.default_model = v.trim().to_string();
        }
        if let Some(v) = lookup(MAX_TOKENS_ENV) {
            self.max_tokens = parse_env(MAX_TOKENS_ENV, "max_tokens", &v)?;
        }
        if let Some(v) = lookup(TIMEOUT_ENV) {
            self.timeout_secs = Some(parse_env(TIMEOUT_ENV, "timeout_secs", &v)?);
        }
        if let Some(v) = lookup(PROMPT_ENV) {
            self.prompt_text = v;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.endpoint).map_err(|e| {
            Error::configuration_with_context(
                "Endpoint is not a valid URL",
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_details(format!("{}: {}", self.endpoint, e)),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "Endpoint must use http or https",
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_details(self.endpoint.clone()),
            ));
        }
        if self.default_model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "Default model must not be empty",
                ErrorContext::new().with_field_path("default_model"),
            ));
        }
        if self.max_tokens == 0 {
            return Err(Error::configuration_with_context(
                "max_tokens must be greater than zero",
                ErrorContext::new().with_field_path("max_tokens"),
            ));
        }
        if self.prompt_text.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "Prompt text must not be empty",
                ErrorContext::new().with_field_path("prompt_text"),
            ));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var: &str, field: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid value for {}", var),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(format!("{:?}: {}", raw, e))
                .with_source(format!("env:{}", var)),
        )
    })
}
