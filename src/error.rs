use std::path::PathBuf;
use thiserror::Error;

/// Upper bound on how much of an unexpected response body is echoed back in
/// a `MalformedResponse` message.
const BODY_PREVIEW_LIMIT: usize = 512;

/// Structured error context for configuration problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Configuration key that caused the error (e.g., "endpoint", "max_tokens")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the value (e.g., "config_file", "env:POKER_VISION_ENDPOINT")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Every way a single analysis can fail.
///
/// Each variant is terminal for the invocation that produced it; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Image file {} not found or inaccessible: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API error: HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network transport error: {0}")]
    Network(#[from] crate::transport::TransportError),

    #[error("Malformed response: {reason} (received: {})", preview(.body))]
    MalformedResponse { reason: String, body: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn preview(body: &str) -> String {
    if body.is_empty() {
        return "<empty body>".to_string();
    }
    if body.chars().count() <= BODY_PREVIEW_LIMIT {
        return body.to_string();
    }
    let cut: String = body.chars().take(BODY_PREVIEW_LIMIT).collect();
    format!("{}...", cut)
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::NotFound {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(reason: impl Into<String>, body: impl Into<String>) -> Self {
        Error::MalformedResponse {
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status of a non-success reply, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
