use std::fmt;
use std::path::{Path, PathBuf};

/// Caller input for one analysis. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    image_path: PathBuf,
    model_id: Option<String>,
}

impl AnalysisRequest {
    /// Request that uses the analyzer's default model.
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            model_id: None,
        }
    }

    /// Blank model ids are treated as "use the default".
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        let trimmed = model_id.trim();
        self.model_id = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    pub fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }
}

/// The assistant's text for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub text: String,
    pub model: String,
}

impl AnalysisResult {
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
