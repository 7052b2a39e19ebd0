use crate::client::core::PokerAnalyzer;
use crate::config::AnalyzerConfig;
use crate::Result;

/// Builder for creating analyzers with custom configuration.
///
/// Starts from [`AnalyzerConfig::default`]; every setter overrides one field.
pub struct PokerAnalyzerBuilder {
    config: AnalyzerConfig,
}

impl PokerAnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one from [`AnalyzerConfig::from_env`].
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the chat-completion URL (mock servers, remote hosts).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.config.default_model = model.into();
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    pub fn prompt_text(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt_text = prompt.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    /// Validate the configuration and build the analyzer.
    pub fn build(self) -> Result<PokerAnalyzer> {
        PokerAnalyzer::new(self.config)
    }
}

impl Default for PokerAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
