use crate::config::AnalyzerConfig;
use crate::input::InputProvider;
use crate::transport::HttpTransport;
use crate::types::{AnalysisRequest, AnalysisResult};
use crate::{image, response, Result};
use tracing::{debug, info};

/// Runs the load → build → send → extract pipeline for one image at a time.
///
/// Holds only immutable configuration and a client handle, so one analyzer
/// can serve independent concurrent calls.
pub struct PokerAnalyzer {
    config: AnalyzerConfig,
    transport: HttpTransport,
}

impl PokerAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    pub fn builder() -> crate::client::PokerAnalyzerBuilder {
        crate::client::PokerAnalyzerBuilder::new()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Model used for `request`: its own id, or the configured default.
    pub fn resolve_model<'a>(&'a self, request: &'a AnalysisRequest) -> &'a str {
        request
            .model_id()
            .unwrap_or(self.config.default_model.as_str())
    }

    /// Analyze one screenshot.
    ///
    /// The image is read before any network I/O; the first failing stage
    /// ends the call.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let path = request.image_path();
        let model = self.resolve_model(request);

        let bytes = image::load(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "Image loaded");

        let payload = crate::request::build(&bytes, model, &self.config);
        info!(
            model = %model,
            endpoint = %self.transport.endpoint(),
            "Sending request to model"
        );

        let raw = self.transport.send(&payload).await?;
        let text = response::extract(&raw.body)?;
        debug!(chars = text.len(), "Analysis extracted");

        Ok(AnalysisResult {
            text,
            model: model.to_string(),
        })
    }

    /// Pull one request from `input` and analyze it.
    ///
    /// Returns `Ok(None)` when the provider has nothing left to offer.
    pub async fn analyze_next<P>(&self, input: &mut P) -> Result<Option<AnalysisResult>>
    where
        P: InputProvider + ?Sized,
    {
        match input.next_request().await? {
            Some(request) => self.analyze(&request).await.map(Some),
            None => Ok(None),
        }
    }
}
