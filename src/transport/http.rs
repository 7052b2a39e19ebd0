use crate::config::AnalyzerConfig;
use crate::types::ChatPayload;
use crate::{Error, Result};
use std::time::Duration;
use tracing::{debug, info, info_span, warn, Instrument};

/// Correlation header attached to every request.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Unparsed reply from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// POSTs chat payloads to a single chat-completion endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        // No timeout unless one is configured.
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::Network(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `payload` and wait for the complete reply.
    ///
    /// Non-2xx statuses become [`Error::Http`] with the body verbatim. Runs
    /// inside a `chat_completion` span carrying the request id.
    pub async fn send(&self, payload: &ChatPayload) -> Result<RawResponse> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = info_span!("chat_completion", request_id = %request_id);
        self.send_with_id(payload, &request_id).instrument(span).await
    }

    async fn send_with_id(&self, payload: &ChatPayload, request_id: &str) -> Result<RawResponse> {
        let body = serde_json::to_vec(payload)?;
        debug!(
            endpoint = %self.endpoint,
            bytes = body.len(),
            "Sending chat-completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, request_id)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Network(TransportError::Http(e)))?;

        let status = response.status();
        let text = response.text().await;

        if !status.is_success() {
            // The status alone decides the error kind; an unreadable body is reported empty.
            let body = text.unwrap_or_else(|e| {
                warn!(status = status.as_u16(), error = %e, "Failed to read error body");
                String::new()
            });
            info!(status = status.as_u16(), bytes = body.len(), "Response received");
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = text.map_err(|e| Error::Network(TransportError::Http(e)))?;
        info!(status = status.as_u16(), bytes = text.len(), "Response received");

        Ok(RawResponse {
            status: status.as_u16(),
            body: text,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
