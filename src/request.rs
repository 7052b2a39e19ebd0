//! Chat payload construction

use crate::config::AnalyzerConfig;
use crate::image::DataUri;
use crate::types::{ChatPayload, ContentPart, Message};

/// Build the request body for one image.
///
/// Deterministic: the same bytes, model and config always give the same
/// payload. `model_id` is passed through untouched.
pub fn build(image_bytes: &[u8], model_id: &str, config: &AnalyzerConfig) -> ChatPayload {
    ChatPayload {
        model: model_id.to_string(),
        messages: vec![Message::user_parts(vec![
            ContentPart::text(config.prompt_text.clone()),
            ContentPart::image_url(DataUri::encode(image_bytes)),
        ])],
        max_tokens: config.max_tokens,
    }
}
