//! Mock chat-completion endpoint and throwaway image files

use mockito::{Matcher, Mock, Server, ServerGuard};
use poker_vision::PokerAnalyzer;
use std::path::{Path, PathBuf};

pub const CHAT_PATH: &str = "/v1/chat/completions";

/// Test fixture that owns a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub endpoint: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let endpoint = format!("{}{}", server.url(), CHAT_PATH);
        Self { server, endpoint }
    }

    /// Analyzer pointed at the mock server
    pub fn analyzer(&self) -> PokerAnalyzer {
        PokerAnalyzer::builder()
            .endpoint(&self.endpoint)
            .build()
            .expect("analyzer for mock endpoint")
    }

    /// Reply with `status` and `body` to any JSON POST on the chat path
    pub async fn mock_response(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", CHAT_PATH)
            .match_header("content-type", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Successful completion whose first choice carries `content`
    pub async fn mock_completion(&mut self, content: &str) -> Mock {
        let body = serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
        .to_string();
        self.mock_response(200, &body).await
    }

    /// Expect the request body to contain `partial`
    pub async fn mock_matching_body(&mut self, partial: serde_json::Value, reply: &str) -> Mock {
        self.server
            .mock("POST", CHAT_PATH)
            .match_header("content-type", "application/json")
            .match_header("x-request-id", Matcher::Any)
            .match_body(Matcher::PartialJson(partial))
            .with_status(200)
            .with_body(reply)
            .create_async()
            .await
    }

    /// A mock that must never be hit
    pub async fn mock_unreachable(&mut self) -> Mock {
        self.server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await
    }
}

/// Image file in the temp dir, removed on drop
pub struct TempImage {
    path: PathBuf,
}

impl TempImage {
    pub fn new(bytes: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("poker-vision-{}.jpg", uuid::Uuid::new_v4()));
        std::fs::write(&path, bytes).expect("write temp image");
        Self { path }
    }

    /// Minimal JPEG-looking bytes (SOI, JFIF header, EOI)
    pub fn jpeg() -> Self {
        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        bytes.extend_from_slice(b"JFIF\0");
        bytes.extend((0u8..64).map(|b| b.wrapping_mul(7)));
        bytes.extend_from_slice(&[0xFF, 0xD9]);
        Self::new(&bytes)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> Vec<u8> {
        std::fs::read(&self.path).expect("read temp image")
    }
}

impl Drop for TempImage {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
