//! # poker-vision
//!
//! Describe a poker table screenshot with a locally hosted, vision-capable
//! chat-completion model (LM Studio, llama.cpp server, vLLM and friends).
//!
//! ## Overview
//!
//! One analysis is a strictly sequential pipeline:
//!
//! 1. [`image::load`] reads the screenshot from disk.
//! 2. [`request::build`] embeds it as a base64 data URI next to the poker
//!    instruction in an OpenAI-style chat payload.
//! 3. [`transport::HttpTransport::send`] POSTs the payload and waits for the reply.
//! 4. [`response::extract`] pulls `choices[0].message.content` out of the JSON.
//!
//! The first failing stage ends the call with an [`Error`]; nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use poker_vision::{AnalysisRequest, PokerAnalyzer};
//!
//! #[tokio::main]
//! async fn main() -> poker_vision::Result<()> {
//!     let analyzer = PokerAnalyzer::builder()
//!         .endpoint("http://localhost:1234/v1/chat/completions")
//!         .build()?;
//!
//!     let result = analyzer
//!         .analyze(&AnalysisRequest::new("table.jpg"))
//!         .await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint, model, token budget and prompt settings |
//! | [`client`] | The analyzer and its builder |
//! | [`image`] | Image loading and data-URI encoding |
//! | [`request`] | Chat payload construction |
//! | [`transport`] | HTTP call to the endpoint |
//! | [`response`] | Assistant text extraction |
//! | [`input`] | Sources of analysis requests |
//! | [`types`] | Request, payload and result types |

pub mod client;
pub mod config;
pub mod image;
pub mod input;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{PokerAnalyzer, PokerAnalyzerBuilder};
pub use config::AnalyzerConfig;
pub use input::{ConsoleInput, InputProvider, ScriptedInput};
pub use types::{AnalysisRequest, AnalysisResult, ChatPayload};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
