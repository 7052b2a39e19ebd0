//! # Types Module
//!
//! Data carried through one analysis.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AnalysisRequest`] | Image path plus optional model id supplied by the caller |
//! | [`ChatPayload`] | Chat-completion request body sent to the endpoint |
//! | [`AnalysisResult`] | Assistant text extracted from the reply |
//!
//! ## Example
//!
//! ```rust
//! use poker_vision::types::{ContentPart, Message, MessageRole};
//!
//! let message = Message::user_parts(vec![
//!     ContentPart::text("What is on this table?"),
//!     ContentPart::image_url("data:image/jpeg;base64,AA=="),
//! ]);
//! assert!(matches!(message.role, MessageRole::User));
//! assert!(message.contains_image());
//! ```

pub mod analysis;
pub mod message;

pub use analysis::{AnalysisRequest, AnalysisResult};
pub use message::{ChatPayload, ContentPart, ImageUrl, Message, MessageRole};
