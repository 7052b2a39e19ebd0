//! HTTP transport to the chat-completion endpoint.

mod http;

pub use http::{HttpTransport, RawResponse, TransportError, REQUEST_ID_HEADER};
