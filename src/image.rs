//! Image loading and data-URI encoding.

use crate::{Error, Result};
use base64::Engine as _;
use std::path::Path;

/// Media type written into every data URI.
///
/// The image is not sniffed: PNG or WebP input is still labelled JPEG.
pub const DATA_URI_MEDIA_TYPE: &str = "image/jpeg";

/// Read the whole file at `path`.
///
/// Missing, unreadable and non-regular paths all fail with
/// [`Error::NotFound`]; no bytes are returned on failure.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let meta = std::fs::metadata(path).map_err(|e| Error::not_found(path, e))?;
    if !meta.is_file() {
        return Err(Error::not_found(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    std::fs::read(path).map_err(|e| Error::not_found(path, e))
}

/// A parsed `data:<media type>;base64,<payload>` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub media_type: &'a str,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    pub fn encode(bytes: &[u8]) -> String {
        let data = base64::engine::general_purpose::STANDARD.encode(bytes);
        format!("data:{};base64,{}", DATA_URI_MEDIA_TYPE, data)
    }

    /// Only base64 data URIs are recognised.
    pub fn parse(uri: &'a str) -> Option<Self> {
        let rest = uri.strip_prefix("data:")?;
        let (header, payload) = rest.split_once(',')?;
        let media_type = header.strip_suffix(";base64")?;
        Some(Self {
            media_type,
            payload,
        })
    }

    pub fn decode(&self) -> std::result::Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(self.payload)
    }
}
