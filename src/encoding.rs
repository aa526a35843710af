//! File body transcoding between raw text and the base64 form the GitHub
//! contents API speaks.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::GithubToolsError;

pub fn encode_content(content: &str) -> String {
    STANDARD.encode(content.as_bytes())
}

/// Decode base64 as returned by GitHub, which wraps lines at 60 columns.
pub fn decode_content(encoded: &str) -> Result<Vec<u8>, GithubToolsError> {
    let cleaned: String = encoded.chars().filter(|ch| !ch.is_whitespace()).collect();
    STANDARD
        .decode(cleaned)
        .map_err(|e| GithubToolsError::Decode(e.to_string()))
}

/// Decode to text. Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_text(encoded: &str) -> Result<String, GithubToolsError> {
    let bytes = decode_content(encoded)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
