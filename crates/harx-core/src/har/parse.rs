//! Minimal HAR 1.2 structures: just the fields extraction reads.

use base64::Engine;
use serde::Deserialize;

/// Root HAR log (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct HarResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub content: HarContent,
}

/// Response body as captured: text plus an optional encoding marker.
#[derive(Debug, Default, Deserialize)]
pub struct HarContent {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl HarContent {
    /// Decoded body bytes. `encoding = "base64"` decodes the text; any other
    /// or absent marker takes the text's UTF-8 bytes. Absent text is empty.
    pub fn body_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        let text = self.text.as_deref().unwrap_or("");
        match self.encoding.as_deref() {
            Some("base64") => base64::engine::general_purpose::STANDARD.decode(text),
            _ => Ok(text.as_bytes().to_vec()),
        }
    }
}
