// Inbound analysis API types
// Author: kelexine (https://github.com/kelexine)

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeRequest {
    /// Base64 JPEG payload without a `data:` prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AnalyzeRequest {
    /// Parse a raw request body.
    ///
    /// Malformed JSON is an error. A body that is valid JSON but not an object,
    /// or whose `image` is not a string, yields `image: None` so the caller
    /// reports it as missing input.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        let image = value
            .get("image")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Ok(Self { image })
    }
}

/// JSON error body returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
