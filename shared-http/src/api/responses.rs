use serde::{Deserialize, Serialize};

/// Error body returned by the members API or the gateway in front of it.
///
/// Only `message` is read; any other fields are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Parse a raw response body. Anything that is not a JSON object with a
    /// string `message` yields an empty response.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<ErrorResponse>(body).unwrap_or_default()
    }
}
