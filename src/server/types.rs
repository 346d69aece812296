use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRecipeRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// 2xx body carrying the model's "not food" verdict. Clients must inspect
/// the body even on success.
#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub error: String,
}

/// 4xx/5xx body. Raw model output and the parsed-but-misshapen object ride
/// along for debugging; end users only ever see `message`.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub message: String,
    #[serde(rename = "rawResponse", skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raw_response: None,
            data: None,
        }
    }

    pub fn with_raw_response(mut self, raw: impl Into<String>) -> Self {
        self.raw_response = Some(raw.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
