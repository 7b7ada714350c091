use serde::{Deserialize, Serialize};

/// Request body of `POST /analyze-crop`.
///
/// `image` is optional on the wire so a missing field reaches the relay and
/// gets the relay's own error body instead of a framework rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image: Option<String>,
}

/// Error body returned by the relay for every non-200 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
