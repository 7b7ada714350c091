//! Calls from the browser to the relay.

use common::model::analysis::AnalysisResult;
use common::model::scan::{NewScan, ScanRecord};
use common::requests::AnalyzeRequest;
use gloo_net::http::Request;

pub const ANALYZE_URL: &str = "/analyze-crop";
pub const HISTORY_URL: &str = "/api/history";

/// Why an analysis did not produce a result.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanFailure {
    /// The selected file could not be read.
    Read,
    /// The relay answered with a non-success status.
    Http(u16),
    /// The relay answered 200 with something that is not an analysis.
    InvalidResponse,
    /// The request never completed.
    Transport,
}

impl ScanFailure {
    /// Toast text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ScanFailure::Read => "Could not read the selected photo. Please try another one.",
            ScanFailure::Http(429) => "Too many requests. Please try again later.",
            ScanFailure::Http(402) => "Service usage limit reached. Please contact support.",
            ScanFailure::Http(_) | ScanFailure::InvalidResponse => {
                "Analysis failed. Please try again."
            }
            ScanFailure::Transport => "Failed to analyze image. Please check your connection.",
        }
    }
}

/// Decodes a relay success body. Anything outside the result shape, such as
/// an unknown severity, is refused here so it never reaches the renderer.
pub fn decode_analysis(body: &str) -> Result<AnalysisResult, ScanFailure> {
    serde_json::from_str(body).map_err(|_| ScanFailure::InvalidResponse)
}

/// Sends the encoded photo to the relay. One attempt, no retry.
pub async fn request_analysis(image: String) -> Result<AnalysisResult, ScanFailure> {
    let response = Request::post(ANALYZE_URL)
        .json(&AnalyzeRequest { image: Some(image) })
        .map_err(|_| ScanFailure::Transport)?
        .send()
        .await
        .map_err(|_| ScanFailure::Transport)?;

    if !response.ok() {
        return Err(ScanFailure::Http(response.status()));
    }

    let body = response.text().await.map_err(|_| ScanFailure::Transport)?;
    decode_analysis(&body)
}

/// Appends a scan to the history store.
pub async fn save_scan(scan: &NewScan) -> Result<ScanRecord, String> {
    let response = Request::post(HISTORY_URL)
        .json(scan)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("{} {}", response.status(), body));
    }
    response.json::<ScanRecord>().await.map_err(|e| e.to_string())
}

/// Loads the most recent scans, newest first.
pub async fn load_history() -> Result<Vec<ScanRecord>, String> {
    let response = Request::get(HISTORY_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("history request failed with {}", response.status()));
    }
    response.json::<Vec<ScanRecord>>().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::analysis::Severity;

    #[test]
    fn capacity_failures_have_their_own_messages() {
        let rate = ScanFailure::Http(429).message();
        let quota = ScanFailure::Http(402).message();
        assert_ne!(rate, quota);
        assert_eq!(ScanFailure::Http(500).message(), "Analysis failed. Please try again.");
        assert_eq!(
            ScanFailure::Transport.message(),
            "Failed to analyze image. Please check your connection."
        );
    }

    #[test]
    fn relay_body_decodes_into_a_result() {
        let body = r#"{"disease":"Leaf Rust","severity":"mild","description":"Early rust.","cure":["Spray","Scout","Rotate"]}"#;
        let result = decode_analysis(body).unwrap();
        assert_eq!(result.severity, Severity::Mild);
        assert_eq!(result.cure.len(), 3);
    }

    #[test]
    fn unknown_severity_never_reaches_the_renderer() {
        let body = r#"{"disease":"Leaf Rust","severity":"critical","description":"","cure":[]}"#;
        assert_eq!(decode_analysis(body), Err(ScanFailure::InvalidResponse));
        assert_eq!(decode_analysis("<html>"), Err(ScanFailure::InvalidResponse));
    }
}
