//! # Crop Analysis Relay
//!
//! Forwards a photo of a wheat leaf to the hosted vision model and normalizes
//! the reply into an `AnalysisResult`.
//!
//! ## Sub-modules:
//! - `prompt`: the fixed system prompt and user instruction.
//! - `reply`: turns the model's free text into a result, with a fixed fallback.
//! - `process`: the HTTP handlers for the analysis and its CORS preflight.
//! - `error`: relay error taxonomy and its HTTP mapping.
//! - `cors`: permissive cross-origin headers attached to every response.

mod cors;
mod error;
mod process;
mod prompt;
mod reply;

use crate::inference::VisionModel;
use actix_web::http::Method;
use actix_web::web::{method, post, scope, JsonConfig};
use actix_web::Scope;
use error::RelayError;
use std::sync::Arc;

/// Path of the analysis endpoint.
const API_PATH: &str = "/analyze-crop";

/// Shared by every worker. Holds no mutable state.
#[derive(Clone)]
pub struct AnalyzeState {
    pub model: Arc<dyn VisionModel>,
}

impl AnalyzeState {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self { model }
    }
}

/// Body limit and extractor errors for the relay. Oversized or malformed
/// bodies leave as `RelayError::InvalidBody`, so they still carry the JSON
/// error body and the CORS headers.
fn json_config(max_body_bytes: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(max_body_bytes)
        .content_type_required(false)
        .error_handler(|err, _req| RelayError::InvalidBody(err.to_string()).into())
}

/// Configures and returns the Actix `Scope` for the relay. Request bodies are
/// capped at `max_body_bytes`.
///
/// # Registered Routes:
///
/// *   **`POST /analyze-crop`**:
///     - **Handler**: `process::process`
///     - **Description**: Expects `{ "image": "<data URI>" }` and answers with
///       `{ disease, severity, description, cure }`, or `{ error }` with status
///       400, 402, 429 or 500.
///
/// *   **`OPTIONS /analyze-crop`**:
///     - **Handler**: `process::preflight`
///     - **Description**: Empty `200` carrying the CORS headers.
pub fn configure_routes(max_body_bytes: usize) -> Scope {
    scope(API_PATH)
        .app_data(json_config(max_body_bytes))
        .route("", post().to(process::process))
        .route("", method(Method::OPTIONS).to(process::preflight))
}
