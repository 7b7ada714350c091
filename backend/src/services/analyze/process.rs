use super::cors::with_cors;
use super::error::RelayError;
use super::prompt::crop_prompt;
use super::reply::parse_analysis;
use super::AnalyzeState;
use actix_web::{web, HttpResponse};
use common::requests::AnalyzeRequest;
use log::{debug, error, info};

/// Actix web handler for `POST /analyze-crop`.
///
/// Bodies that are not JSON, or exceed the scope's size limit, are turned into
/// `RelayError::InvalidBody` by the scope's `JsonConfig` and never reach here.
///
/// # Returns
/// - `200 OK` with the normalized `AnalysisResult`, or the fixed fallback when
///   the model reply is not usable.
/// - `400`, `402`, `429` or `500` with `{ "error": ... }` otherwise.
pub async fn process(
    state: web::Data<AnalyzeState>,
    payload: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, RelayError> {
    let image = payload
        .into_inner()
        .image
        .filter(|image| !image.trim().is_empty())
        .ok_or(RelayError::MissingImage)?;

    info!("Analyzing crop image ({} bytes encoded)", image.len());

    let reply = state
        .model
        .complete(&crop_prompt(&image))
        .await
        .map_err(|e| {
            error!("Analysis error: {}", e);
            RelayError::from(e)
        })?;
    debug!("Model reply: {}", reply);

    let analysis = parse_analysis(&reply);
    info!("Diagnosis: {} ({})", analysis.disease, analysis.severity);

    Ok(with_cors(&mut HttpResponse::Ok()).json(analysis))
}

/// Actix web handler for the CORS preflight.
pub async fn preflight() -> HttpResponse {
    with_cors(&mut HttpResponse::Ok()).finish()
}
