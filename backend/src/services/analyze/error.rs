use super::cors::with_cors;
use crate::inference::UpstreamError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ErrorResponse;
use thiserror::Error;

/// Everything the relay can answer with instead of an analysis.
///
/// Unparseable model output is not part of this: it becomes
/// `AnalysisResult::fallback()` with a 200.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Image data is required")]
    MissingImage,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingImage | RelayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(UpstreamError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            RelayError::Upstream(UpstreamError::QuotaExceeded) => StatusCode::PAYMENT_REQUIRED,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        with_cors(&mut HttpResponse::build(self.status_code())).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
