use super::run_blocking;
use super::store::{HistoryStore, HISTORY_PAGE_SIZE};
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Actix web handler for `GET /api/history`.
///
/// # Returns
/// - `200 OK` with up to five `ScanRecord`s, most recent first.
/// - `503 Service Unavailable` if the store cannot be read.
pub async fn process(store: web::Data<HistoryStore>) -> impl Responder {
    let store = store.get_ref().clone();
    match run_blocking(move || store.recent(HISTORY_PAGE_SIZE)).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            error!("Error loading history: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error loading history: {}", e))
        }
    }
}
