use super::run_blocking;
use super::store::HistoryStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::scan::NewScan;
use log::{error, info};

/// Actix web handler for `POST /api/history`.
///
/// # Returns
/// - `201 Created` with the stored `ScanRecord` (id and timestamp assigned).
/// - `503 Service Unavailable` if the record cannot be written.
pub async fn process(
    store: web::Data<HistoryStore>,
    payload: web::Json<NewScan>,
) -> impl Responder {
    let store = store.get_ref().clone();
    let scan = payload.into_inner();
    match run_blocking(move || store.insert(&scan)).await {
        Ok(record) => {
            info!("Saved scan {} ({})", record.id, record.disease);
            HttpResponse::Created().json(record)
        }
        Err(e) => {
            error!("Error saving to history: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving to history: {}", e))
        }
    }
}
