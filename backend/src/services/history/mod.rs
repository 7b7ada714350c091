//! # Scan History Service
//!
//! Append-only record of past scans, kept in a local SQLite file.
//!
//! ## Sub-modules:
//! - `store`: the `HistoryStore` (schema, insert, newest-first select).
//! - `save`: `POST /api/history`, appends one record.
//! - `get`: `GET /api/history`, returns the five most recent records.

mod get;
mod save;
mod store;

pub use store::HistoryStore;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all history endpoints.
const API_PATH: &str = "/api/history";

/// Configures and returns the Actix `Scope` for history routes.
///
/// The `HistoryStore` must be registered as `web::Data` on the app.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(save::process))
        .route("", get().to(get::process))
}

/// Runs a blocking store call on Actix's blocking pool and flattens the two
/// error layers into a message.
async fn run_blocking<T, F>(job: F) -> Result<T, String>
where
    F: FnOnce() -> Result<T, store::StoreError> + Send + 'static,
    T: Send + 'static,
{
    actix_web::web::block(job)
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::analysis::{AnalysisResult, Severity};
    use common::model::scan::ScanRecord;
    use serde_json::json;

    #[actix_web::test]
    async fn saved_scans_are_listed_with_their_steps() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("history.sqlite")).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let save = test::TestRequest::post()
            .uri("/api/history")
            .set_json(json!({
                "disease": "Powdery Mildew",
                "severity": "severe",
                "description": "White powder covers most leaves.",
                "cure": ["Apply sulphur fungicide", "Improve air circulation", "Remove crop debris"],
                "image_data": "data:image/jpeg;base64,/9j/4AAQ"
            }))
            .to_request();
        let resp = test::call_service(&app, save).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: ScanRecord = test::read_body_json(resp).await;
        assert_eq!(created.severity, Severity::Severe);

        let list = test::TestRequest::get().uri("/api/history").to_request();
        let resp = test::call_service(&app, list).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let records: Vec<ScanRecord> = test::read_body_json(resp).await;
        assert_eq!(records, vec![created]);
        assert_eq!(records[0].cure.len(), 3);
    }

    #[actix_web::test]
    async fn list_is_capped_at_five() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("history.sqlite")).unwrap();
        for _ in 0..7 {
            store
                .insert(&common::model::scan::NewScan {
                    analysis: AnalysisResult::fallback(),
                    image_data: "data:image/png;base64,AAAA".to_string(),
                })
                .unwrap();
        }
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/history").to_request())
                .await;
        let records: Vec<ScanRecord> = test::read_body_json(resp).await;
        assert_eq!(records.len(), 5);
    }
}
