mod config;
mod inference;
mod services;

use crate::config::{RelayConfig, API_KEY_VAR};
use crate::inference::GatewayClient;
use crate::services::analyze::AnalyzeState;
use crate::services::history::HistoryStore;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::sync::Arc;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX_FILE: &str = "index.html";

/// Looks up an embedded asset. Unknown paths resolve to `index.html` so the
/// single-page client can handle them.
fn resolve_asset(path: &str) -> Option<(&'static str, &'static [u8])> {
    let requested = path.trim_start_matches('/');
    let requested = if requested.is_empty() { INDEX_FILE } else { requested };

    STATIC_DIR
        .get_file(requested)
        .or_else(|| STATIC_DIR.get_file(INDEX_FILE))
        .and_then(|file| Some((file.path().to_str()?, file.contents())))
}

/// Serves the compiled frontend embedded at build time.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve_asset(req.path()) {
        Some((path, contents)) => HttpResponse::Ok()
            .content_type(from_path(path).first_or_octet_stream().as_ref())
            .body(contents),
        None => HttpResponse::NotFound().body("Frontend bundle not embedded in this build"),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = RelayConfig::from_env();
    if config.api_key.is_none() {
        warn!("{} is not set; every analysis request will fail", API_KEY_VAR);
    }

    let history = HistoryStore::open(&config.database_path).map_err(std::io::Error::other)?;
    info!("Scan history stored in {}", history.path().display());

    let analyze_state = AnalyzeState::new(Arc::new(GatewayClient::new(&config)));
    let max_payload = config.max_payload_bytes;

    info!("Server running at {}", config.bind_url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(max_payload))
            .app_data(web::Data::new(analyze_state.clone()))
            .app_data(web::Data::new(history.clone()))
            .service(services::analyze::configure_routes(max_payload))
            .service(services::history::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.clone(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_fall_back_to_the_client_entry_page() {
        assert_eq!(resolve_asset("/history/unknown-route"), resolve_asset("/"));
        assert_eq!(resolve_asset(""), resolve_asset("/index.html"));
    }
}
