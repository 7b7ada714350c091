use actix_web::http::header;
use actix_web::HttpResponseBuilder;

/// Request headers browsers may send cross-origin.
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Adds the permissive CORS headers every relay response carries.
pub fn with_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
}
