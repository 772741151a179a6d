use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use geofence_core::{ErrorCode, GeofenceError};
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: message.into(),
    })
}

pub fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: message.into(),
    })
}

pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: INTERNAL_ERROR_MESSAGE.to_string(),
    })
}

/// Maps an engine error onto a status code. Internal details stay in the
/// logs, not the response body.
pub fn error_response(err: &GeofenceError) -> HttpResponse {
    match err.code {
        ErrorCode::InvalidInput => bad_request(err.message.clone()),
        ErrorCode::NotFound => not_found(err.message.clone()),
        ErrorCode::Internal => internal_error(),
    }
}

/// JSON extractor config that answers malformed bodies with the same
/// `{"error": ...}` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(error = %err, "Rejected malformed JSON body");
        geofence_observability::record_rejected("malformed_body");
        let response = bad_request(format!("Invalid JSON body: {err}"));
        InternalError::from_response(err, response).into()
    })
}
