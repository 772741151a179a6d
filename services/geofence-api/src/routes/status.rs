use actix_web::{get, web, HttpResponse};
use geofence_core::now_epoch_millis;
use geofence_state::VehicleStateRepository;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    service: String,
    environment: String,
    region: Option<String>,
    timestamp_ms: u64,
    zone_count: usize,
    vehicle_count: usize,
}

#[get("/v1/status")]
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    let response = StatusResponse {
        service: state.config.service_name.clone(),
        environment: state.config.environment.to_string(),
        region: state.config.region.clone(),
        timestamp_ms: now_epoch_millis(),
        zone_count: state.engine.catalog().len(),
        vehicle_count: state.engine.store().len(),
    };

    HttpResponse::Ok().json(response)
}
