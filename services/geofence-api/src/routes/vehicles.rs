use actix_web::{get, web, HttpResponse};
use geofence_core::{ErrorCode, VehicleId};
use geofence_state::VehicleState;
use serde::Serialize;

use crate::routes::common::error_response;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VehicleNotFound {
    error: &'static str,
    vehicle_id: String,
}

#[derive(Debug, Serialize)]
struct VehicleListResponse {
    count: usize,
    vehicles: Vec<VehicleState>,
}

#[get("/vehicle/{vehicle_id}")]
pub async fn get_vehicle(state: web::Data<AppState>, vehicle_id: web::Path<String>) -> HttpResponse {
    let vehicle_id = VehicleId::from(vehicle_id.into_inner());

    match state.engine.vehicle_status(&vehicle_id) {
        Ok(vehicle) => HttpResponse::Ok().json(vehicle),
        Err(err) if err.code == ErrorCode::NotFound => {
            HttpResponse::NotFound().json(VehicleNotFound {
                error: "Vehicle not found",
                vehicle_id: vehicle_id.into_inner(),
            })
        }
        Err(err) => {
            tracing::error!(
                vehicle_id = %vehicle_id,
                error = %err,
                "Error querying vehicle status"
            );
            error_response(&err)
        }
    }
}

#[get("/vehicles")]
pub async fn list_vehicles(state: web::Data<AppState>) -> HttpResponse {
    match state.engine.vehicles() {
        Ok(mut vehicles) => {
            vehicles.sort_by(|left, right| left.vehicle_id.cmp(&right.vehicle_id));
            HttpResponse::Ok().json(VehicleListResponse {
                count: vehicles.len(),
                vehicles,
            })
        }
        Err(err) => {
            tracing::error!(error = %err, "Error listing vehicles");
            error_response(&err)
        }
    }
}
