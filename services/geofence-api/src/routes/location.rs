use actix_web::{post, web, HttpResponse};
use geofence_core::{VehicleId, ZoneId};
use geofence_engine::LocationOutcome;
use geofence_geo::{is_valid_latitude, is_valid_longitude, Coordinate};
use geofence_observability::{record_location_event, record_rejected, record_transitions};
use serde::{Deserialize, Serialize};

use crate::routes::common::{bad_request, error_response};
use crate::state::AppState;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: vehicleId, latitude, longitude";
pub const INVALID_COORDINATES_MESSAGE: &str =
    "Invalid coordinates. Latitude must be -90 to 90, longitude -180 to 180";

/// Inbound location report. Every field is optional on the wire so a missing
/// one can be answered with a specific message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEvent {
    pub vehicle_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    MissingFields,
    InvalidCoordinates,
}

impl LocationEvent {
    fn validate(self) -> Result<(VehicleId, Coordinate), Rejection> {
        let (Some(vehicle_id), Some(latitude), Some(longitude)) =
            (self.vehicle_id, self.latitude, self.longitude)
        else {
            return Err(Rejection::MissingFields);
        };
        let vehicle_id = VehicleId::from(vehicle_id);
        if vehicle_id.is_blank() {
            return Err(Rejection::MissingFields);
        }
        if !is_valid_latitude(latitude) || !is_valid_longitude(longitude) {
            return Err(Rejection::InvalidCoordinates);
        }
        Ok((vehicle_id, Coordinate::new(latitude, longitude)))
    }
}

#[derive(Debug, Serialize)]
struct LocationResponse {
    success: bool,
    #[serde(flatten)]
    outcome: LocationOutcome,
}

#[post("/location")]
pub async fn submit_location(
    state: web::Data<AppState>,
    payload: web::Json<LocationEvent>,
) -> HttpResponse {
    let event = payload.into_inner();
    let (raw_vehicle_id, raw_latitude, raw_longitude) =
        (event.vehicle_id.clone(), event.latitude, event.longitude);

    let (vehicle_id, coordinate) = match event.validate() {
        Ok(valid) => valid,
        Err(Rejection::MissingFields) => {
            tracing::warn!(
                vehicle_id = ?raw_vehicle_id,
                latitude = ?raw_latitude,
                longitude = ?raw_longitude,
                "Invalid location event - missing fields"
            );
            record_rejected("missing_fields");
            return bad_request(MISSING_FIELDS_MESSAGE);
        }
        Err(Rejection::InvalidCoordinates) => {
            tracing::warn!(
                vehicle_id = ?raw_vehicle_id,
                latitude = ?raw_latitude,
                longitude = ?raw_longitude,
                "Invalid coordinates"
            );
            record_rejected("invalid_coordinates");
            return bad_request(INVALID_COORDINATES_MESSAGE);
        }
    };

    let outcome = match state.engine.process_location(&vehicle_id, coordinate) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(
                vehicle_id = %vehicle_id,
                error = %err,
                "Error processing location event"
            );
            return error_response(&err);
        }
    };

    record_location_event();
    record_transitions(
        outcome.transitions.entered.len(),
        outcome.transitions.exited.len(),
    );
    if !outcome.transitions.entered.is_empty() {
        tracing::info!(
            vehicle_id = %vehicle_id,
            zones = ?zone_names(&outcome.transitions.entered),
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "Vehicle entered zone(s)"
        );
    }
    if !outcome.transitions.exited.is_empty() {
        tracing::info!(
            vehicle_id = %vehicle_id,
            zones = ?zone_names(&outcome.transitions.exited),
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "Vehicle exited zone(s)"
        );
    }

    HttpResponse::Ok().json(LocationResponse {
        success: true,
        outcome,
    })
}

fn zone_names(zones: &[ZoneId]) -> Vec<&str> {
    zones.iter().map(ZoneId::as_str).collect()
}
