use actix_web::{get, web, HttpResponse};
use geofence_geo::ZoneSummary;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ZoneListResponse {
    zones: Vec<ZoneSummary>,
}

#[get("/zones")]
pub async fn list_zones(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ZoneListResponse {
        zones: state.engine.catalog().summaries(),
    })
}
