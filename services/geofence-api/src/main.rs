mod logging;
mod routes;
mod state;

use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use geofence_config::{LogFormat, ServiceConfig};
use geofence_engine::GeofenceEngine;
use geofence_observability::{init, log_startup, ObservabilityConfig};
use geofence_state::InMemoryVehicleStore;
use std::io;
use std::sync::Arc;

use crate::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = ServiceConfig::from_env("geofence-api");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        json_logs: config.log_format == LogFormat::Json,
        metrics_addr: config.metrics_addr.clone(),
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    let catalog = match config.zones.load() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(source = %config.zones, error = %err, "Failed to load zone catalog");
            return Err(io::Error::other(err));
        }
    };
    tracing::info!(source = %config.zones, zones = catalog.len(), "Zone catalog loaded");

    let engine = GeofenceEngine::new(Arc::new(catalog), Arc::new(InMemoryVehicleStore::new()));
    let bind_addr = config.bind_addr.clone();
    let shared_state = web::Data::new(AppState::new(config, engine));

    tracing::info!(bind_addr = %bind_addr, "Geofence tracking service listening");

    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .wrap(from_fn(logging::log_request))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
