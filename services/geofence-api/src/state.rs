use geofence_config::ServiceConfig;
use geofence_engine::GeofenceEngine;

pub struct AppState {
    pub config: ServiceConfig,
    pub engine: GeofenceEngine,
}

impl AppState {
    pub fn new(config: ServiceConfig, engine: GeofenceEngine) -> Self {
        Self { config, engine }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use geofence_geo::ZoneCatalog;
    use geofence_state::InMemoryVehicleStore;
    use std::sync::Arc;

    let config = ServiceConfig::from_lookup("geofence-api", |_| None);
    let engine = GeofenceEngine::new(
        Arc::new(ZoneCatalog::builtin()),
        Arc::new(InMemoryVehicleStore::new()),
    );
    AppState::new(config, engine)
}
