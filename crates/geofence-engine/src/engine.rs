use geofence_core::{GeofenceError, GeofenceResult, VehicleId, ZoneId};
use geofence_geo::{Coordinate, ZoneCatalog};
use geofence_state::{InMemoryVehicleStore, VehicleState, VehicleStateRepository};
use serde::Serialize;
use std::sync::Arc;

use crate::transitions::{diff, ZoneTransitions};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOutcome {
    pub vehicle_id: VehicleId,
    pub current_zones: Vec<ZoneId>,
    pub transitions: ZoneTransitions,
}

/// Ties the zone catalog to the vehicle store.
///
/// The engine does not log or retry; every failure is returned to the caller.
pub struct GeofenceEngine<R = InMemoryVehicleStore> {
    catalog: Arc<ZoneCatalog>,
    store: Arc<R>,
}

impl<R> Clone for GeofenceEngine<R> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: VehicleStateRepository> GeofenceEngine<R> {
    pub fn new(catalog: Arc<ZoneCatalog>, store: Arc<R>) -> Self {
        Self { catalog, store }
    }

    /// Records a location report and returns the vehicle's zone transitions.
    ///
    /// Input is validated before the store is touched, so a rejected report
    /// leaves the previous state in place. The previous membership comes from
    /// the upsert itself, which keeps concurrent reports for one vehicle from
    /// diffing against the same predecessor.
    pub fn process_location(
        &self,
        vehicle_id: &VehicleId,
        coordinate: Coordinate,
    ) -> GeofenceResult<LocationOutcome> {
        if vehicle_id.is_blank() {
            return Err(GeofenceError::invalid_input("vehicle id must not be empty"));
        }
        coordinate.validate()?;

        let current_zones = self.catalog.find_zones_for_location(coordinate);
        let update = self
            .store
            .upsert(vehicle_id, coordinate, current_zones)?;

        let previous_zones = update
            .previous
            .as_ref()
            .map(|state| state.current_zones.as_slice())
            .unwrap_or_default();
        let transitions = diff(previous_zones, &update.current.current_zones);

        Ok(LocationOutcome {
            vehicle_id: update.current.vehicle_id,
            current_zones: update.current.current_zones,
            transitions,
        })
    }

    pub fn vehicle_status(&self, vehicle_id: &VehicleId) -> GeofenceResult<VehicleState> {
        self.store
            .get(vehicle_id)?
            .ok_or_else(|| GeofenceError::not_found(format!("vehicle {vehicle_id} not found")))
    }

    pub fn vehicles(&self) -> GeofenceResult<Vec<VehicleState>> {
        self.store.list_all()
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &R {
        &self.store
    }
}
