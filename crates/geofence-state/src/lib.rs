pub mod memory;

use geofence_core::{EpochMillis, GeofenceResult, VehicleId, ZoneId};
use geofence_geo::Coordinate;
use serde::{Deserialize, Serialize};

pub use memory::InMemoryVehicleStore;

/// Last reported position and zone membership of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleState {
    pub vehicle_id: VehicleId,
    pub latitude: f64,
    pub longitude: f64,
    pub current_zones: Vec<ZoneId>,
    pub last_updated: EpochMillis,
}

impl VehicleState {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Result of a replace: the record that was overwritten, if any, and the one
/// now stored.
#[derive(Debug, Clone, PartialEq)]
pub struct StateUpdate {
    pub previous: Option<VehicleState>,
    pub current: VehicleState,
}

/// Owner of every `VehicleState`.
///
/// `upsert` must replace the record for one vehicle atomically and hand back
/// exactly the record it replaced. Callers derive transitions from that
/// previous value, so two concurrent upserts for the same vehicle must never
/// observe the same predecessor.
pub trait VehicleStateRepository: Send + Sync {
    fn get(&self, vehicle_id: &VehicleId) -> GeofenceResult<Option<VehicleState>>;
    fn upsert(
        &self,
        vehicle_id: &VehicleId,
        coordinate: Coordinate,
        current_zones: Vec<ZoneId>,
    ) -> GeofenceResult<StateUpdate>;
    fn list_all(&self) -> GeofenceResult<Vec<VehicleState>>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let state = VehicleState {
            vehicle_id: VehicleId::from("taxi-1"),
            latitude: 40.755,
            longitude: -73.98,
            current_zones: vec![ZoneId::from("downtown")],
            last_updated: 1_700_000_000_000,
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "vehicleId": "taxi-1",
                "latitude": 40.755,
                "longitude": -73.98,
                "currentZones": ["downtown"],
                "lastUpdated": 1_700_000_000_000u64,
            })
        );
        assert_eq!(state.coordinate(), Coordinate::new(40.755, -73.98));
    }
}
