use dashmap::DashMap;
use geofence_core::{now_epoch_millis, GeofenceResult, VehicleId, ZoneId};
use geofence_geo::Coordinate;

use crate::{StateUpdate, VehicleState, VehicleStateRepository};

/// Process-local store. State lives as long as the store value; nothing is
/// evicted.
///
/// Replacements go through `DashMap::insert`, which swaps the value under the
/// shard's write lock, so the returned predecessor is always the record that
/// was actually overwritten. Vehicles on different shards never contend.
#[derive(Debug, Default)]
pub struct InMemoryVehicleStore {
    states: DashMap<VehicleId, VehicleState>,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VehicleStateRepository for InMemoryVehicleStore {
    fn get(&self, vehicle_id: &VehicleId) -> GeofenceResult<Option<VehicleState>> {
        Ok(self
            .states
            .get(vehicle_id)
            .map(|entry| entry.value().clone()))
    }

    fn upsert(
        &self,
        vehicle_id: &VehicleId,
        coordinate: Coordinate,
        current_zones: Vec<ZoneId>,
    ) -> GeofenceResult<StateUpdate> {
        let current = VehicleState {
            vehicle_id: vehicle_id.clone(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            current_zones,
            last_updated: now_epoch_millis(),
        };
        let previous = self.states.insert(vehicle_id.clone(), current.clone());
        Ok(StateUpdate { previous, current })
    }

    fn list_all(&self) -> GeofenceResult<Vec<VehicleState>> {
        Ok(self
            .states
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn len(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn zones(ids: &[&str]) -> Vec<ZoneId> {
        ids.iter().map(|id| ZoneId::from(*id)).collect()
    }

    #[test]
    fn get_unknown_vehicle_is_none() {
        let store = InMemoryVehicleStore::new();
        assert!(store.get(&VehicleId::from("ghost")).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn upsert_replaces_whole_record() {
        let store = InMemoryVehicleStore::new();
        let id = VehicleId::from("taxi-1");

        let first = store
            .upsert(&id, Coordinate::new(40.755, -73.98), zones(&["downtown"]))
            .unwrap();
        assert!(first.previous.is_none());
        assert_eq!(first.current.current_zones, zones(&["downtown"]));

        let second = store
            .upsert(&id, Coordinate::new(1.0, 2.0), Vec::new())
            .unwrap();
        assert_eq!(second.previous, Some(first.current));
        assert!(second.current.current_zones.is_empty());
        assert!(second.current.last_updated >= second.previous.unwrap().last_updated);

        let stored = store.get(&id).unwrap().unwrap();
        assert_eq!(stored.coordinate(), Coordinate::new(1.0, 2.0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_all_returns_one_record_per_vehicle() {
        let store = InMemoryVehicleStore::new();
        for (id, lat) in [("a", 1.0), ("b", 2.0), ("a", 3.0)] {
            store
                .upsert(&VehicleId::from(id), Coordinate::new(lat, 0.0), Vec::new())
                .unwrap();
        }
        let mut all = store.list_all().unwrap();
        all.sort_by(|left, right| left.vehicle_id.cmp(&right.vehicle_id));
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].latitude, 3.0);
        assert_eq!(all[1].latitude, 2.0);
    }

    #[test]
    fn concurrent_upserts_form_a_single_chain() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 200;

        let store = InMemoryVehicleStore::new();
        let id = VehicleId::from("contended");

        let predecessors: Vec<Option<f64>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|thread| {
                    let store = &store;
                    let id = &id;
                    scope.spawn(move || {
                        (0..PER_THREAD)
                            .map(|step| {
                                let marker = (thread * PER_THREAD + step) as f64 / 10_000.0;
                                store
                                    .upsert(id, Coordinate::new(marker, 0.0), Vec::new())
                                    .unwrap()
                                    .previous
                                    .map(|state| state.latitude)
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        // Every write except the last is observed as a predecessor exactly once,
        // and exactly one writer saw an empty store.
        let mut seen: HashMap<u64, usize> = HashMap::new();
        let mut first_writers = 0;
        for previous in predecessors {
            match previous {
                Some(lat) => *seen.entry(lat.to_bits()).or_default() += 1,
                None => first_writers += 1,
            }
        }
        assert_eq!(first_writers, 1);
        assert_eq!(seen.len(), THREADS * PER_THREAD - 1);
        assert!(seen.values().all(|count| *count == 1));

        let last = store.get(&id).unwrap().unwrap();
        assert!(!seen.contains_key(&last.latitude.to_bits()));
    }
}
