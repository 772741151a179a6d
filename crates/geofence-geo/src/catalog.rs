use geofence_core::{GeofenceError, GeofenceResult, ZoneId};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::{BoundingBox, Coordinate, Zone, ZoneSummary};

/// Immutable set of zones loaded at startup.
///
/// Lookups are linear over the zone list; catalogs are small and static, so
/// no spatial index is kept. Zones may overlap and a point can belong to any
/// number of them.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<Zone>) -> GeofenceResult<Self> {
        let mut seen = HashSet::with_capacity(zones.len());
        for zone in &zones {
            zone.validate()?;
            if !seen.insert(zone.id.as_str()) {
                return Err(GeofenceError::invalid_input(format!(
                    "duplicate zone id: {}",
                    zone.id
                )));
            }
        }
        Ok(Self { zones })
    }

    /// The service's default zones.
    pub fn builtin() -> Self {
        Self {
            zones: builtin_zones(),
        }
    }

    /// Loads a JSON array of zones.
    pub fn from_json_file(path: impl AsRef<Path>) -> GeofenceResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            GeofenceError::invalid_input(format!("reading {}: {err}", path.display()))
        })?;
        Self::from_json_str(&raw)
            .map_err(|err| GeofenceError::new(err.code, format!("{}: {}", path.display(), err.message)))
    }

    pub fn from_json_str(raw: &str) -> GeofenceResult<Self> {
        let zones: Vec<Zone> = serde_json::from_str(raw)
            .map_err(|err| GeofenceError::invalid_input(format!("invalid zone catalog: {err}")))?;
        Self::new(zones)
    }

    /// Ids of every zone containing `coord`, in catalog order.
    pub fn find_zones_for_location(&self, coord: Coordinate) -> Vec<ZoneId> {
        self.zones
            .iter()
            .filter(|zone| zone.contains(coord))
            .map(|zone| zone.id.clone())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id.as_str() == id)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn summaries(&self) -> Vec<ZoneSummary> {
        self.zones.iter().map(Zone::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

fn builtin_zones() -> Vec<Zone> {
    vec![
        Zone::rectangle(
            "downtown",
            "Downtown Area",
            BoundingBox {
                north: 40.7589,
                south: 40.7489,
                east: -73.9789,
                west: -73.9889,
            },
        ),
        Zone::rectangle(
            "airport",
            "Airport Zone",
            BoundingBox {
                north: 40.6500,
                south: 40.6300,
                east: -73.7700,
                west: -73.7900,
            },
        ),
        Zone::rectangle(
            "financial_district",
            "Financial District",
            BoundingBox {
                north: 40.7100,
                south: 40.7000,
                east: -74.0050,
                west: -74.0150,
            },
        ),
    ]
}
