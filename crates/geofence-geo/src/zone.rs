use geofence_core::{GeofenceError, GeofenceResult, ZoneId};
use serde::{Deserialize, Serialize};

use crate::{BoundingBox, Coordinate, ZoneGeometry};

/// A named region. Serialized as `{id, name, type, bounds}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    #[serde(flatten)]
    pub geometry: ZoneGeometry,
}

impl Zone {
    pub fn rectangle(id: impl Into<ZoneId>, name: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            geometry: ZoneGeometry::Rectangle { bounds },
        }
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.geometry.contains(coord)
    }

    pub fn validate(&self) -> GeofenceResult<()> {
        if self.id.is_blank() {
            return Err(GeofenceError::invalid_input("zone id must not be empty"));
        }
        self.geometry.validate().map_err(|err| {
            GeofenceError::invalid_input(format!("zone {}: {}", self.id, err.message))
        })
    }

    pub fn summary(&self) -> ZoneSummary {
        ZoneSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.geometry.kind(),
        }
    }
}

/// Public view of a zone, without its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneSummary {
    pub id: ZoneId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}
