pub mod catalog;
pub mod zone;

use geofence_core::{GeofenceError, GeofenceResult};
use serde::{Deserialize, Serialize};

pub use catalog::ZoneCatalog;
pub use zone::{Zone, ZoneSummary};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and inside the WGS84 latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        is_valid_latitude(self.latitude) && is_valid_longitude(self.longitude)
    }

    pub fn validate(&self) -> GeofenceResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeofenceError::invalid_input(format!(
                "coordinate ({}, {}) outside latitude [-90, 90] / longitude [-180, 180]",
                self.latitude, self.longitude
            )))
        }
    }
}

pub fn is_valid_latitude(value: f64) -> bool {
    value.is_finite() && (MIN_LATITUDE..=MAX_LATITUDE).contains(&value)
}

pub fn is_valid_longitude(value: f64) -> bool {
    value.is_finite() && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&value)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Inclusive on all four edges.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.latitude <= self.north
            && coord.latitude >= self.south
            && coord.longitude <= self.east
            && coord.longitude >= self.west
    }

    pub fn validate(&self) -> GeofenceResult<()> {
        if !is_valid_latitude(self.north) || !is_valid_latitude(self.south) {
            return Err(GeofenceError::invalid_input(format!(
                "bounds latitude out of range: north={} south={}",
                self.north, self.south
            )));
        }
        if !is_valid_longitude(self.east) || !is_valid_longitude(self.west) {
            return Err(GeofenceError::invalid_input(format!(
                "bounds longitude out of range: east={} west={}",
                self.east, self.west
            )));
        }
        if self.north <= self.south {
            return Err(GeofenceError::invalid_input(format!(
                "north ({}) must be greater than south ({})",
                self.north, self.south
            )));
        }
        if self.east <= self.west {
            return Err(GeofenceError::invalid_input(format!(
                "east ({}) must be greater than west ({})",
                self.east, self.west
            )));
        }
        Ok(())
    }
}

/// Shape of a zone. Every variant answers the same containment question, so
/// catalog queries do not change when a shape is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZoneGeometry {
    Rectangle { bounds: BoundingBox },
}

impl ZoneGeometry {
    pub fn contains(&self, coord: Coordinate) -> bool {
        match self {
            Self::Rectangle { bounds } => bounds.contains(coord),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle { .. } => "rectangle",
        }
    }

    pub fn validate(&self) -> GeofenceResult<()> {
        match self {
            Self::Rectangle { bounds } => bounds.validate(),
        }
    }
}
