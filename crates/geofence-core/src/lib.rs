pub mod error;
pub mod ids;
pub mod time;

pub use error::{ErrorCode, GeofenceError, GeofenceResult};
pub use ids::{VehicleId, ZoneId};
pub use time::{now_epoch_millis, EpochMillis};
