pub mod engine;
pub mod transitions;

pub use engine::{GeofenceEngine, LocationOutcome};
pub use transitions::{diff, ZoneTransitions};
