use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock milliseconds since the Unix epoch, used for `lastUpdated`.
pub type EpochMillis = u64;

pub fn now_epoch_millis() -> EpochMillis {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    EpochMillis::try_from(elapsed.as_millis()).unwrap_or(EpochMillis::MAX)
}
