use geofence_core::ZoneId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTransitions {
    pub entered: Vec<ZoneId>,
    pub exited: Vec<ZoneId>,
}

impl ZoneTransitions {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Zones in `current` but not `previous` are entered, zones in `previous` but
/// not `current` are exited. Each list keeps the order of the slice it came
/// from. A vehicle with no prior state passes an empty `previous`.
pub fn diff(previous: &[ZoneId], current: &[ZoneId]) -> ZoneTransitions {
    let before: HashSet<&ZoneId> = previous.iter().collect();
    let after: HashSet<&ZoneId> = current.iter().collect();

    ZoneTransitions {
        entered: unique_missing(current, &before),
        exited: unique_missing(previous, &after),
    }
}

fn unique_missing(source: &[ZoneId], other: &HashSet<&ZoneId>) -> Vec<ZoneId> {
    let mut emitted = HashSet::new();
    source
        .iter()
        .filter(|zone| !other.contains(zone) && emitted.insert(*zone))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<ZoneId> {
        values.iter().map(|value| ZoneId::from(*value)).collect()
    }

    #[test]
    fn first_report_only_enters() {
        let result = diff(&[], &ids(&["downtown", "airport"]));
        assert_eq!(result.entered, ids(&["downtown", "airport"]));
        assert!(result.exited.is_empty());
    }

    #[test]
    fn unchanged_membership_has_no_events() {
        let zones = ids(&["a", "b"]);
        assert!(diff(&zones, &zones).is_empty());
        // Membership is a set; reordering is not a transition.
        assert!(diff(&ids(&["b", "a"]), &zones).is_empty());
    }

    #[test]
    fn moving_between_zones() {
        let result = diff(&ids(&["downtown"]), &ids(&["airport"]));
        assert_eq!(result.entered, ids(&["airport"]));
        assert_eq!(result.exited, ids(&["downtown"]));
    }

    #[test]
    fn partial_overlap_keeps_shared_zone_silent() {
        let result = diff(&ids(&["a", "b", "c"]), &ids(&["c", "d", "a"]));
        assert_eq!(result.entered, ids(&["d"]));
        assert_eq!(result.exited, ids(&["b"]));
    }

    #[test]
    fn diff_is_symmetric() {
        let cases = [
            (ids(&[]), ids(&["x"])),
            (ids(&["a", "b"]), ids(&["b", "c"])),
            (ids(&["a"]), ids(&[])),
            (ids(&["p", "q", "r"]), ids(&["r", "s"])),
        ];
        for (a, b) in cases {
            let forward = diff(&a, &b);
            let backward = diff(&b, &a);
            assert_eq!(forward.entered, backward.exited);
            assert_eq!(forward.exited, backward.entered);
        }
    }

    #[test]
    fn duplicate_ids_are_reported_once() {
        let result = diff(&ids(&["a", "a"]), &ids(&["b", "b"]));
        assert_eq!(result.entered, ids(&["b"]));
        assert_eq!(result.exited, ids(&["a"]));
    }
}
