//! Test utilities for service handler testing.
//!
//! Provides an in-memory fixture dataset (the source data is plain JSON,
//! so no checked-in binary fixture is needed) and a cached [`AppState`]
//! built from it.

use std::sync::OnceLock;

use atcscope_lib::ControllerIndex;
use serde_json::json;

use crate::state::AppState;

/// Lazily-initialized test state built from the in-memory fixture.
static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Get a shared test AppState built from [`fixture_index`].
///
/// The state is cached after the first call, so subsequent calls are fast.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| AppState::from_index(fixture_index()))
        .clone()
}

/// Build the fixture controller index.
///
/// Contains Memmingen (EDJA), whose positions all list the airport
/// directly in their `pre` field, and Munich (EDDM), which reaches its
/// controllers through `pre`/`topdown` coverage codes.
pub fn fixture_index() -> ControllerIndex {
    let mut index = ControllerIndex::default();
    index.ingest_document(&json!({
        "positions": {
            "ILR": {"pre": ["EDJA"], "callsign": "EDJA_TWR", "frequency": "118.975", "type": "TWR"},
            "SWA": {"pre": ["EDJA"], "callsign": "EDJA_APP", "frequency": "133.725", "type": "APP"},
            "FUE": {"pre": ["EDJA"], "callsign": "EDJA_F_APP", "frequency": "124.025", "type": "APP"},
            "ZUG": {"pre": ["EDJA"], "callsign": "EDJA_Z_APP", "frequency": "120.375", "type": "APP"},
            "STA": {"pre": ["EDJA"], "callsign": "EDJA_S_APP", "frequency": "125.250", "type": "APP"},
            "TRU": {"pre": ["EDJA"], "callsign": "EDJA_T_APP", "frequency": "126.950", "type": "APP"},
            "RDG": {"pre": ["EDJA"], "callsign": "EDJA_R_APP", "frequency": "132.300", "type": "APP"}
        },
        "airports": {
            "EDJA": {"callsign": "Memmingen", "elevation": 2077}
        }
    }));
    index.ingest_document(&json!({
        "positions": {
            "DMNH": {"pre": ["DMN"], "callsign": "EDDM_APP", "frequency": "123.900", "type": "APP"},
            "DMNL": {"pre": ["DMN"], "callsign": "EDDM_N_APP", "frequency": "128.030", "type": "APP"},
            "MTWR": {"pre": ["EDDM"], "callsign": "EDDM_TWR", "frequency": "118.700", "type": "TWR"}
        },
        "airports": {
            "EDDM": {"topdown": ["DMN"], "elevation": 1487}
        }
    }));
    index
}

/// Known airport codes in the fixture for use in tests.
pub mod fixture_airports {
    /// Memmingen: seven positions list it directly in their `pre` field.
    pub const EDJA: &str = "EDJA";

    /// Munich: controllers reachable via the `topdown` coverage code plus
    /// one position on the airport's own code.
    pub const EDDM: &str = "EDDM";

    /// Not present anywhere in the fixture.
    pub const UNKNOWN: &str = "ZZZZ";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_loads_fixture() {
        let state = test_state();
        assert!(!state.index().is_empty());
        assert_eq!(state.index().airport_count(), 2);
    }

    #[test]
    fn test_fixture_edja_resolves_to_seven_controllers() {
        let index = fixture_index();
        assert_eq!(index.resolve(fixture_airports::EDJA).len(), 7);
    }

    #[test]
    fn test_fixture_eddm_includes_topdown_and_own_code() {
        let index = fixture_index();
        let controllers = index.resolve(fixture_airports::EDDM);
        let ids: Vec<&str> = controllers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["DMNH", "DMNL", "MTWR"]);
    }

    #[test]
    fn test_fixture_unknown_airport_is_empty() {
        let index = fixture_index();
        assert!(index.resolve(fixture_airports::UNKNOWN).is_empty());
    }
}
