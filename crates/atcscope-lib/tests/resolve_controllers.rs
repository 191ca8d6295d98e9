//! Integration tests for the query resolver over a loaded dataset.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use atcscope_lib::ControllerIndex;
use tempfile::TempDir;

/// Memmingen has no coverage-code fields of its own; every position lists
/// "EDJA" directly in its `pre` field.
const EDJA_DATASET: &str = r#"{
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
}"#;

fn load_fixture(contents: &str) -> ControllerIndex {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "data.json", contents);
    ControllerIndex::load(dir.path()).unwrap()
}

fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn edja_returns_exactly_its_declared_positions_in_order() {
    let index = load_fixture(EDJA_DATASET);

    let controllers = index.resolve("EDJA");
    let ids: Vec<&str> = controllers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["ILR", "SWA", "FUE", "ZUG", "STA", "TRU", "RDG"]);
}

#[test]
fn resolve_is_case_insensitive() {
    let index = load_fixture(EDJA_DATASET);
    assert_eq!(index.resolve("edja"), index.resolve("EDJA"));
}

#[test]
fn unknown_airport_resolves_to_empty() {
    let index = load_fixture(EDJA_DATASET);
    assert!(index.resolve("ZZZZ").is_empty());
}

#[test]
fn resolved_controllers_contain_no_duplicate_id_frequency_pairs() {
    // STA is reachable both through EDJA's coverage codes and through its
    // own code; the (id, frequency) pair must appear only once.
    let dataset = r#"{
        "positions": {
            "STA": {"pre": ["ALP", "EDJA"], "callsign": "EDJA_S_APP", "frequency": "125.250", "type": "APP"},
            "ALR": {"pre": ["ALP"], "callsign": "ALP_CTR", "frequency": "135.425", "type": "CTR"}
        },
        "airports": {
            "EDJA": {"topdown": ["ALP"]}
        }
    }"#;
    let index = load_fixture(dataset);

    let controllers = index.resolve("EDJA");
    let mut pairs = HashSet::new();
    for controller in &controllers {
        assert!(
            pairs.insert((controller.id.clone(), controller.frequency.clone())),
            "duplicate (id, frequency) pair for {}",
            controller.id
        );
    }
    assert_eq!(controllers.len(), 2);

    // Coverage-code matches come before matches on the airport's own code.
    let ids: Vec<&str> = controllers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["STA", "ALR"]);
}

#[test]
fn same_id_on_different_frequencies_stays_distinct() {
    let dataset = r#"{
        "positions": {
            "ZUG": {"pre": ["EDJA"], "callsign": "EDJA_Z_APP", "frequency": "120.375", "type": "APP"}
        }
    }"#;
    let second = r#"{
        "positions": {
            "ZUG": {"pre": ["EDJA"], "callsign": "EDJA_Z_APP", "frequency": "128.030", "type": "APP"}
        }
    }"#;
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.json", dataset);
    write_file(dir.path(), "b.json", second);

    let index = ControllerIndex::load(dir.path()).unwrap();
    let controllers = index.resolve("EDJA");
    assert_eq!(controllers.len(), 2);
}

#[test]
fn missing_optional_fields_stay_absent() {
    let dataset = r#"{
        "positions": {
            "BARE": {"pre": "EDJA"}
        }
    }"#;
    let index = load_fixture(dataset);
    let controllers = index.resolve("EDJA");
    assert_eq!(controllers.len(), 1);
    assert_eq!(controllers[0].callsign, None);
    assert_eq!(controllers[0].frequency, None);
    assert_eq!(controllers[0].kind, None);
}
