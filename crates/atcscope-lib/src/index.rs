//! The in-memory controller index and the query resolver.
//!
//! The index holds three flat tables built once at startup:
//!
//! - coverage code -> positions declared under that code
//! - airport ICAO -> raw attribute record (opaque pass-through)
//! - airport ICAO -> flattened coverage codes
//!
//! After loading the index is never mutated, so [`ControllerIndex::resolve`]
//! is safe to call from any number of concurrent readers.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::model::{scalar_or_list, Frequency, Position, SkippedFile};

/// Airport record fields that contribute coverage codes, in the fixed
/// order their matches appear in resolver output.
const COVERAGE_FIELDS: [&str; 4] = ["pre", "topdown", "sector", "major"];

/// Lookup tables answering "which controllers are relevant to this airport".
#[derive(Debug, Clone, Default)]
pub struct ControllerIndex {
    /// Coverage code -> positions, in ingestion order.
    positions_by_code: HashMap<String, Vec<Position>>,
    /// Airport ICAO -> raw source record, last write wins.
    airport_info: HashMap<String, Map<String, Value>>,
    /// Airport ICAO -> coverage codes from `pre`, `topdown`, `sector`,
    /// `major`, flattened in that field order. Never contains the
    /// airport's own code; that is appended at query time.
    airport_codes: HashMap<String, Vec<String>>,
    /// Files skipped during loading, with reasons.
    skipped: Vec<SkippedFile>,
}

impl ControllerIndex {
    /// Fold one parsed source document into the tables.
    ///
    /// Non-object documents contribute nothing. Position entries append
    /// under every code in their scalar-or-list `pre` field; airport
    /// entries overwrite any earlier record for the same ICAO. Ingesting
    /// the same document twice appends duplicate position entries; reload
    /// means building a fresh index.
    pub fn ingest_document(&mut self, document: &Value) {
        let Some(root) = document.as_object() else {
            return;
        };

        if let Some(positions) = root.get("positions").and_then(Value::as_object) {
            for (id, record) in positions {
                let codes = record.get("pre").map(scalar_or_list).unwrap_or_default();
                if codes.is_empty() {
                    continue;
                }
                let position = Position {
                    id: id.clone(),
                    callsign: record
                        .get("callsign")
                        .and_then(Value::as_str)
                        .map(str::to_owned),
                    frequency: record.get("frequency").and_then(Frequency::from_value),
                    kind: record.get("type").and_then(Value::as_str).map(str::to_owned),
                };
                for code in codes {
                    self.positions_by_code
                        .entry(code)
                        .or_default()
                        .push(position.clone());
                }
            }
        }

        if let Some(airports) = root.get("airports").and_then(Value::as_object) {
            for (icao, record) in airports {
                let Some(fields) = record.as_object() else {
                    continue;
                };
                let mut codes = Vec::new();
                for field in COVERAGE_FIELDS {
                    if let Some(value) = fields.get(field) {
                        codes.extend(scalar_or_list(value));
                    }
                }
                self.airport_codes.insert(icao.clone(), codes);
                self.airport_info.insert(icao.clone(), fields.clone());
            }
        }
    }

    /// Resolve the controllers relevant to an airport.
    ///
    /// The code is uppercased, its coverage codes (possibly none) are
    /// walked in order with the airport's own code appended last, and
    /// matches are deduplicated by `(id, frequency)` with the first
    /// occurrence winning. An unknown airport yields an empty list; that
    /// is a valid "no controllers" answer, not an error.
    pub fn resolve(&self, airport: &str) -> Vec<Position> {
        let icao = airport.to_ascii_uppercase();

        let mut candidates: Vec<&str> = self
            .airport_codes
            .get(&icao)
            .map(|codes| codes.iter().map(String::as_str).collect())
            .unwrap_or_default();
        candidates.push(&icao);

        let mut seen: HashSet<(&str, Option<&Frequency>)> = HashSet::new();
        let mut controllers = Vec::new();
        for code in candidates {
            let Some(positions) = self.positions_by_code.get(code) else {
                continue;
            };
            for position in positions {
                if seen.insert((position.id.as_str(), position.frequency.as_ref())) {
                    controllers.push(position.clone());
                }
            }
        }
        controllers
    }

    /// Positions indexed under a coverage code, in ingestion order.
    pub fn positions_for(&self, code: &str) -> &[Position] {
        self.positions_by_code
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Raw source record for an airport, if known.
    pub fn airport_info(&self, icao: &str) -> Option<&Map<String, Value>> {
        self.airport_info.get(icao)
    }

    /// Coverage codes for an airport, if known. Does not include the
    /// airport's own code.
    pub fn coverage_codes(&self, icao: &str) -> Option<&[String]> {
        self.airport_codes.get(icao).map(Vec::as_slice)
    }

    /// Number of airports with a stored record.
    pub fn airport_count(&self) -> usize {
        self.airport_info.len()
    }

    /// Number of coverage codes with at least one indexed position.
    pub fn indexed_code_count(&self) -> usize {
        self.positions_by_code.len()
    }

    /// Files skipped while loading, with reasons.
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// True when nothing at all was loaded.
    pub fn is_empty(&self) -> bool {
        self.positions_by_code.is_empty() && self.airport_info.is_empty()
    }

    pub(crate) fn record_skip(&mut self, skip: SkippedFile) {
        self.skipped.push(skip);
    }
}
