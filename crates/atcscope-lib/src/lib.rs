//! Atcscope library entry points.
//!
//! This crate loads a directory tree of JSON position/airport documents into
//! an in-memory [`ControllerIndex`] and answers point queries against it:
//! given an airport ICAO code, which radio controllers are relevant to it.
//! Higher-level consumers (HTTP services) should only depend on the types
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod index;
pub mod loader;
pub mod model;

pub use error::{Error, Result};
pub use index::ControllerIndex;
pub use model::{Frequency, Position, SkippedFile};
