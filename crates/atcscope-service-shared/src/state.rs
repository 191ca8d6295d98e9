//! Application state for the HTTP services.
//!
//! The controller index is loaded once at startup and never mutated
//! afterward, so handlers share it through a cheaply cloneable `Arc`.

use std::path::Path;
use std::sync::Arc;

use atcscope_lib::{ControllerIndex, Error as LibError};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to load the controller index from the data directory.
    IndexLoad(LibError),

    /// Data directory not found.
    DataDirNotFound(String),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexLoad(e) => write!(f, "failed to load controller index: {}", e),
            Self::DataDirNotFound(path) => write!(f, "data directory not found: {}", path),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IndexLoad(e) => Some(e),
            Self::DataDirNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::IndexLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally); share it via axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<ControllerIndex>,
}

impl AppState {
    /// Load application state from a data directory.
    ///
    /// Walks the directory, builds the controller index, and logs what was
    /// loaded. Fails only when the directory itself is unusable; malformed
    /// files inside it are skipped by the loader and reported via a `warn`
    /// log plus the skip record.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let data_dir = data_dir.as_ref();

        if !data_dir.exists() {
            return Err(AppStateError::DataDirNotFound(
                data_dir.display().to_string(),
            ));
        }

        tracing::info!(path = %data_dir.display(), "loading controller index");
        let index = ControllerIndex::load(data_dir)?;
        tracing::info!(
            airports = index.airport_count(),
            codes = index.indexed_code_count(),
            skipped = index.skipped().len(),
            "controller index loaded"
        );

        Ok(Self {
            inner: Arc::new(index),
        })
    }

    /// Create application state from a pre-built index.
    ///
    /// Useful for tests or for callers that assemble documents themselves.
    pub fn from_index(index: ControllerIndex) -> Self {
        Self {
            inner: Arc::new(index),
        }
    }

    /// Access the loaded controller index.
    pub fn index(&self) -> &ControllerIndex {
        &self.inner
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("airport_count", &self.inner.airport_count())
            .field("indexed_code_count", &self.inner.indexed_code_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_index() -> ControllerIndex {
        let mut index = ControllerIndex::default();
        index.ingest_document(&json!({
            "positions": {"ILR": {"pre": ["EDJA"], "frequency": "118.975"}},
            "airports": {"EDJA": {"elevation": 2077}}
        }));
        index
    }

    #[test]
    fn test_app_state_from_index() {
        let state = AppState::from_index(minimal_index());
        assert_eq!(state.index().airport_count(), 1);
        assert_eq!(state.index().resolve("EDJA").len(), 1);
    }

    #[test]
    fn test_app_state_clone_shares_index() {
        let state1 = AppState::from_index(minimal_index());
        let state2 = state1.clone();
        assert_eq!(
            state1.index().airport_count(),
            state2.index().airport_count()
        );
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::from_index(minimal_index());
        let debug = format!("{:?}", state);
        assert!(debug.contains("AppState"));
        assert!(debug.contains("airport_count"));
    }

    #[test]
    fn test_app_state_load_nonexistent() {
        let result = AppState::load("/nonexistent/path/to/data");
        match result.unwrap_err() {
            AppStateError::DataDirNotFound(path) => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_app_state_error_display() {
        let err = AppStateError::DataDirNotFound("/path/to/data".to_string());
        assert!(err.to_string().contains("/path/to/data"));
        assert!(err.to_string().contains("not found"));
    }
}
