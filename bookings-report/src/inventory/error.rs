//! Inventory loading errors.

use crate::domain::{DomainError, InvalidStationCode};

/// Errors raised while loading an inventory export.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Failed to read the export
    #[error("failed to read inventory export: {0}")]
    Io(#[from] std::io::Error),

    /// The export is not valid JSON for the expected shape
    #[error("invalid inventory JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A departure date is not a valid ISO date
    #[error("invalid departure date {value:?}: {source}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },

    /// A station code fails validation
    #[error("invalid station code {value:?}: {source}")]
    Station {
        value: String,
        source: InvalidStationCode,
    },

    /// The converted data violates a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}
