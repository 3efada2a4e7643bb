use thiserror::Error;

use crate::repositories::RepositoryError;

/// Errors that can occur while recording time or building reports.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("hours must be non-negative, got {0}")]
    NegativeHours(f64),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
