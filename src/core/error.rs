//! Step failure types

use thiserror::Error;

/// Error type for step failures
///
/// Steps are free to use any error type; this one covers the common cases
/// so closures gating on [`trust`](crate::core::trust::trust) have something
/// ready-made to signal with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Failed(String),
}
