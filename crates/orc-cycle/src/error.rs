//! Cycle solver errors.

use orc_fluids::PropertyError;
use thiserror::Error;

pub type CycleResult<T> = Result<T, CycleError>;

/// Errors that can occur while solving the cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Bad input combination, detected before any property query.
    #[error("Invalid parameters: {what}")]
    InvalidParameters { what: &'static str },

    /// A property lookup was rejected or failed to resolve.
    #[error("Property lookup failed: {0}")]
    Property(#[from] PropertyError),

    /// The solved cycle is thermodynamically degenerate (e.g. no net work).
    #[error("Non-physical result: {what}")]
    NonPhysicalResult { what: &'static str },
}
