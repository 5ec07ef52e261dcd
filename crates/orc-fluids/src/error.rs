//! Fluid property errors.

use orc_core::CoreError;
use thiserror::Error;

/// Result type for property operations.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors that can occur during fluid property lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// Requested state lies outside the fluid's valid domain
    /// (below the minimum temperature or at/above the critical point).
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Non-physical values (negative pressure, NaN enthalpy, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operation not supported by this backend.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Iterative solve inside the backend did not converge.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },
}

impl From<CoreError> for PropertyError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } => PropertyError::NonPhysical { what },
            CoreError::InvalidArg { what } => PropertyError::InvalidArg { what },
            CoreError::Invariant { what } => PropertyError::NonPhysical { what },
            CoreError::Convergence { what } => PropertyError::ConvergenceFailed { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PropertyError::OutOfRange {
            what: "saturation temperature",
        };
        assert!(err.to_string().contains("saturation temperature"));
    }

    #[test]
    fn core_error_conversion() {
        let core = CoreError::Convergence { what: "t_from_s" };
        let prop: PropertyError = core.into();
        assert!(matches!(prop, PropertyError::ConvergenceFailed { .. }));
    }
}
