//! orc-fluids: working-fluid property calculations for the ORC workspace.
//!
//! Provides:
//! - Working-fluid definitions for low-temperature organic Rankine cycles
//! - The `PropertyModel` trait: saturation lookups, isentropic projections,
//!   and (p, h) state resolution for a chosen fluid
//! - A self-contained correlation backend (`CorrelationModel`)
//! - Saturation dome sampling for diagram rendering
//!
//! # Architecture
//!
//! The `PropertyModel` trait isolates the cycle solver and renderer from the
//! property backend. The built-in backend uses engineering correlations that
//! are thermodynamically consistent by construction; a table-based or
//! CoolProp-linked backend can be substituted without touching the solver.

pub mod correlation;
pub mod error;
pub mod fluid;
pub mod model;
pub mod sweep;

// Re-exports for ergonomics
pub use correlation::CorrelationModel;
pub use error::{PropertyError, PropertyResult};
pub use fluid::{FluidConstants, WorkingFluid};
pub use model::{
    FluidBounds, Phase, PropertyModel, ResolvedState, SaturationPoint, SpecEnthalpy, SpecEntropy,
};
pub use sweep::saturation_dome;
