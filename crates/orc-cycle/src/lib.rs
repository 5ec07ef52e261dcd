//! orc-cycle: steady-state solver for the ideal organic Rankine cycle.
//!
//! Given fixed boundary conditions (evaporation and condensation
//! temperatures, isentropic efficiencies, a net power target) and a
//! `PropertyModel`, the solver computes the four cycle state points
//!
//! 1. condenser exit / pump inlet (saturated liquid)
//! 2. pump exit / evaporator inlet (compressed liquid)
//! 3. evaporator exit / turbine inlet (saturated vapor, no superheat)
//! 4. turbine exit / condenser inlet
//!
//! and the energy balance: specific pump and turbine work, heat absorbed
//! and rejected, net specific work, thermal efficiency, and the mass flow
//! rate required to hit the power target.

pub mod balance;
pub mod error;
pub mod params;
pub mod solve;
pub mod state;

pub use balance::EnergyBalance;
pub use error::{CycleError, CycleResult};
pub use params::CycleParameters;
pub use solve::{solve, CycleSolution};
pub use state::{PointId, StatePoint};
