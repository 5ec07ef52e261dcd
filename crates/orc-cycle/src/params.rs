//! Cycle boundary conditions.

use crate::error::{CycleError, CycleResult};
use orc_core::units::{celsius, kilowatts, Power, Temperature};
use orc_fluids::WorkingFluid;

/// Fixed inputs of one cycle evaluation.
///
/// Validation happens in `validate()`, before any property query, so a bad
/// combination never reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleParameters {
    /// Working fluid circulating in the binary loop.
    pub fluid: WorkingFluid,
    /// Evaporation (heat-addition) temperature.
    pub t_evaporation: Temperature,
    /// Condensation (heat-rejection) temperature.
    pub t_condensation: Temperature,
    /// Pump isentropic efficiency, in (0, 1].
    pub pump_eta: f64,
    /// Turbine isentropic efficiency, in (0, 1].
    pub turbine_eta: f64,
    /// Net electrical output the plant is sized for.
    pub net_power_target: Power,
}

impl Default for CycleParameters {
    /// The 100 kW geothermal binary design point.
    fn default() -> Self {
        Self {
            fluid: WorkingFluid::R245fa,
            t_evaporation: celsius(150.0),
            t_condensation: celsius(35.0),
            pump_eta: 0.85,
            turbine_eta: 0.85,
            net_power_target: kilowatts(100.0),
        }
    }
}

impl CycleParameters {
    pub fn validate(&self) -> CycleResult<()> {
        if !self.t_evaporation.value.is_finite() || !self.t_condensation.value.is_finite() {
            return Err(CycleError::InvalidParameters {
                what: "temperatures must be finite",
            });
        }
        if self.t_condensation.value >= self.t_evaporation.value {
            return Err(CycleError::InvalidParameters {
                what: "condensation temperature must be below evaporation temperature",
            });
        }
        if !(self.pump_eta > 0.0 && self.pump_eta <= 1.0) {
            return Err(CycleError::InvalidParameters {
                what: "pump efficiency must be in (0,1]",
            });
        }
        if !(self.turbine_eta > 0.0 && self.turbine_eta <= 1.0) {
            return Err(CycleError::InvalidParameters {
                what: "turbine efficiency must be in (0,1]",
            });
        }
        if !self.net_power_target.value.is_finite() || self.net_power_target.value <= 0.0 {
            return Err(CycleError::InvalidParameters {
                what: "net power target must be positive",
            });
        }
        Ok(())
    }
}
