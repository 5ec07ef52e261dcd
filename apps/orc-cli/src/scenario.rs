//! Scenario files and parameter merging.
//!
//! Precedence, lowest to highest: built-in defaults, scenario YAML file,
//! individual command-line flags.

use crate::error::{AppError, AppResult};
use orc_core::units::{celsius, kilowatts};
use orc_cycle::CycleParameters;
use orc_fluids::WorkingFluid;
use serde::Deserialize;
use std::path::Path;

/// Optional overrides, from a YAML file or from flags.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    pub fluid: Option<String>,
    pub evaporation_c: Option<f64>,
    pub condensation_c: Option<f64>,
    pub pump_eta: Option<f64>,
    pub turbine_eta: Option<f64>,
    pub net_power_kw: Option<f64>,
}

impl Overrides {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let overrides = serde_yaml::from_str(&content)?;
        Ok(overrides)
    }

    /// Apply these overrides on top of `base`, field by field.
    pub fn apply(&self, base: CycleParameters) -> AppResult<CycleParameters> {
        let fluid = match &self.fluid {
            Some(name) => name.parse::<WorkingFluid>().map_err(AppError::UnknownFluid)?,
            None => base.fluid,
        };
        Ok(CycleParameters {
            fluid,
            t_evaporation: self.evaporation_c.map(celsius).unwrap_or(base.t_evaporation),
            t_condensation: self
                .condensation_c
                .map(celsius)
                .unwrap_or(base.t_condensation),
            pump_eta: self.pump_eta.unwrap_or(base.pump_eta),
            turbine_eta: self.turbine_eta.unwrap_or(base.turbine_eta),
            net_power_target: self
                .net_power_kw
                .map(kilowatts)
                .unwrap_or(base.net_power_target),
        })
    }
}

/// Resolve the effective parameters: defaults, then the scenario file (if
/// any), then the flag overrides.
pub fn resolve(scenario: Option<&Path>, flags: &Overrides) -> AppResult<CycleParameters> {
    let mut params = CycleParameters::default();
    if let Some(path) = scenario {
        params = Overrides::load(path)?.apply(params)?;
    }
    flags.apply(params)
}
