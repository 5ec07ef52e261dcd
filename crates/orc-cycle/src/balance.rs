//! Derived energy-balance results.

use orc_core::units::{MassRate, Power};

/// Scalar outputs of one cycle evaluation.
///
/// Specific quantities are per unit mass of working fluid [J/kg]; the mass
/// flow rate scales them to the plant's power target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    /// Specific pump work input [J/kg]
    pub pump_work: f64,
    /// Specific turbine work output [J/kg]
    pub turbine_work: f64,
    /// Specific heat absorbed in the evaporator [J/kg]
    pub heat_absorbed: f64,
    /// Specific heat rejected in the condenser [J/kg]
    pub heat_rejected: f64,
    /// Net specific work, turbine − pump [J/kg]
    pub net_work: f64,
    /// Thermal efficiency, net work / heat absorbed
    pub thermal_efficiency: f64,
    /// Mass flow rate required to hit the net power target [kg/s]
    pub mass_flow: MassRate,
    /// Net power at that mass flow (echoes the target)
    pub net_power: Power,
}

impl EnergyBalance {
    /// Gross turbine power at the sized mass flow [W].
    pub fn gross_power_w(&self) -> f64 {
        self.mass_flow.value * self.turbine_work
    }

    /// Pump power draw at the sized mass flow [W].
    pub fn pump_power_w(&self) -> f64 {
        self.mass_flow.value * self.pump_work
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orc_core::units::{kgps, watts};

    #[test]
    fn power_scaling() {
        let balance = EnergyBalance {
            pump_work: 2.0e3,
            turbine_work: 32.0e3,
            heat_absorbed: 220.0e3,
            heat_rejected: 190.0e3,
            net_work: 30.0e3,
            thermal_efficiency: 30.0e3 / 220.0e3,
            mass_flow: kgps(2.0),
            net_power: watts(60.0e3),
        };
        assert!((balance.gross_power_w() - 64.0e3).abs() < 1e-9);
        assert!((balance.pump_power_w() - 4.0e3).abs() < 1e-9);
        assert!(
            (balance.gross_power_w() - balance.pump_power_w() - balance.net_power.value).abs()
                < 1e-9
        );
    }
}
