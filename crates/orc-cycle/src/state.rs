//! Cycle state points.

use orc_core::units::{Pressure, Temperature};
use orc_fluids::{Phase, SpecEnthalpy, SpecEntropy};
use std::fmt;

/// Position of a state point in the loop, in process order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointId {
    /// 1 — condenser exit / pump inlet
    PumpInlet,
    /// 2 — pump exit / evaporator inlet
    EvaporatorInlet,
    /// 3 — evaporator exit / turbine inlet
    TurbineInlet,
    /// 4 — turbine exit / condenser inlet
    CondenserInlet,
}

impl PointId {
    pub const IN_PROCESS_ORDER: [PointId; 4] = [
        PointId::PumpInlet,
        PointId::EvaporatorInlet,
        PointId::TurbineInlet,
        PointId::CondenserInlet,
    ];

    /// Conventional 1-based cycle numbering.
    pub fn number(&self) -> u8 {
        match self {
            PointId::PumpInlet => 1,
            PointId::EvaporatorInlet => 2,
            PointId::TurbineInlet => 3,
            PointId::CondenserInlet => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PointId::PumpInlet => "condenser exit / pump inlet",
            PointId::EvaporatorInlet => "pump exit / evaporator inlet",
            PointId::TurbineInlet => "evaporator exit / turbine inlet",
            PointId::CondenserInlet => "turbine exit / condenser inlet",
        }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state {} ({})", self.number(), self.label())
    }
}

/// Fully resolved thermodynamic state at one cycle point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    pub id: PointId,
    /// Pressure [Pa]
    pub p: Pressure,
    /// Temperature [K]
    pub t: Temperature,
    /// Specific enthalpy [J/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [J/(kg·K)]
    pub s: SpecEntropy,
    pub phase: Phase,
}

impl StatePoint {
    /// True when every coordinate a diagram needs is usable.
    pub fn is_plottable(&self) -> bool {
        self.p.value.is_finite()
            && self.t.value.is_finite()
            && self.h.is_finite()
            && self.s.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orc_core::units::{k, pa};

    #[test]
    fn process_order_is_one_to_four() {
        let numbers: Vec<u8> = PointId::IN_PROCESS_ORDER
            .iter()
            .map(|id| id.number())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn plottable_rejects_nan() {
        let mut state = StatePoint {
            id: PointId::PumpInlet,
            p: pa(2.0e5),
            t: k(308.15),
            h: 45.0e3,
            s: 156.0,
            phase: Phase::Saturated { quality: 0.0 },
        };
        assert!(state.is_plottable());
        state.s = f64::NAN;
        assert!(!state.is_plottable());
    }
}
