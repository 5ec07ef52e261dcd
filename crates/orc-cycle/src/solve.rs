//! The four-state cycle solver.

use crate::balance::EnergyBalance;
use crate::error::{CycleError, CycleResult};
use crate::params::CycleParameters;
use crate::state::{PointId, StatePoint};
use orc_core::units::{kgps, watts};
use orc_fluids::{Phase, PropertyModel};
use tracing::debug;

/// Everything one cycle evaluation produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSolution {
    /// The four state points, in process order 1→4.
    pub states: [StatePoint; 4],
    pub balance: EnergyBalance,
}

impl CycleSolution {
    pub fn state(&self, id: PointId) -> &StatePoint {
        &self.states[(id.number() - 1) as usize]
    }
}

/// Solve the ideal cycle with isentropic-efficiency corrections.
///
/// Pure function of the parameters and the property model's responses;
/// identical inputs give identical outputs.
///
/// # Errors
///
/// `InvalidParameters` before any property query for bad input
/// combinations; `Property` when a saturation temperature falls outside the
/// fluid's domain or a lookup fails to resolve; `NonPhysicalResult` when the
/// converged cycle extracts no net work.
pub fn solve(model: &dyn PropertyModel, params: &CycleParameters) -> CycleResult<CycleSolution> {
    params.validate()?;

    let fluid = params.fluid;
    let cond = model.saturation(fluid, params.t_condensation)?;
    let evap = model.saturation(fluid, params.t_evaporation)?;

    // State 1: saturated liquid leaving the condenser.
    let state1 = StatePoint {
        id: PointId::PumpInlet,
        p: cond.p,
        t: cond.t,
        h: cond.h_liq,
        s: cond.s_liq,
        phase: Phase::Saturated { quality: 0.0 },
    };

    // State 2: compression to evaporator pressure. The isentropic rise is
    // the ideal work; the efficiency inflates the actual work input.
    let ideal_discharge = model.state_ps(fluid, evap.p, state1.s)?;
    let ideal_rise = (ideal_discharge.h - state1.h).max(0.0);
    let pump_work = ideal_rise / params.pump_eta;
    let h2 = state1.h + pump_work;
    let resolved2 = model.state_ph(fluid, evap.p, h2)?;
    let state2 = StatePoint {
        id: PointId::EvaporatorInlet,
        p: evap.p,
        t: resolved2.t,
        h: h2,
        s: resolved2.s,
        phase: resolved2.phase,
    };

    // State 3: saturated vapor at evaporation temperature (no superheat).
    let state3 = StatePoint {
        id: PointId::TurbineInlet,
        p: evap.p,
        t: evap.t,
        h: evap.h_vap,
        s: evap.s_vap,
        phase: Phase::Saturated { quality: 1.0 },
    };

    // State 4: expansion to condenser pressure. The isentropic drop is the
    // ideal work; the efficiency shrinks the actual output.
    let ideal_exhaust = model.state_ps(fluid, cond.p, state3.s)?;
    let ideal_drop = (state3.h - ideal_exhaust.h).max(0.0);
    let turbine_work = params.turbine_eta * ideal_drop;
    let h4 = state3.h - turbine_work;
    let resolved4 = model.state_ph(fluid, cond.p, h4)?;
    let state4 = StatePoint {
        id: PointId::CondenserInlet,
        p: cond.p,
        t: resolved4.t,
        h: h4,
        s: resolved4.s,
        phase: resolved4.phase,
    };

    let states = [state1, state2, state3, state4];
    for state in &states {
        debug!(
            point = %state.id,
            p_pa = state.p.value,
            t_k = state.t.value,
            h_j_per_kg = state.h,
            s_j_per_kg_k = state.s,
            phase = state.phase.label(),
            "resolved cycle state"
        );
    }

    let heat_absorbed = state3.h - state2.h;
    let heat_rejected = state4.h - state1.h;
    let net_work = turbine_work - pump_work;

    if !(net_work > 0.0) {
        return Err(CycleError::NonPhysicalResult {
            what: "cycle extracts no net work at these boundary conditions",
        });
    }
    if !(heat_absorbed > 0.0) {
        return Err(CycleError::NonPhysicalResult {
            what: "evaporator absorbs no heat at these boundary conditions",
        });
    }

    let thermal_efficiency = net_work / heat_absorbed;
    let mass_flow = kgps(params.net_power_target.value / net_work);

    debug!(
        thermal_efficiency,
        net_work_j_per_kg = net_work,
        mass_flow_kg_s = mass_flow.value,
        "energy balance closed"
    );

    Ok(CycleSolution {
        states,
        balance: EnergyBalance {
            pump_work,
            turbine_work,
            heat_absorbed,
            heat_rejected,
            net_work,
            thermal_efficiency,
            mass_flow,
            net_power: watts(params.net_power_target.value),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orc_fluids::CorrelationModel;

    #[test]
    fn default_design_point_solves() {
        let model = CorrelationModel::new();
        let solution = solve(&model, &CycleParameters::default()).unwrap();

        assert_eq!(solution.states.len(), 4);
        for (i, state) in solution.states.iter().enumerate() {
            assert_eq!(state.id.number() as usize, i + 1);
            assert!(state.is_plottable());
        }
    }

    #[test]
    fn isobaric_pressure_pairs_are_exact() {
        let model = CorrelationModel::new();
        let solution = solve(&model, &CycleParameters::default()).unwrap();

        let [s1, s2, s3, s4] = solution.states;
        assert_eq!(s2.p.value, s3.p.value);
        assert_eq!(s4.p.value, s1.p.value);
        assert!(s2.p.value > s1.p.value);
    }

    #[test]
    fn boundary_states_sit_on_the_dome() {
        let model = CorrelationModel::new();
        let solution = solve(&model, &CycleParameters::default()).unwrap();

        assert_eq!(solution.state(PointId::PumpInlet).phase.quality(), Some(0.0));
        assert_eq!(
            solution.state(PointId::TurbineInlet).phase.quality(),
            Some(1.0)
        );
        assert_eq!(
            solution.state(PointId::EvaporatorInlet).phase,
            Phase::SubcooledLiquid
        );
    }

    #[test]
    fn pump_dissipation_raises_discharge_entropy() {
        let model = CorrelationModel::new();
        let solution = solve(&model, &CycleParameters::default()).unwrap();

        let s1 = solution.state(PointId::PumpInlet);
        let s2 = solution.state(PointId::EvaporatorInlet);
        assert!(s2.s >= s1.s);
        assert!(s2.h > s1.h);
    }

    #[test]
    fn perfect_pump_is_isentropic() {
        let model = CorrelationModel::new();
        let params = CycleParameters {
            pump_eta: 1.0,
            ..Default::default()
        };
        let solution = solve(&model, &params).unwrap();

        let s1 = solution.state(PointId::PumpInlet);
        let s2 = solution.state(PointId::EvaporatorInlet);
        assert!((s2.s - s1.s).abs() < 1e-6);
    }

    #[test]
    fn turbine_exhaust_rejects_into_condenser() {
        let model = CorrelationModel::new();
        let solution = solve(&model, &CycleParameters::default()).unwrap();

        let s3 = solution.state(PointId::TurbineInlet);
        let s4 = solution.state(PointId::CondenserInlet);
        assert!(s4.h < s3.h);
        assert!(solution.balance.heat_rejected > 0.0);
    }
}
