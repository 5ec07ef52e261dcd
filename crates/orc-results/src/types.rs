//! Result data types.
//!
//! Records mirror the solver's outputs in display-friendly units (kPa, °C,
//! kJ/kg) so the JSON artifact reads naturally without a unit key.

use chrono::Utc;
use orc_cycle::{CycleParameters, CycleSolution, StatePoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// RFC 3339 UTC timestamp of the run.
    pub timestamp: String,
    pub parameters: ParameterRecord,
    pub states: Vec<StateRecord>,
    pub balance: BalanceRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub fluid: String,
    pub t_evaporation_c: f64,
    pub t_condensation_c: f64,
    pub pump_eta: f64,
    pub turbine_eta: f64,
    pub net_power_kw: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRecord {
    pub point: u8,
    pub label: String,
    pub p_kpa: f64,
    pub t_c: f64,
    pub h_kj_per_kg: f64,
    pub s_kj_per_kg_k: f64,
    pub phase: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub pump_work_kj_per_kg: f64,
    pub turbine_work_kj_per_kg: f64,
    pub heat_absorbed_kj_per_kg: f64,
    pub heat_rejected_kj_per_kg: f64,
    pub net_work_kj_per_kg: f64,
    pub thermal_efficiency_pct: f64,
    pub mass_flow_kg_s: f64,
    pub net_power_kw: f64,
    pub gross_power_kw: f64,
    pub pump_power_kw: f64,
}

impl RunSummary {
    /// Snapshot one solved cycle, stamped with the current UTC time.
    pub fn from_solution(params: &CycleParameters, solution: &CycleSolution) -> Self {
        let b = &solution.balance;
        Self {
            timestamp: Utc::now().to_rfc3339(),
            parameters: ParameterRecord {
                fluid: params.fluid.display_name().to_string(),
                t_evaporation_c: params.t_evaporation.value - 273.15,
                t_condensation_c: params.t_condensation.value - 273.15,
                pump_eta: params.pump_eta,
                turbine_eta: params.turbine_eta,
                net_power_kw: params.net_power_target.value / 1e3,
            },
            states: solution.states.iter().map(StateRecord::from_state).collect(),
            balance: BalanceRecord {
                pump_work_kj_per_kg: b.pump_work / 1e3,
                turbine_work_kj_per_kg: b.turbine_work / 1e3,
                heat_absorbed_kj_per_kg: b.heat_absorbed / 1e3,
                heat_rejected_kj_per_kg: b.heat_rejected / 1e3,
                net_work_kj_per_kg: b.net_work / 1e3,
                thermal_efficiency_pct: 100.0 * b.thermal_efficiency,
                mass_flow_kg_s: b.mass_flow.value,
                net_power_kw: b.net_power.value / 1e3,
                gross_power_kw: b.gross_power_w() / 1e3,
                pump_power_kw: b.pump_power_w() / 1e3,
            },
        }
    }

    /// Human-readable summary, the same text the CLI prints.
    pub fn to_text(&self) -> String {
        let p = &self.parameters;
        let b = &self.balance;
        let mut out = String::new();
        out.push_str(&format!(
            "Organic Rankine cycle: {} | evap {:.1} degC, cond {:.1} degC, \
             eta_pump {:.2}, eta_turb {:.2}, target {:.1} kW\n\n",
            p.fluid, p.t_evaporation_c, p.t_condensation_c, p.pump_eta, p.turbine_eta,
            p.net_power_kw
        ));
        out.push_str(&format!(
            "{:<5} {:>10} {:>8} {:>10} {:>12}  {}\n",
            "Point", "p [kPa]", "T [degC]", "h [kJ/kg]", "s [kJ/kgK]", "Phase"
        ));
        for s in &self.states {
            out.push_str(&format!(
                "{:<5} {:>10.2} {:>8.2} {:>10.2} {:>12.4}  {}\n",
                s.point, s.p_kpa, s.t_c, s.h_kj_per_kg, s.s_kj_per_kg_k, s.phase
            ));
        }
        out.push('\n');
        out.push_str(&format!("Pump work        {:>10.3} kJ/kg\n", b.pump_work_kj_per_kg));
        out.push_str(&format!("Turbine work     {:>10.3} kJ/kg\n", b.turbine_work_kj_per_kg));
        out.push_str(&format!("Heat absorbed    {:>10.3} kJ/kg\n", b.heat_absorbed_kj_per_kg));
        out.push_str(&format!("Heat rejected    {:>10.3} kJ/kg\n", b.heat_rejected_kj_per_kg));
        out.push_str(&format!("Net work         {:>10.3} kJ/kg\n", b.net_work_kj_per_kg));
        out.push_str(&format!("Thermal eff.     {:>10.2} %\n", b.thermal_efficiency_pct));
        out.push_str(&format!("Mass flow        {:>10.3} kg/s\n", b.mass_flow_kg_s));
        out.push_str(&format!(
            "Power            {:>10.1} kW net ({:.1} kW gross, {:.1} kW pump)\n",
            b.net_power_kw, b.gross_power_kw, b.pump_power_kw
        ));
        out
    }
}

impl StateRecord {
    fn from_state(state: &StatePoint) -> Self {
        Self {
            point: state.id.number(),
            label: state.id.label().to_string(),
            p_kpa: state.p.value / 1e3,
            t_c: state.t.value - 273.15,
            h_kj_per_kg: state.h / 1e3,
            s_kj_per_kg_k: state.s / 1e3,
            phase: state.phase.label().to_string(),
        }
    }
}
