//! Correlation-based property backend.
//!
//! Self-contained equation set, consistent by construction:
//!
//! - Saturation pressure: two-point Clausius–Clapeyron fit anchored at the
//!   normal boiling point and the critical point,
//!   `ln(p/p_crit) = k·(1 − T_crit/T)`. Closed-form inverse for T_sat(p).
//! - Latent heat: Watson scaling from the boiling-point value,
//!   `L(T) = L_b·((1 − T_r)/(1 − T_rb))^0.38`.
//! - Saturated liquid: cp(T) = a + b·T integrated exactly for h and s from
//!   a 273.15 K reference; Rackett equation for density.
//! - Vapor branch closes the dome through `s_vap = s_liq + L/T` and
//!   `h_vap = h_liq + L`; near-dome superheat uses a constant vapor cp so
//!   that `dh = cp_v·dT` and `ds = cp_v·dT/T` along the isobar.
//! - Compressed liquid follows the incompressible isentrope `dh = v·dp`.

use crate::error::{PropertyError, PropertyResult};
use crate::fluid::{FluidConstants, WorkingFluid};
use crate::model::{
    validation, FluidBounds, Phase, PropertyModel, ResolvedState, SaturationPoint, SpecEnthalpy,
    SpecEntropy,
};
use orc_core::constants::{P_ATM_PA, R_UNIVERSAL};
use orc_core::numeric::{bisect, Tolerances};
use orc_core::units::{k, Pressure, Temperature};

/// Enthalpy/entropy reference temperature [K]: h_liq = s_liq = 0 here.
const T_REF: f64 = 273.15;

/// Watson exponent for latent-heat scaling.
const WATSON_N: f64 = 0.38;

const SOLVE_TOL: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-12,
};
const SOLVE_MAX_ITER: usize = 200;

/// The built-in correlation property backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationModel;

impl CorrelationModel {
    pub fn new() -> Self {
        Self
    }

    /// Clausius–Clapeyron slope fitted through (T_boil, 1 atm) and the
    /// critical point.
    fn k_cc(c: &FluidConstants) -> f64 {
        (P_ATM_PA / c.p_crit).ln() / (1.0 - c.t_crit / c.t_boil)
    }

    fn p_sat(c: &FluidConstants, t_k: f64) -> f64 {
        c.p_crit * (Self::k_cc(c) * (1.0 - c.t_crit / t_k)).exp()
    }

    /// Closed-form inverse of `p_sat`.
    fn t_sat(c: &FluidConstants, p_pa: f64) -> PropertyResult<f64> {
        if !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        if p_pa >= c.p_crit {
            return Err(PropertyError::OutOfRange {
                what: "pressure at or above critical point",
            });
        }
        let t = c.t_crit / (1.0 - (p_pa / c.p_crit).ln() / Self::k_cc(c));
        if t <= c.t_min {
            return Err(PropertyError::OutOfRange {
                what: "saturation pressure below fluid domain",
            });
        }
        Ok(t)
    }

    fn latent(c: &FluidConstants, t_k: f64) -> f64 {
        let tau = 1.0 - t_k / c.t_crit;
        let tau_b = 1.0 - c.t_boil / c.t_crit;
        c.latent_boil * (tau / tau_b).powf(WATSON_N)
    }

    fn cp_liq(c: &FluidConstants, t_k: f64) -> f64 {
        c.cp_liq_a + c.cp_liq_b * t_k
    }

    /// Saturated-liquid enthalpy from the exact integral of cp(T).
    fn h_liq(c: &FluidConstants, t_k: f64) -> f64 {
        c.cp_liq_a * (t_k - T_REF) + 0.5 * c.cp_liq_b * (t_k * t_k - T_REF * T_REF)
    }

    /// Saturated-liquid entropy from the exact integral of cp(T)/T.
    fn s_liq(c: &FluidConstants, t_k: f64) -> f64 {
        c.cp_liq_a * (t_k / T_REF).ln() + c.cp_liq_b * (t_k - T_REF)
    }

    /// Rackett saturated-liquid density.
    fn rho_liq(c: &FluidConstants, t_k: f64) -> f64 {
        let tau = 1.0 - t_k / c.t_crit;
        let exponent = 1.0 + tau.powf(2.0 / 7.0);
        let v_molar = (R_UNIVERSAL * c.t_crit / c.p_crit) * c.z_rackett.powf(exponent);
        c.molar_mass / v_molar
    }

    fn check_domain(c: &FluidConstants, t_k: f64) -> PropertyResult<()> {
        if t_k <= c.t_min || t_k >= c.t_crit {
            return Err(PropertyError::OutOfRange {
                what: "saturation temperature outside fluid domain",
            });
        }
        Ok(())
    }

    fn saturation_raw(c: &FluidConstants, t_k: f64) -> PropertyResult<SaturationPoint> {
        Self::check_domain(c, t_k)?;

        let p = Self::p_sat(c, t_k);
        if !p.is_finite() || p <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "saturation pressure",
            });
        }

        let latent = Self::latent(c, t_k);
        let h_liq = Self::h_liq(c, t_k);
        let s_liq = Self::s_liq(c, t_k);

        Ok(SaturationPoint {
            t: k(t_k),
            p: orc_core::units::pa(p),
            rho_liq: Self::rho_liq(c, t_k),
            h_liq,
            h_vap: h_liq + latent,
            s_liq,
            s_vap: s_liq + latent / t_k,
        })
    }

    /// Invert `s_liq(T) = s` over the liquid branch.
    fn t_from_s_liq(c: &FluidConstants, s: SpecEntropy, t_hi: f64) -> PropertyResult<f64> {
        if s < Self::s_liq(c, c.t_min) {
            return Err(PropertyError::OutOfRange {
                what: "entropy below liquid branch of fluid domain",
            });
        }
        let t = bisect(
            |t| Self::s_liq(c, t) - s,
            c.t_min,
            t_hi,
            SOLVE_TOL,
            SOLVE_MAX_ITER,
            "liquid temperature from entropy",
        )?;
        Ok(t)
    }

    /// Invert `h_liq(T) + (p − p_sat(T))/rho_liq(T) = h` over the liquid
    /// branch (compressed-liquid enthalpy at pressure p).
    fn t_from_h_compressed(
        c: &FluidConstants,
        p_pa: f64,
        h: SpecEnthalpy,
        t_hi: f64,
    ) -> PropertyResult<f64> {
        let g = |t: f64| Self::h_liq(c, t) + (p_pa - Self::p_sat(c, t)) / Self::rho_liq(c, t) - h;
        if g(c.t_min) > 0.0 {
            return Err(PropertyError::OutOfRange {
                what: "enthalpy below liquid branch of fluid domain",
            });
        }
        let t = bisect(
            g,
            c.t_min,
            t_hi,
            SOLVE_TOL,
            SOLVE_MAX_ITER,
            "liquid temperature from enthalpy",
        )?;
        Ok(t)
    }
}

impl PropertyModel for CorrelationModel {
    fn name(&self) -> &str {
        "correlation"
    }

    fn bounds(&self, fluid: WorkingFluid) -> FluidBounds {
        let c = fluid.constants();
        FluidBounds {
            t_min: k(c.t_min),
            t_crit: k(c.t_crit),
            p_crit: orc_core::units::pa(c.p_crit),
        }
    }

    fn saturation(&self, fluid: WorkingFluid, t: Temperature) -> PropertyResult<SaturationPoint> {
        validation::validate_temperature(t)?;
        Self::saturation_raw(&fluid.constants(), t.value)
    }

    fn state_ps(
        &self,
        fluid: WorkingFluid,
        p: Pressure,
        s: SpecEntropy,
    ) -> PropertyResult<ResolvedState> {
        validation::validate_pressure(p)?;
        validation::validate_specific(s, "entropy")?;

        let c = fluid.constants();
        let t_d = Self::t_sat(&c, p.value)?;
        let sat = Self::saturation_raw(&c, t_d)?;

        if s < sat.s_liq {
            // Compressed liquid: entropy fixes the temperature, pressure
            // adds the incompressible dh = v·dp term.
            let t_l = Self::t_from_s_liq(&c, s, t_d)?;
            let h = Self::h_liq(&c, t_l) + (p.value - Self::p_sat(&c, t_l)) / Self::rho_liq(&c, t_l);
            Ok(ResolvedState {
                t: k(t_l),
                h,
                s,
                phase: Phase::SubcooledLiquid,
            })
        } else if s <= sat.s_vap {
            let quality = (s - sat.s_liq) / (sat.s_vap - sat.s_liq);
            Ok(ResolvedState {
                t: sat.t,
                h: sat.h_liq + quality * sat.latent(),
                s,
                phase: Phase::Saturated { quality },
            })
        } else {
            // Near-dome superheat along the isobar with constant vapor cp.
            let t = t_d * ((s - sat.s_vap) / c.cp_vap).exp();
            Ok(ResolvedState {
                t: k(t),
                h: sat.h_vap + c.cp_vap * (t - t_d),
                s,
                phase: Phase::SuperheatedVapor,
            })
        }
    }

    fn state_ph(
        &self,
        fluid: WorkingFluid,
        p: Pressure,
        h: SpecEnthalpy,
    ) -> PropertyResult<ResolvedState> {
        validation::validate_pressure(p)?;
        validation::validate_specific(h, "enthalpy")?;

        let c = fluid.constants();
        let t_d = Self::t_sat(&c, p.value)?;
        let sat = Self::saturation_raw(&c, t_d)?;
        let h_liq_at_p = sat.h_liq + (p.value - sat.p.value) / sat.rho_liq;

        if h < h_liq_at_p {
            let t_l = Self::t_from_h_compressed(&c, p.value, h, t_d)?;
            Ok(ResolvedState {
                t: k(t_l),
                h,
                s: Self::s_liq(&c, t_l),
                phase: Phase::SubcooledLiquid,
            })
        } else if h <= sat.h_vap {
            let quality = (h - sat.h_liq) / sat.latent();
            Ok(ResolvedState {
                t: sat.t,
                h,
                s: sat.s_liq + quality * (sat.s_vap - sat.s_liq),
                phase: Phase::Saturated {
                    quality: quality.clamp(0.0, 1.0),
                },
            })
        } else {
            let t = t_d + (h - sat.h_vap) / c.cp_vap;
            Ok(ResolvedState {
                t: k(t),
                h,
                s: sat.s_vap + c.cp_vap * (t / t_d).ln(),
                phase: Phase::SuperheatedVapor,
            })
        }
    }
}
