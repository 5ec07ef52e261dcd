//! Property-model trait and shared state records.

use crate::error::{PropertyError, PropertyResult};
use crate::fluid::WorkingFluid;
use orc_core::units::{Pressure, Temperature};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

/// Phase of the working fluid at a resolved state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Liquid below the saturation temperature at its pressure.
    SubcooledLiquid,
    /// Two-phase mixture; `quality` is the vapor mass fraction in [0, 1].
    Saturated { quality: f64 },
    /// Vapor above the dew temperature at its pressure.
    SuperheatedVapor,
}

impl Phase {
    pub fn quality(&self) -> Option<f64> {
        match self {
            Phase::Saturated { quality } => Some(*quality),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::SubcooledLiquid => "subcooled liquid",
            Phase::Saturated { .. } => "saturated mixture",
            Phase::SuperheatedVapor => "superheated vapor",
        }
    }
}

/// Coexistence properties at one saturation temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    /// Saturation temperature [K]
    pub t: Temperature,
    /// Saturation pressure [Pa]
    pub p: Pressure,
    /// Saturated-liquid density [kg/m³]
    pub rho_liq: f64,
    /// Saturated-liquid specific enthalpy [J/kg]
    pub h_liq: SpecEnthalpy,
    /// Saturated-vapor specific enthalpy [J/kg]
    pub h_vap: SpecEnthalpy,
    /// Saturated-liquid specific entropy [J/(kg·K)]
    pub s_liq: SpecEntropy,
    /// Saturated-vapor specific entropy [J/(kg·K)]
    pub s_vap: SpecEntropy,
}

impl SaturationPoint {
    /// Latent heat of vaporization [J/kg].
    pub fn latent(&self) -> f64 {
        self.h_vap - self.h_liq
    }
}

/// A state resolved from an independent property pair ((p, s) or (p, h)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedState {
    /// Temperature [K]
    pub t: Temperature,
    /// Specific enthalpy [J/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [J/(kg·K)]
    pub s: SpecEntropy,
    /// Phase region the pair landed in
    pub phase: Phase,
}

/// Valid domain of a working fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidBounds {
    /// Lowest usable temperature [K]
    pub t_min: Temperature,
    /// Critical temperature [K]
    pub t_crit: Temperature,
    /// Critical pressure [Pa]
    pub p_crit: Pressure,
}

/// Trait for working-fluid property backends.
///
/// Implementations must be thread-safe (Send + Sync). All methods validate
/// inputs against the fluid's domain and reject non-physical results.
pub trait PropertyModel: Send + Sync {
    /// Backend name (for logging and summaries).
    fn name(&self) -> &str;

    /// Valid temperature/pressure domain for the fluid.
    fn bounds(&self, fluid: WorkingFluid) -> FluidBounds;

    /// Coexistence properties at saturation temperature `t`.
    ///
    /// Errors with `OutOfRange` when `t` is at or below the fluid's minimum
    /// temperature, or at or above its critical temperature.
    fn saturation(&self, fluid: WorkingFluid, t: Temperature) -> PropertyResult<SaturationPoint>;

    /// Resolve the state at pressure `p` and specific entropy `s`.
    ///
    /// This is the isentropic projection used for ideal pump and turbine
    /// end states; it lands in the compressed-liquid, two-phase, or
    /// superheated region depending on `s`.
    fn state_ps(&self, fluid: WorkingFluid, p: Pressure, s: SpecEntropy)
        -> PropertyResult<ResolvedState>;

    /// Resolve the state at pressure `p` and specific enthalpy `h`.
    fn state_ph(&self, fluid: WorkingFluid, p: Pressure, h: SpecEnthalpy)
        -> PropertyResult<ResolvedState>;
}

/// Validation helpers shared by property backends.
pub(crate) mod validation {
    use super::*;

    pub fn validate_pressure(p: Pressure) -> PropertyResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_temperature(t: Temperature) -> PropertyResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(PropertyError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_specific(v: f64, what: &'static str) -> PropertyResult<()> {
        if !v.is_finite() {
            return Err(PropertyError::NonPhysical { what });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orc_core::units::{k, pa};

    #[test]
    fn phase_quality_accessor() {
        assert_eq!(Phase::Saturated { quality: 0.4 }.quality(), Some(0.4));
        assert_eq!(Phase::SubcooledLiquid.quality(), None);
        assert_eq!(Phase::SuperheatedVapor.quality(), None);
    }

    #[test]
    fn saturation_point_latent() {
        let sat = SaturationPoint {
            t: k(300.0),
            p: pa(2.0e5),
            rho_liq: 1300.0,
            h_liq: 40.0e3,
            h_vap: 230.0e3,
            s_liq: 150.0,
            s_vap: 780.0,
        };
        assert!((sat.latent() - 190.0e3).abs() < 1e-6);
    }

    #[test]
    fn validation_rejects_nonphysical() {
        use super::validation::*;
        assert!(validate_pressure(pa(-1.0)).is_err());
        assert!(validate_pressure(pa(f64::NAN)).is_err());
        assert!(validate_temperature(k(0.0)).is_err());
        assert!(validate_specific(f64::INFINITY, "enthalpy").is_err());
        assert!(validate_specific(-5.0e3, "enthalpy").is_ok());
    }
}
