//! Working-fluid definitions.

use std::fmt;
use std::str::FromStr;

/// Working fluids suitable for low-temperature binary-cycle plants.
///
/// R245fa is the classic choice for geothermal ORC units; the light
/// hydrocarbons cover the common alternatives at various resource
/// temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingFluid {
    /// Refrigerant R245fa (1,1,1,3,3-pentafluoropropane)
    R245fa,
    /// Isopentane (2-methylbutane)
    Isopentane,
    /// n-Pentane
    NPentane,
    /// n-Butane
    NButane,
    /// Isobutane
    Isobutane,
    /// Refrigerant R134a (1,1,1,2-tetrafluoroethane)
    R134a,
}

/// Constants behind the correlation backend, one set per fluid.
///
/// `cp_liq_a`/`cp_liq_b` define the saturated-liquid heat capacity
/// cp(T) = a + b·T [J/(kg·K)]; `cp_vap` is a representative vapor heat
/// capacity near the dome used for superheat resolution.
#[derive(Debug, Clone, Copy)]
pub struct FluidConstants {
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
    /// Critical temperature [K]
    pub t_crit: f64,
    /// Critical pressure [Pa]
    pub p_crit: f64,
    /// Normal boiling temperature [K]
    pub t_boil: f64,
    /// Latent heat of vaporization at the normal boiling point [J/kg]
    pub latent_boil: f64,
    /// Rackett compressibility for saturated-liquid density
    pub z_rackett: f64,
    /// Liquid cp intercept [J/(kg·K)]
    pub cp_liq_a: f64,
    /// Liquid cp slope [J/(kg·K²)]
    pub cp_liq_b: f64,
    /// Near-dome vapor cp [J/(kg·K)]
    pub cp_vap: f64,
    /// Lowest temperature the correlations are trusted at [K]
    pub t_min: f64,
}

impl WorkingFluid {
    pub const ALL: [WorkingFluid; 6] = [
        WorkingFluid::R245fa,
        WorkingFluid::Isopentane,
        WorkingFluid::NPentane,
        WorkingFluid::NButane,
        WorkingFluid::Isobutane,
        WorkingFluid::R134a,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WorkingFluid::R245fa => "r245fa",
            WorkingFluid::Isopentane => "isopentane",
            WorkingFluid::NPentane => "n-pentane",
            WorkingFluid::NButane => "n-butane",
            WorkingFluid::Isobutane => "isobutane",
            WorkingFluid::R134a => "r134a",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkingFluid::R245fa => "R245fa",
            WorkingFluid::Isopentane => "Isopentane",
            WorkingFluid::NPentane => "n-Pentane",
            WorkingFluid::NButane => "n-Butane",
            WorkingFluid::Isobutane => "Isobutane",
            WorkingFluid::R134a => "R134a",
        }
    }

    pub fn constants(&self) -> FluidConstants {
        match self {
            WorkingFluid::R245fa => FluidConstants {
                molar_mass: 0.134_048,
                t_crit: 427.16,
                p_crit: 3.651e6,
                t_boil: 288.29,
                latent_boil: 196.1e3,
                z_rackett: 0.267,
                cp_liq_a: 428.0,
                cp_liq_b: 3.0,
                cp_vap: 920.0,
                t_min: 200.0,
            },
            WorkingFluid::Isopentane => FluidConstants {
                molar_mass: 0.072_149,
                t_crit: 460.35,
                p_crit: 3.378e6,
                t_boil: 300.98,
                latent_boil: 342.3e3,
                z_rackett: 0.2716,
                cp_liq_a: 492.0,
                cp_liq_b: 6.0,
                cp_vap: 1850.0,
                t_min: 200.0,
            },
            WorkingFluid::NPentane => FluidConstants {
                molar_mass: 0.072_149,
                t_crit: 469.70,
                p_crit: 3.370e6,
                t_boil: 309.21,
                latent_boil: 357.2e3,
                z_rackett: 0.2685,
                cp_liq_a: 532.0,
                cp_liq_b: 6.0,
                cp_vap: 1820.0,
                t_min: 200.0,
            },
            WorkingFluid::NButane => FluidConstants {
                molar_mass: 0.058_122,
                t_crit: 425.12,
                p_crit: 3.796e6,
                t_boil: 272.66,
                latent_boil: 385.7e3,
                z_rackett: 0.2730,
                cp_liq_a: 463.0,
                cp_liq_b: 6.5,
                cp_vap: 1810.0,
                t_min: 180.0,
            },
            WorkingFluid::Isobutane => FluidConstants {
                molar_mass: 0.058_122,
                t_crit: 407.81,
                p_crit: 3.629e6,
                t_boil: 261.40,
                latent_boil: 366.0e3,
                z_rackett: 0.2760,
                cp_liq_a: 450.0,
                cp_liq_b: 6.5,
                cp_vap: 1800.0,
                t_min: 180.0,
            },
            WorkingFluid::R134a => FluidConstants {
                molar_mass: 0.102_032,
                t_crit: 374.21,
                p_crit: 4.059e6,
                t_boil: 247.08,
                latent_boil: 217.0e3,
                z_rackett: 0.2599,
                cp_liq_a: 500.0,
                cp_liq_b: 3.0,
                cp_vap: 900.0,
                t_min: 180.0,
            },
        }
    }
}

impl fmt::Display for WorkingFluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkingFluid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        WorkingFluid::ALL
            .iter()
            .copied()
            .find(|f| f.key() == needle || f.display_name().to_ascii_lowercase() == needle)
            .ok_or_else(|| format!("unknown working fluid '{s}'"))
    }
}
