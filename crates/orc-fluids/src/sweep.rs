//! Saturation dome sampling.
//!
//! Generates the densely sampled liquid/vapor boundary the diagram renderer
//! overlays the cycle on. Points are spaced linearly in temperature from a
//! caller-provided floor up to just below the critical point, where the two
//! branches meet.

use crate::error::{PropertyError, PropertyResult};
use crate::fluid::WorkingFluid;
use crate::model::{PropertyModel, SaturationPoint};
use orc_core::units::{k, Temperature};

/// Fraction of the critical temperature the sweep stops at; the dome apex
/// itself is a removable singularity of the correlations.
const T_CEILING_FRACTION: f64 = 0.999;

/// Sample the saturation dome from `t_floor` up to just below the critical
/// point.
///
/// `t_floor` is clamped into the fluid's valid domain. Requires at least two
/// points; the last point always lands exactly on the sweep ceiling.
pub fn saturation_dome(
    model: &dyn PropertyModel,
    fluid: WorkingFluid,
    t_floor: Temperature,
    num_points: usize,
) -> PropertyResult<Vec<SaturationPoint>> {
    if num_points < 2 {
        return Err(PropertyError::InvalidArg {
            what: "dome sweep needs at least 2 points",
        });
    }

    let bounds = model.bounds(fluid);
    let t_hi = bounds.t_crit.value * T_CEILING_FRACTION;
    let t_lo = t_floor.value.max(bounds.t_min.value + 1.0).min(t_hi - 1.0);

    let delta = (t_hi - t_lo) / (num_points - 1) as f64;
    let mut points = Vec::with_capacity(num_points);
    for i in 0..num_points {
        // Ensure exact endpoint
        let t = if i == num_points - 1 {
            t_hi
        } else {
            t_lo + i as f64 * delta
        };
        points.push(model.saturation(fluid, k(t))?);
    }

    Ok(points)
}
