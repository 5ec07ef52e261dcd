//! T–s and h–s diagram rendering.
//!
//! Both diagrams share the same construction: the saturation dome drawn as a
//! single closed outline (liquid branch rising to the apex, vapor branch
//! falling back down), the cycle path 1→2→3→4→1 on top of it, and numbered
//! markers at the four state points. Output is an SVG file; nothing here
//! mutates the solution.

use crate::error::{RenderError, RenderResult};
use orc_cycle::StatePoint;
use orc_fluids::SaturationPoint;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

const WIDTH: u32 = 900;
const HEIGHT: u32 = 600;
const DOME_COLOR: RGBColor = RGBColor(60, 90, 200);
const CYCLE_COLOR: RGBColor = RGBColor(200, 40, 40);

/// Render the temperature–entropy diagram to `path`.
///
/// Abscissa is specific entropy in kJ/(kg·K), ordinate is temperature in °C.
pub fn render_ts(
    path: &Path,
    states: &[StatePoint; 4],
    dome: &[SaturationPoint],
) -> RenderResult<()> {
    let outline = dome_outline(
        dome,
        |p| (p.s_liq / 1e3, p.t.value - 273.15),
        |p| (p.s_vap / 1e3, p.t.value - 273.15),
    )?;
    let cycle = cycle_loop(states, |s| (s.s / 1e3, s.t.value - 273.15))?;
    draw_diagram(
        path,
        "Temperature-entropy diagram",
        "s [kJ/(kg K)]",
        "T [degC]",
        &outline,
        &cycle,
    )
}

/// Render the enthalpy–entropy diagram to `path`.
///
/// Abscissa is specific entropy in kJ/(kg·K), ordinate is specific enthalpy
/// in kJ/kg.
pub fn render_hs(
    path: &Path,
    states: &[StatePoint; 4],
    dome: &[SaturationPoint],
) -> RenderResult<()> {
    let outline = dome_outline(
        dome,
        |p| (p.s_liq / 1e3, p.h_liq / 1e3),
        |p| (p.s_vap / 1e3, p.h_vap / 1e3),
    )?;
    let cycle = cycle_loop(states, |s| (s.s / 1e3, s.h / 1e3))?;
    draw_diagram(
        path,
        "Enthalpy-entropy diagram",
        "s [kJ/(kg K)]",
        "h [kJ/kg]",
        &outline,
        &cycle,
    )
}

/// Closed dome outline in display coordinates: liquid branch bottom-up, then
/// vapor branch top-down, meeting just below the apex.
fn dome_outline(
    dome: &[SaturationPoint],
    liq: impl Fn(&SaturationPoint) -> (f64, f64),
    vap: impl Fn(&SaturationPoint) -> (f64, f64),
) -> RenderResult<Vec<(f64, f64)>> {
    if dome.len() < 2 {
        return Err(RenderError::InvalidState {
            what: "saturation dome needs at least two points",
        });
    }
    let mut outline = Vec::with_capacity(2 * dome.len());
    outline.extend(dome.iter().map(&liq));
    outline.extend(dome.iter().rev().map(&vap));
    check_finite_outline(&outline)?;
    Ok(outline)
}

fn check_finite_outline(outline: &[(f64, f64)]) -> RenderResult<()> {
    if outline.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(RenderError::InvalidState {
            what: "saturation dome contains a non-finite coordinate",
        });
    }
    Ok(())
}

/// Cycle path 1→2→3→4→1 in display coordinates.
fn cycle_loop(
    states: &[StatePoint; 4],
    project: impl Fn(&StatePoint) -> (f64, f64),
) -> RenderResult<Vec<(f64, f64)>> {
    for state in states {
        if !state.is_plottable() {
            return Err(RenderError::InvalidState {
                what: "cycle state carries a non-finite coordinate",
            });
        }
    }
    let mut path: Vec<(f64, f64)> = states.iter().map(&project).collect();
    if path.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(RenderError::InvalidState {
            what: "cycle state projects to a non-finite coordinate",
        });
    }
    path.push(path[0]);
    Ok(path)
}

fn backend_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend {
        message: err.to_string(),
    }
}

fn draw_diagram(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    dome: &[(f64, f64)],
    cycle: &[(f64, f64)],
) -> RenderResult<()> {
    let (x_range, y_range) = padded_ranges(dome.iter().chain(cycle.iter()))?;

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_range)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(backend_err)?;

    chart
        .draw_series(LineSeries::new(dome.iter().copied(), &DOME_COLOR))
        .map_err(backend_err)?
        .label("saturation dome")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], DOME_COLOR));

    chart
        .draw_series(LineSeries::new(
            cycle.iter().copied(),
            CYCLE_COLOR.stroke_width(2),
        ))
        .map_err(backend_err)?
        .label("cycle 1-2-3-4")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], CYCLE_COLOR));

    // Numbered markers on the four distinct vertices (the fifth closes the
    // loop and repeats the first).
    chart
        .draw_series(cycle.iter().take(4).enumerate().map(|(i, &(x, y))| {
            EmptyElement::at((x, y))
                + Circle::new((0, 0), 4, CYCLE_COLOR.filled())
                + Text::new(format!("{}", i + 1), (8, -14), ("sans-serif", 16))
        }))
        .map_err(backend_err)?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    debug!(file = %path.display(), "diagram written");
    Ok(())
}

/// Axis ranges covering every point with a small margin on each side.
fn padded_ranges<'a>(
    points: impl Iterator<Item = &'a (f64, f64)>,
) -> RenderResult<(std::ops::Range<f64>, std::ops::Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
        return Err(RenderError::InvalidState {
            what: "no renderable points",
        });
    }
    let x_pad = 0.05 * (x_max - x_min).max(1e-6);
    let y_pad = 0.05 * (y_max - y_min).max(1e-6);
    Ok((
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orc_core::units::{k, pa};
    use orc_cycle::PointId;
    use orc_fluids::Phase;

    fn dummy_state(id: PointId, s: f64, t: f64, h: f64) -> StatePoint {
        StatePoint {
            id,
            p: pa(2.0e5),
            t: k(t),
            h,
            s,
            phase: Phase::Saturated { quality: 0.0 },
        }
    }

    fn dummy_states() -> [StatePoint; 4] {
        [
            dummy_state(PointId::PumpInlet, 150.0, 308.0, 45.0e3),
            dummy_state(PointId::EvaporatorInlet, 151.0, 309.0, 48.0e3),
            dummy_state(PointId::TurbineInlet, 760.0, 423.0, 272.0e3),
            dummy_state(PointId::CondenserInlet, 770.0, 310.0, 237.0e3),
        ]
    }

    #[test]
    fn cycle_loop_closes_on_itself() {
        let states = dummy_states();
        let path = cycle_loop(&states, |s| (s.s, s.t.value)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], path[4]);
    }

    #[test]
    fn non_finite_state_is_rejected_before_drawing() {
        let mut states = dummy_states();
        states[2].s = f64::NAN;
        let result = cycle_loop(&states, |s| (s.s, s.t.value));
        assert!(matches!(result, Err(RenderError::InvalidState { .. })));
    }

    #[test]
    fn degenerate_dome_is_rejected() {
        let result = dome_outline(
            &[],
            |p| (p.s_liq, p.t.value),
            |p| (p.s_vap, p.t.value),
        );
        assert!(matches!(result, Err(RenderError::InvalidState { .. })));
    }

    #[test]
    fn padded_ranges_cover_all_points() {
        let points = [(1.0, 10.0), (3.0, 30.0), (2.0, 20.0)];
        let (xr, yr) = padded_ranges(points.iter()).unwrap();
        assert!(xr.start < 1.0 && xr.end > 3.0);
        assert!(yr.start < 10.0 && yr.end > 30.0);
    }
}
