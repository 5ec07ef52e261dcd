//! End-to-end cycle scenarios against the correlation property backend.

use orc_core::units::{celsius, kilowatts};
use orc_cycle::{solve, CycleError, CycleParameters, PointId};
use orc_fluids::{CorrelationModel, PropertyError, WorkingFluid};
use proptest::prelude::*;

#[test]
fn geothermal_design_point_lands_in_the_expected_band() {
    let model = CorrelationModel::new();
    let solution = solve(&model, &CycleParameters::default()).unwrap();

    let eta = solution.balance.thermal_efficiency;
    assert!(
        eta > 0.05 && eta < 0.15,
        "thermal efficiency {eta} outside the plausible band for a 150/35 degC binary plant"
    );

    let mdot = solution.balance.mass_flow.value;
    assert!(mdot > 0.0 && mdot.is_finite(), "mass flow {mdot}");

    // 100 kW at ~32 kJ/kg net work means a flow of a few kg/s.
    assert!(mdot > 1.0 && mdot < 10.0, "mass flow {mdot} implausible");

    let [s1, s2, s3, s4] = solution.states;
    assert_eq!(s2.p.value, s3.p.value, "evaporator side must be isobaric");
    assert_eq!(s4.p.value, s1.p.value, "condenser side must be isobaric");
}

#[test]
fn balance_identities_hold_at_the_design_point() {
    let model = CorrelationModel::new();
    let b = solve(&model, &CycleParameters::default()).unwrap().balance;

    assert!((b.net_work - (b.turbine_work - b.pump_work)).abs() < 1e-9);
    // First law around the loop: q_in - q_out == w_net.
    assert!((b.heat_absorbed - b.heat_rejected - b.net_work).abs() < 1e-6);
    assert!((b.thermal_efficiency - b.net_work / b.heat_absorbed).abs() < 1e-12);
    assert!(
        (b.mass_flow.value * b.net_work - b.net_power.value).abs() < 1e-6,
        "sized mass flow must reproduce the power target"
    );
}

#[test]
fn equal_temperatures_are_invalid_parameters() {
    let model = CorrelationModel::new();
    let params = CycleParameters {
        t_evaporation: celsius(90.0),
        t_condensation: celsius(90.0),
        ..Default::default()
    };
    assert!(matches!(
        solve(&model, &params),
        Err(CycleError::InvalidParameters { .. })
    ));
}

#[test]
fn inverted_temperatures_are_invalid_parameters() {
    let model = CorrelationModel::new();
    let params = CycleParameters {
        t_evaporation: celsius(35.0),
        t_condensation: celsius(150.0),
        ..Default::default()
    };
    assert!(matches!(
        solve(&model, &params),
        Err(CycleError::InvalidParameters { .. })
    ));
}

#[test]
fn efficiency_grows_with_evaporation_temperature() {
    // Isopentane's critical point sits far enough above this grid that the
    // Carnot trend dominates over the shrinking latent heat.
    let model = CorrelationModel::new();
    let mut previous = 0.0;
    for t_evap_c in [90.0, 105.0, 120.0, 135.0, 150.0] {
        let params = CycleParameters {
            fluid: WorkingFluid::Isopentane,
            t_evaporation: celsius(t_evap_c),
            t_condensation: celsius(35.0),
            ..Default::default()
        };
        let eta = solve(&model, &params).unwrap().balance.thermal_efficiency;
        assert!(
            eta > previous,
            "eta {eta} at {t_evap_c} degC did not improve on {previous}"
        );
        previous = eta;
    }
}

#[test]
fn solver_is_deterministic() {
    let model = CorrelationModel::new();
    let params = CycleParameters::default();
    let first = solve(&model, &params).unwrap();
    let second = solve(&model, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn out_of_domain_evaporation_is_a_property_error() {
    // Isobutane's critical temperature is ~134.7 degC.
    let model = CorrelationModel::new();
    let params = CycleParameters {
        fluid: WorkingFluid::Isobutane,
        t_evaporation: celsius(150.0),
        ..Default::default()
    };
    match solve(&model, &params) {
        Err(CycleError::Property(PropertyError::OutOfRange { .. })) => {}
        other => panic!("expected an out-of-range property error, got {other:?}"),
    }
}

#[test]
fn mass_flow_scales_linearly_with_power_target() {
    let model = CorrelationModel::new();
    let base = solve(&model, &CycleParameters::default()).unwrap();
    let doubled = solve(
        &model,
        &CycleParameters {
            net_power_target: kilowatts(200.0),
            ..Default::default()
        },
    )
    .unwrap();

    assert!(
        (doubled.balance.mass_flow.value - 2.0 * base.balance.mass_flow.value).abs() < 1e-9,
        "doubling the target must double the flow"
    );
    // Specific quantities do not depend on the target at all.
    assert_eq!(
        base.balance.thermal_efficiency,
        doubled.balance.thermal_efficiency
    );
    assert_eq!(base.state(PointId::TurbineInlet), doubled.state(PointId::TurbineInlet));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Over a broad, physically sensible input box the solver either refuses
    /// cleanly or returns a balance with the sign structure of a heat engine.
    #[test]
    fn balance_signs_and_bounds(
        t_cond_c in 20.0f64..45.0,
        dt_spread in 30.0f64..105.0,
        pump_eta in 0.5f64..1.0,
        turbine_eta in 0.5f64..1.0,
    ) {
        let model = CorrelationModel::new();
        let params = CycleParameters {
            fluid: WorkingFluid::R245fa,
            t_evaporation: celsius(t_cond_c + dt_spread),
            t_condensation: celsius(t_cond_c),
            pump_eta,
            turbine_eta,
            ..Default::default()
        };

        let b = solve(&model, &params).unwrap().balance;
        prop_assert!(b.thermal_efficiency > 0.0 && b.thermal_efficiency < 1.0);
        prop_assert!(b.pump_work >= 0.0);
        prop_assert!(b.turbine_work >= 0.0);
        prop_assert!(b.heat_absorbed > 0.0);
        prop_assert!(b.heat_rejected > 0.0);
        prop_assert!((b.net_work - (b.turbine_work - b.pump_work)).abs() < 1e-9);
        prop_assert!(b.mass_flow.value > 0.0);
    }
}
