//! Integration test: constant-current battery discharge.
//!
//! Reference scenario: 2 Ah pack, 0.05 ohm internal resistance, 1 A load,
//! OCV fit v_oc = 1.2 * soc + 2.5, 1 s steps. At 1 A the pack drains in
//! two hours; the four-hour horizon pins the floored endpoint.

use ds_core::state::State;
use ds_core::units::{ampere, ampere_hour, ohm};
use ds_models::{BatteryDischarge, Model};
use ds_sim::{SimOptions, TimeGrid, run};

fn reference_model() -> Model {
    BatteryDischarge::new(ampere_hour(2.0), ohm(0.05), ampere(1.0), 1.2, 2.5)
        .unwrap()
        .into()
}

#[test]
fn battery_end_to_end() {
    let model = reference_model();
    let grid = TimeGrid::uniform(0.0, 1.0, 14_400).unwrap();

    let trajectory = run(
        &model,
        &State::new(vec![1.0]),
        &grid,
        None,
        &SimOptions::default(),
    )
    .expect("Simulation failed");

    assert_eq!(trajectory.len(), 14_401);

    // After one hour the pack is at half charge (the 1 A load removes
    // 1 Ah of the 2 Ah capacity).
    let soc_1h = trajectory.states()[3600][0];
    assert!(
        (soc_1h - 0.5).abs() < 1e-9,
        "soc after one hour = {soc_1h}"
    );

    // Drained and floored at the end of the horizon.
    let soc_final = trajectory.final_state().unwrap()[0];
    assert_eq!(soc_final, 0.0);

    let v_oc = trajectory.derived("v_oc").unwrap();
    let v_bat = trajectory.derived("v_bat").unwrap();
    assert_eq!(v_oc[v_oc.len() - 1], 2.5);
    assert!((v_bat[v_bat.len() - 1] - 2.45).abs() < 1e-12);
}

#[test]
fn soc_is_monotone_and_bounded() {
    let model = reference_model();
    let grid = TimeGrid::uniform(0.0, 5.0, 2000).unwrap();

    let trajectory = run(
        &model,
        &State::new(vec![1.0]),
        &grid,
        None,
        &SimOptions::default(),
    )
    .expect("Simulation failed");

    let mut previous = f64::INFINITY;
    for (k, state) in trajectory.states().iter().enumerate() {
        let soc = state[0];
        assert!(soc <= previous, "soc increased at step {k}");
        assert!((0.0..=1.0).contains(&soc), "soc out of range at step {k}");
        previous = soc;
    }
}

#[test]
fn terminal_voltage_tracks_ocv_under_load() {
    let model = reference_model();
    let grid = TimeGrid::uniform(0.0, 60.0, 60).unwrap();

    let trajectory = run(
        &model,
        &State::new(vec![1.0]),
        &grid,
        None,
        &SimOptions::default(),
    )
    .expect("Simulation failed");

    // v_bat sits exactly I * R_int below v_oc at every point.
    let v_oc = trajectory.derived("v_oc").unwrap();
    let v_bat = trajectory.derived("v_bat").unwrap();
    for (a, b) in v_oc.iter().zip(v_bat) {
        assert!((a - b - 0.05).abs() < 1e-12);
    }
}
