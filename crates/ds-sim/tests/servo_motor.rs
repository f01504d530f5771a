//! Integration test: servo motor step response.
//!
//! With both eigenvalues real and negative the response is overdamped:
//! angular velocity climbs monotonically to the analytic steady state and
//! the shaft angle grows without bound.

use ds_core::state::State;
use ds_models::{Model, ServoMotor};
use ds_sim::{IntegratorType, SimError, SimOptions, TimeGrid, run};

fn reference_servo() -> ServoMotor {
    ServoMotor::new(0.01, 0.1, 0.01, 0.01, 1.0, 0.5, 5.0).unwrap()
}

#[test]
fn step_response_approaches_steady_state() {
    let servo = reference_servo();
    let omega_ss = servo.steady_state_omega();
    let model: Model = servo.into();

    // 2 s horizon ~ 4 times the slowest time constant
    let grid = TimeGrid::uniform(0.0, 0.002, 1000).unwrap();
    let trajectory = run(
        &model,
        &State::zeros(3),
        &grid,
        None,
        &SimOptions::default(),
    )
    .expect("Simulation failed");

    let omega_final = trajectory.final_state().unwrap()[1];
    assert!(
        (omega_final - omega_ss).abs() < 0.05 * omega_ss,
        "omega_final = {omega_final}, omega_ss = {omega_ss}"
    );

    // Overdamped: omega never overshoots or oscillates.
    let states = trajectory.states();
    for pair in states.windows(2) {
        assert!(pair[1][1] >= pair[0][1] - 1e-9, "omega not monotone");
        assert!(pair[1][1] <= omega_ss * 1.001, "omega overshoot");
    }

    // Shaft angle keeps growing once the motor spins.
    let theta_mid = states[states.len() / 2][0];
    let theta_final = states[states.len() - 1][0];
    assert!(theta_final > theta_mid);
    assert!(theta_mid > 0.0);
}

#[test]
fn armature_current_settles_to_load_value() {
    let servo = reference_servo();
    let omega_ss = servo.steady_state_omega();
    // At steady state the armature carries (V - K_e * omega_ss) / R.
    let i_ss = (servo.step_voltage_v - servo.emf_constant_v_s_per_rad * omega_ss)
        / servo.resistance_ohm;
    let model: Model = servo.into();

    let grid = TimeGrid::uniform(0.0, 0.002, 1000).unwrap();
    let trajectory = run(
        &model,
        &State::zeros(3),
        &grid,
        None,
        &SimOptions::default(),
    )
    .expect("Simulation failed");

    let i_final = trajectory.final_state().unwrap()[2];
    assert!(
        (i_final - i_ss).abs() < 0.05 * i_ss,
        "i_final = {i_final}, i_ss = {i_ss}"
    );
}

#[test]
fn euler_on_stiff_grid_reports_divergence() {
    // The fastest mode has a ~0.1 s time constant; 1 s Euler steps are
    // unstable and the run must abort instead of returning garbage.
    let model: Model = reference_servo().into();
    let grid = TimeGrid::uniform(0.0, 1.0, 2000).unwrap();

    let err = run(
        &model,
        &State::zeros(3),
        &grid,
        None,
        &SimOptions {
            integrator: IntegratorType::ForwardEuler,
        },
    )
    .unwrap_err();

    let SimError::NumericalDivergence { step, time_s } = err else {
        panic!("expected divergence, got {err}");
    };
    assert!(step > 0);
    assert!(time_s > 0.0);
}
