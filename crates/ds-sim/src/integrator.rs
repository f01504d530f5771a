//! Fixed-step time integrators for continuous models.

use ds_core::numeric::Real;
use ds_core::state::State;
use ds_models::Model;

use crate::error::SimResult;

/// Trait for fixed-step time integrators.
pub trait Integrator {
    /// Advance state across one grid interval using the model derivative.
    fn step(&self, model: &Model, t: Real, x: &State, dt: Real) -> SimResult<State>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
///
/// Four derivative calls per interval; accurate enough on the reference
/// grids to match an adaptive solver to 3 significant figures.
#[derive(Clone, Debug)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn step(&self, model: &Model, t: Real, x: &State, dt: Real) -> SimResult<State> {
        let k1 = model.derivative(t, x)?;

        let x2 = x.add(&k1.scaled(0.5 * dt));
        let k2 = model.derivative(t + 0.5 * dt, &x2)?;

        let x3 = x.add(&k2.scaled(0.5 * dt));
        let k3 = model.derivative(t + 0.5 * dt, &x3)?;

        let x4 = x.add(&k3.scaled(dt));
        let k4 = model.derivative(t + dt, &x4)?;

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = k1
            .add(&k2.scaled(2.0))
            .add(&k3.scaled(2.0))
            .add(&k4);

        Ok(x.add(&k_sum.scaled(dt / 6.0)))
    }
}

/// Forward Euler (explicit, 1st order).
///
/// One derivative call per interval; cheap, and adequate when the grid is
/// fine relative to the system's time constants.
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(&self, model: &Model, t: Real, x: &State, dt: Real) -> SimResult<State> {
        let xdot = model.derivative(t, x)?;
        Ok(x.add(&xdot.scaled(dt)))
    }
}
