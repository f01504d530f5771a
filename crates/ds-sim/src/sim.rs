//! Simulation runner and result recording.

use ds_core::state::State;
use ds_models::{Model, TransitionKind};

use crate::error::{SimError, SimResult};
use crate::grid::TimeGrid;
use crate::integrator::{ForwardEuler, Integrator, Rk4};
use crate::rng::SimRng;
use crate::trajectory::Trajectory;

/// Integrator selection for continuous models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, 4 derivative calls per interval).
    #[default]
    Rk4,
    /// Forward Euler (1st-order, 1 derivative call per interval).
    ForwardEuler,
}

/// Options for simulation runs.
#[derive(Clone, Debug, Default)]
pub struct SimOptions {
    /// Integrator used for continuous models; ignored for discrete ones.
    pub integrator: IntegratorType,
}

/// Run a model over a time grid, producing one state per grid point.
///
/// Continuous models are integrated interval by interval with the selected
/// fixed-step method; discrete models apply their recurrence once per
/// interval. Stochastic models draw one Wiener increment per interval from
/// the caller's seeded generator.
///
/// The engine holds no state between invocations; the returned trajectory
/// is owned by the caller.
///
/// # Errors
/// - `InvalidArg` if the initial state does not match the model layout or
///   is non-finite.
/// - `MissingRandomSource` if a stochastic model is run without `rng`.
/// - `NumericalDivergence` if any step produces a non-finite component;
///   no partial trajectory is returned.
pub fn run(
    model: &Model,
    initial: &State,
    grid: &TimeGrid,
    mut rng: Option<&mut SimRng>,
    opts: &SimOptions,
) -> SimResult<Trajectory> {
    let expected = model.state_names().len();
    if initial.len() != expected {
        return Err(SimError::InvalidArg {
            what: "initial state length does not match the model layout",
        });
    }
    if !initial.is_finite() {
        return Err(SimError::InvalidArg {
            what: "initial state must be finite",
        });
    }
    if model.transition() == TransitionKind::DiscreteStochastic && rng.is_none() {
        return Err(SimError::MissingRandomSource);
    }

    tracing::debug!(
        model = model.name(),
        points = grid.len(),
        t_end = grid.end_s(),
        "starting run"
    );

    let mut trajectory = Trajectory::with_capacity(model.observables(), grid.len());
    let mut x = initial.clone();
    trajectory.push(grid.start_s(), x.clone(), model.observe(&x)?);

    for (k, (t0, t1)) in grid.intervals().enumerate() {
        let dt = t1 - t0;

        let next = match model.transition() {
            TransitionKind::Continuous => match opts.integrator {
                IntegratorType::Rk4 => Rk4.step(model, t0, &x, dt)?,
                IntegratorType::ForwardEuler => ForwardEuler.step(model, t0, &x, dt)?,
            },
            TransitionKind::Discrete => model.update(t0, dt, &x, None)?,
            TransitionKind::DiscreteStochastic => {
                let Some(generator) = rng.as_mut() else {
                    return Err(SimError::MissingRandomSource);
                };
                let dw = generator.wiener_increment(dt);
                model.update(t0, dt, &x, Some(dw))?
            }
        };

        if !next.is_finite() {
            tracing::warn!(
                model = model.name(),
                step = k + 1,
                time_s = t1,
                "non-finite state, aborting run"
            );
            return Err(SimError::NumericalDivergence {
                step: k + 1,
                time_s: t1,
            });
        }

        let derived = model.observe(&next)?;
        trajectory.push(t1, next.clone(), derived);
        x = next;
    }

    tracing::debug!(model = model.name(), points = trajectory.len(), "run complete");
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::units::{farad, ohm, volt};
    use ds_models::{GbmStockPrice, RcCharging};

    fn rc_model() -> Model {
        RcCharging::new(ohm(1000.0), farad(0.001), volt(5.0))
            .unwrap()
            .into()
    }

    #[test]
    fn records_every_grid_point() {
        let model = rc_model();
        let grid = TimeGrid::uniform(0.0, 0.01, 100).unwrap();
        let trajectory = run(
            &model,
            &State::new(vec![0.0]),
            &grid,
            None,
            &SimOptions::default(),
        )
        .unwrap();
        assert_eq!(trajectory.len(), grid.len());
        assert_eq!(trajectory.times_s()[0], 0.0);
    }

    #[test]
    fn rejects_mismatched_initial_state() {
        let model = rc_model();
        let grid = TimeGrid::uniform(0.0, 0.01, 10).unwrap();
        let err = run(
            &model,
            &State::new(vec![0.0, 1.0]),
            &grid,
            None,
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }

    #[test]
    fn rejects_non_finite_initial_state() {
        let model = rc_model();
        let grid = TimeGrid::uniform(0.0, 0.01, 10).unwrap();
        let err = run(
            &model,
            &State::new(vec![f64::NAN]),
            &grid,
            None,
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }

    #[test]
    fn stochastic_model_without_rng_is_rejected() {
        let model: Model = GbmStockPrice::new(0.05, 0.2).unwrap().into();
        let grid = TimeGrid::uniform(0.0, 1.0 / 252.0, 10).unwrap();
        let err = run(
            &model,
            &State::new(vec![100.0]),
            &grid,
            None,
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::MissingRandomSource));
    }

    #[test]
    fn deterministic_model_ignores_rng() {
        let model = rc_model();
        let grid = TimeGrid::uniform(0.0, 0.01, 10).unwrap();
        let mut rng = SimRng::from_seed(42);
        let with_rng = run(
            &model,
            &State::new(vec![0.0]),
            &grid,
            Some(&mut rng),
            &SimOptions::default(),
        )
        .unwrap();
        let without = run(
            &model,
            &State::new(vec![0.0]),
            &grid,
            None,
            &SimOptions::default(),
        )
        .unwrap();
        assert_eq!(with_rng, without);
    }
}
