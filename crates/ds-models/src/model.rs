//! Model catalog: tagged variant over the concrete dynamical systems.

use ds_core::numeric::Real;
use ds_core::params::ParameterSet;
use ds_core::state::State;

use crate::battery::BatteryDischarge;
use crate::error::{ModelError, ModelResult};
use crate::gbm::GbmStockPrice;
use crate::rc::{RcCharging, RcDischarging};
use crate::seir::Seir;
use crate::servo::ServoMotor;
use crate::sirs::Sirs;

/// How the engine advances a model's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// dx/dt = f(t, x); the engine integrates over each grid interval.
    Continuous,
    /// Explicit recurrence x[k+1] = g(t, dt, x[k]).
    Discrete,
    /// Recurrence consuming one Wiener increment per step.
    DiscreteStochastic,
}

/// A dynamical system the engine can simulate.
///
/// One variant per concrete model value. Dispatch is a plain `match`, so
/// the engine stays generic over a single type without trait objects.
#[derive(Clone, Debug)]
pub enum Model {
    BatteryDischarge(BatteryDischarge),
    RcCharging(RcCharging),
    RcDischarging(RcDischarging),
    Seir(Seir),
    Sirs(Sirs),
    ServoMotor(ServoMotor),
    GbmStockPrice(GbmStockPrice),
}

impl Model {
    /// Stable identifier used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Model::BatteryDischarge(_) => "battery_discharge",
            Model::RcCharging(_) => "rc_charging",
            Model::RcDischarging(_) => "rc_discharging",
            Model::Seir(_) => "seir",
            Model::Sirs(_) => "sirs",
            Model::ServoMotor(_) => "servo_motor",
            Model::GbmStockPrice(_) => "gbm_stock_price",
        }
    }

    /// Transition classification the engine dispatches on.
    pub fn transition(&self) -> TransitionKind {
        match self {
            Model::RcCharging(_)
            | Model::RcDischarging(_)
            | Model::Seir(_)
            | Model::Sirs(_)
            | Model::ServoMotor(_) => TransitionKind::Continuous,
            Model::BatteryDischarge(_) => TransitionKind::Discrete,
            Model::GbmStockPrice(_) => TransitionKind::DiscreteStochastic,
        }
    }

    /// Ordered names of the state components.
    pub fn state_names(&self) -> &'static [&'static str] {
        match self {
            Model::BatteryDischarge(_) => BatteryDischarge::STATE_NAMES,
            Model::RcCharging(_) => RcCharging::STATE_NAMES,
            Model::RcDischarging(_) => RcDischarging::STATE_NAMES,
            Model::Seir(_) => Seir::STATE_NAMES,
            Model::Sirs(_) => Sirs::STATE_NAMES,
            Model::ServoMotor(_) => ServoMotor::STATE_NAMES,
            Model::GbmStockPrice(_) => GbmStockPrice::STATE_NAMES,
        }
    }

    /// Named parameter values, fixed for the lifetime of the model.
    pub fn parameters(&self) -> ParameterSet {
        match self {
            Model::BatteryDischarge(m) => m.parameters(),
            Model::RcCharging(m) => m.parameters(),
            Model::RcDischarging(m) => m.parameters(),
            Model::Seir(m) => m.parameters(),
            Model::Sirs(m) => m.parameters(),
            Model::ServoMotor(m) => m.parameters(),
            Model::GbmStockPrice(m) => m.parameters(),
        }
    }

    /// Time derivative dx/dt = f(t, x) for continuous models.
    ///
    /// # Errors
    /// `NotSupported` for discrete-transition models.
    pub fn derivative(&self, t: Real, x: &State) -> ModelResult<State> {
        match self {
            Model::RcCharging(m) => m.derivative(t, x),
            Model::RcDischarging(m) => m.derivative(t, x),
            Model::Seir(m) => m.derivative(t, x),
            Model::Sirs(m) => m.derivative(t, x),
            Model::ServoMotor(m) => m.derivative(t, x),
            Model::BatteryDischarge(_) | Model::GbmStockPrice(_) => {
                Err(ModelError::NotSupported {
                    what: "discrete models have no derivative",
                })
            }
        }
    }

    /// Recurrence update for discrete models. `noise` carries the Wiener
    /// increment for stochastic models and is ignored otherwise.
    ///
    /// # Errors
    /// `NotSupported` for continuous models, or for a stochastic model
    /// invoked without a noise draw.
    pub fn update(
        &self,
        _t: Real,
        dt_s: Real,
        x: &State,
        noise: Option<Real>,
    ) -> ModelResult<State> {
        match self {
            Model::BatteryDischarge(m) => m.update(dt_s, x),
            Model::GbmStockPrice(m) => {
                let dw = noise.ok_or(ModelError::NotSupported {
                    what: "stochastic update requires a noise draw",
                })?;
                m.update(dt_s, x, dw)
            }
            Model::RcCharging(_)
            | Model::RcDischarging(_)
            | Model::Seir(_)
            | Model::Sirs(_)
            | Model::ServoMotor(_) => Err(ModelError::NotSupported {
                what: "continuous models have no recurrence update",
            }),
        }
    }

    /// Names of the derived scalar series reported alongside the state.
    pub fn observables(&self) -> &'static [&'static str] {
        match self {
            Model::BatteryDischarge(_) => BatteryDischarge::OBSERVABLES,
            _ => &[],
        }
    }

    /// Derived scalar values at the given state, in `observables()` order.
    pub fn observe(&self, x: &State) -> ModelResult<Vec<Real>> {
        match self {
            Model::BatteryDischarge(m) => m.observe(x),
            _ => Ok(Vec::new()),
        }
    }
}

impl From<BatteryDischarge> for Model {
    fn from(m: BatteryDischarge) -> Self {
        Model::BatteryDischarge(m)
    }
}

impl From<RcCharging> for Model {
    fn from(m: RcCharging) -> Self {
        Model::RcCharging(m)
    }
}

impl From<RcDischarging> for Model {
    fn from(m: RcDischarging) -> Self {
        Model::RcDischarging(m)
    }
}

impl From<Seir> for Model {
    fn from(m: Seir) -> Self {
        Model::Seir(m)
    }
}

impl From<Sirs> for Model {
    fn from(m: Sirs) -> Self {
        Model::Sirs(m)
    }
}

impl From<ServoMotor> for Model {
    fn from(m: ServoMotor) -> Self {
        Model::ServoMotor(m)
    }
}

impl From<GbmStockPrice> for Model {
    fn from(m: GbmStockPrice) -> Self {
        Model::GbmStockPrice(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::units::{ampere, ampere_hour, farad, ohm, volt};

    #[test]
    fn transition_classification() {
        let battery: Model = BatteryDischarge::new(
            ampere_hour(2.0),
            ohm(0.05),
            ampere(1.0),
            1.2,
            2.5,
        )
        .unwrap()
        .into();
        let rc: Model = RcCharging::new(ohm(1000.0), farad(0.001), volt(5.0))
            .unwrap()
            .into();
        let gbm: Model = GbmStockPrice::new(0.05, 0.2).unwrap().into();

        assert_eq!(battery.transition(), TransitionKind::Discrete);
        assert_eq!(rc.transition(), TransitionKind::Continuous);
        assert_eq!(gbm.transition(), TransitionKind::DiscreteStochastic);
    }

    #[test]
    fn state_names_match_variants() {
        let seir: Model = Seir::new(10_000.0, 0.3, 0.2, 1.0 / 7.0).unwrap().into();
        assert_eq!(seir.state_names(), &["s", "e", "i", "r"]);

        let sirs: Model = Sirs::new(1000.0, 0.3, 0.1, 0.05).unwrap().into();
        assert_eq!(sirs.state_names(), &["s", "i", "r"]);
    }

    #[test]
    fn derivative_on_discrete_model_is_not_supported() {
        let gbm: Model = GbmStockPrice::new(0.05, 0.2).unwrap().into();
        let err = gbm.derivative(0.0, &State::new(vec![100.0])).unwrap_err();
        assert!(matches!(err, ModelError::NotSupported { .. }));
    }

    #[test]
    fn update_on_continuous_model_is_not_supported() {
        let servo: Model = ServoMotor::new(0.01, 0.1, 0.01, 0.01, 1.0, 0.5, 5.0)
            .unwrap()
            .into();
        let err = servo
            .update(0.0, 0.01, &State::zeros(3), None)
            .unwrap_err();
        assert!(matches!(err, ModelError::NotSupported { .. }));
    }

    #[test]
    fn stochastic_update_requires_noise() {
        let gbm: Model = GbmStockPrice::new(0.05, 0.2).unwrap().into();
        let err = gbm
            .update(0.0, 1.0 / 252.0, &State::new(vec![100.0]), None)
            .unwrap_err();
        assert!(matches!(err, ModelError::NotSupported { .. }));
    }

    #[test]
    fn parameters_are_reported_by_name() {
        let battery: Model = BatteryDischarge::new(
            ampere_hour(2.0),
            ohm(0.05),
            ampere(1.0),
            1.2,
            2.5,
        )
        .unwrap()
        .into();
        let params = battery.parameters();
        assert_eq!(params.get("capacity_c"), Some(7200.0));
        assert_eq!(params.get("r_int_ohm"), Some(0.05));
    }
}
