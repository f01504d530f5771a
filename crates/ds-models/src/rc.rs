//! RC circuit charge and discharge models.

use ds_core::numeric::Real;
use ds_core::params::ParameterSet;
use ds_core::state::State;
use ds_core::units::{Capacitance, Potential, Resistance};

use crate::error::{ModelError, ModelResult};

fn check_rc(resistance: Resistance, capacitance: Capacitance) -> ModelResult<()> {
    if resistance.value <= 0.0 {
        return Err(ModelError::InvalidParameter {
            what: "resistance must be positive",
        });
    }
    if capacitance.value <= 0.0 {
        return Err(ModelError::InvalidParameter {
            what: "capacitance must be positive",
        });
    }
    Ok(())
}

/// Capacitor charging through a series resistor from a constant source.
///
/// ## Model
///
/// ```text
/// dv_c/dt = (V0 - v_c) / (R * C)
/// ```
///
/// with time constant tau = R*C. The analytic solution
/// `v_c(t) = V0 * (1 - exp(-t/tau))` reaches ~63.2% of `V0` at t = tau.
#[derive(Clone, Debug)]
pub struct RcCharging {
    pub resistance: Resistance,
    pub capacitance: Capacitance,
    /// Source voltage applied at t = 0
    pub source: Potential,
}

impl RcCharging {
    pub const STATE_NAMES: &'static [&'static str] = &["v_c"];

    /// # Errors
    /// Returns `InvalidParameter` unless R > 0 and C > 0.
    pub fn new(
        resistance: Resistance,
        capacitance: Capacitance,
        source: Potential,
    ) -> ModelResult<Self> {
        check_rc(resistance, capacitance)?;
        Ok(Self {
            resistance,
            capacitance,
            source,
        })
    }

    /// Time constant tau = R*C in seconds.
    pub fn time_constant_s(&self) -> Real {
        self.resistance.value * self.capacitance.value
    }

    pub fn derivative(&self, _t: Real, x: &State) -> ModelResult<State> {
        let &[v_c] = x.components() else {
            return Err(ModelError::StateShape {
                expected: Self::STATE_NAMES.len(),
                got: x.len(),
            });
        };
        Ok(State::new(vec![
            (self.source.value - v_c) / self.time_constant_s(),
        ]))
    }

    /// Closed-form solution from an uncharged capacitor, for validation.
    pub fn analytic(&self, t: Real) -> Real {
        self.source.value * (1.0 - (-t / self.time_constant_s()).exp())
    }

    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .with("resistance_ohm", self.resistance.value)
            .with("capacitance_f", self.capacitance.value)
            .with("source_v", self.source.value)
    }
}

/// Capacitor discharging through a series resistor.
///
/// ## Model
///
/// ```text
/// dv_c/dt = -v_c / (R * C)
/// ```
///
/// The analytic solution `v_c(t) = v_c(0) * exp(-t/tau)` retains ~36.8%
/// of the initial voltage at t = tau.
#[derive(Clone, Debug)]
pub struct RcDischarging {
    pub resistance: Resistance,
    pub capacitance: Capacitance,
}

impl RcDischarging {
    pub const STATE_NAMES: &'static [&'static str] = &["v_c"];

    /// # Errors
    /// Returns `InvalidParameter` unless R > 0 and C > 0.
    pub fn new(resistance: Resistance, capacitance: Capacitance) -> ModelResult<Self> {
        check_rc(resistance, capacitance)?;
        Ok(Self {
            resistance,
            capacitance,
        })
    }

    /// Time constant tau = R*C in seconds.
    pub fn time_constant_s(&self) -> Real {
        self.resistance.value * self.capacitance.value
    }

    pub fn derivative(&self, _t: Real, x: &State) -> ModelResult<State> {
        let &[v_c] = x.components() else {
            return Err(ModelError::StateShape {
                expected: Self::STATE_NAMES.len(),
                got: x.len(),
            });
        };
        Ok(State::new(vec![-v_c / self.time_constant_s()]))
    }

    /// Closed-form solution from initial voltage `v0`, for validation.
    pub fn analytic(&self, v0: Real, t: Real) -> Real {
        v0 * (-t / self.time_constant_s()).exp()
    }

    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .with("resistance_ohm", self.resistance.value)
            .with("capacitance_f", self.capacitance.value)
    }
}
