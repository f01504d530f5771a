//! SIRS compartmental epidemic model with waning immunity.

use ds_core::numeric::Real;
use ds_core::params::ParameterSet;
use ds_core::state::State;

use crate::common::check_non_negative;
use crate::error::{ModelError, ModelResult};

/// SIRS epidemic dynamics: recovered individuals lose immunity and return
/// to the susceptible pool.
///
/// ## Model
///
/// ```text
/// dS/dt = -beta * S * I / N + xi * R
/// dI/dt =  beta * S * I / N - gamma * I
/// dR/dt =  gamma * I - xi * R
/// ```
///
/// As with SEIR the flows cancel, so S+I+R stays at N. Rates are per day.
#[derive(Clone, Debug)]
pub struct Sirs {
    /// Total population N
    pub population: Real,
    /// Transmission rate beta (1/day)
    pub transmission_rate: Real,
    /// Recovery rate gamma (1/day)
    pub recovery_rate: Real,
    /// Immunity loss rate xi (1/day)
    pub immunity_loss_rate: Real,
}

impl Sirs {
    pub const STATE_NAMES: &'static [&'static str] = &["s", "i", "r"];

    /// # Errors
    /// Returns `InvalidParameter` unless N > 0 and all rates are
    /// non-negative and finite.
    pub fn new(
        population: Real,
        transmission_rate: Real,
        recovery_rate: Real,
        immunity_loss_rate: Real,
    ) -> ModelResult<Self> {
        if !(population.is_finite() && population > 0.0) {
            return Err(ModelError::InvalidParameter {
                what: "population must be positive",
            });
        }
        for rate in [transmission_rate, recovery_rate, immunity_loss_rate] {
            check_non_negative(rate, "epidemic rates must be non-negative")?;
        }
        Ok(Self {
            population,
            transmission_rate,
            recovery_rate,
            immunity_loss_rate,
        })
    }

    pub fn population(&self) -> Real {
        self.population
    }

    pub fn derivative(&self, _t: Real, x: &State) -> ModelResult<State> {
        let &[s, i, r] = x.components() else {
            return Err(ModelError::StateShape {
                expected: Self::STATE_NAMES.len(),
                got: x.len(),
            });
        };

        let infection = self.transmission_rate * s * i / self.population;
        let recovery = self.recovery_rate * i;
        let waning = self.immunity_loss_rate * r;

        Ok(State::new(vec![
            -infection + waning,
            infection - recovery,
            recovery - waning,
        ]))
    }

    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .with("population", self.population)
            .with("transmission_rate_per_day", self.transmission_rate)
            .with("recovery_rate_per_day", self.recovery_rate)
            .with("immunity_loss_rate_per_day", self.immunity_loss_rate)
    }
}
