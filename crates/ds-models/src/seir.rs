//! SEIR compartmental epidemic model.

use ds_core::numeric::Real;
use ds_core::params::ParameterSet;
use ds_core::state::State;

use crate::common::check_non_negative;
use crate::error::{ModelError, ModelResult};

/// SEIR epidemic dynamics over a closed population.
///
/// ## Model
///
/// ```text
/// dS/dt = -beta * S * I / N
/// dE/dt =  beta * S * I / N - sigma * E
/// dI/dt =  sigma * E - gamma * I
/// dR/dt =  gamma * I
/// ```
///
/// The flows only move individuals between compartments, so S+E+I+R is
/// conserved at N for the exact solution and to integrator accuracy for
/// the numerical one. Rates are per day; the grid is in days.
#[derive(Clone, Debug)]
pub struct Seir {
    /// Total population N
    pub population: Real,
    /// Transmission rate beta (1/day)
    pub transmission_rate: Real,
    /// Incubation rate sigma = 1/incubation period (1/day)
    pub incubation_rate: Real,
    /// Recovery rate gamma = 1/infectious period (1/day)
    pub recovery_rate: Real,
}

impl Seir {
    pub const STATE_NAMES: &'static [&'static str] = &["s", "e", "i", "r"];

    /// # Errors
    /// Returns `InvalidParameter` unless N > 0 and all rates are
    /// non-negative and finite.
    pub fn new(
        population: Real,
        transmission_rate: Real,
        incubation_rate: Real,
        recovery_rate: Real,
    ) -> ModelResult<Self> {
        if !(population.is_finite() && population > 0.0) {
            return Err(ModelError::InvalidParameter {
                what: "population must be positive",
            });
        }
        for rate in [transmission_rate, incubation_rate, recovery_rate] {
            check_non_negative(rate, "epidemic rates must be non-negative")?;
        }
        Ok(Self {
            population,
            transmission_rate,
            incubation_rate,
            recovery_rate,
        })
    }

    pub fn population(&self) -> Real {
        self.population
    }

    pub fn derivative(&self, _t: Real, x: &State) -> ModelResult<State> {
        let &[s, e, i, _r] = x.components() else {
            return Err(ModelError::StateShape {
                expected: Self::STATE_NAMES.len(),
                got: x.len(),
            });
        };

        let infection = self.transmission_rate * s * i / self.population;
        let incubation = self.incubation_rate * e;
        let recovery = self.recovery_rate * i;

        Ok(State::new(vec![
            -infection,
            infection - incubation,
            incubation - recovery,
            recovery,
        ]))
    }

    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .with("population", self.population)
            .with("transmission_rate_per_day", self.transmission_rate)
            .with("incubation_rate_per_day", self.incubation_rate)
            .with("recovery_rate_per_day", self.recovery_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_seir() -> Seir {
        Seir::new(10_000.0, 0.3, 1.0 / 5.0, 1.0 / 7.0).unwrap()
    }

    #[test]
    fn seir_creation() {
        assert!(Seir::new(10_000.0, 0.3, 0.2, 0.14).is_ok());
    }

    #[test]
    fn rejects_nonpositive_population() {
        assert!(Seir::new(0.0, 0.3, 0.2, 0.14).is_err());
        assert!(Seir::new(-10.0, 0.3, 0.2, 0.14).is_err());
    }

    #[test]
    fn rejects_negative_rates() {
        assert!(Seir::new(10_000.0, -0.3, 0.2, 0.14).is_err());
    }

    #[test]
    fn derivative_sums_to_zero() {
        // Compartment flows cancel: the total population is conserved.
        let seir = reference_seir();
        let x = State::new(vec![9970.0, 20.0, 10.0, 0.0]);
        let dx = seir.derivative(0.0, &x).unwrap();
        let total: Real = dx.components().iter().sum();
        assert!(total.abs() < 1e-9);
    }

    #[test]
    fn susceptibles_decline_while_infection_active() {
        let seir = reference_seir();
        let x = State::new(vec![9970.0, 20.0, 10.0, 0.0]);
        let dx = seir.derivative(0.0, &x).unwrap();
        assert!(dx[0] < 0.0);
        assert!(dx[3] > 0.0);
    }
}
