//! Geometric Brownian motion stock price model.

use ds_core::numeric::Real;
use ds_core::params::ParameterSet;
use ds_core::state::State;

use crate::common::{check_finite, check_non_negative};
use crate::error::{ModelError, ModelResult};

/// Stock price following geometric Brownian motion.
///
/// ## Model
///
/// The log-Euler discretization of `dS = mu*S dt + sigma*S dW`:
///
/// ```text
/// s[k+1] = s[k] * exp((mu - sigma^2/2) * dt + sigma * dW)
/// ```
///
/// where `dW ~ Normal(0, sqrt(dt))` is drawn once per step from the
/// caller's seeded generator and handed in by the engine. Because the
/// update multiplies by an exponential, a positive price stays positive
/// for any finite draw.
#[derive(Clone, Debug)]
pub struct GbmStockPrice {
    /// Expected return mu (annualized drift)
    pub drift: Real,
    /// Volatility sigma (annualized standard deviation)
    pub volatility: Real,
}

impl GbmStockPrice {
    pub const STATE_NAMES: &'static [&'static str] = &["s"];

    /// # Errors
    /// Returns `InvalidParameter` unless the drift is finite and the
    /// volatility is finite and non-negative.
    pub fn new(drift: Real, volatility: Real) -> ModelResult<Self> {
        check_finite(drift, "drift must be finite")?;
        check_non_negative(volatility, "volatility must be non-negative")?;
        Ok(Self { drift, volatility })
    }

    /// One log-Euler step of length `dt_s` consuming the Wiener increment
    /// `dw`.
    pub fn update(&self, dt_s: Real, x: &State, dw: Real) -> ModelResult<State> {
        let &[s] = x.components() else {
            return Err(ModelError::StateShape {
                expected: Self::STATE_NAMES.len(),
                got: x.len(),
            });
        };

        let growth = (self.drift - 0.5 * self.volatility * self.volatility) * dt_s
            + self.volatility * dw;
        Ok(State::new(vec![s * growth.exp()]))
    }

    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .with("drift_per_year", self.drift)
            .with("volatility_per_sqrt_year", self.volatility)
    }
}
