//! Battery discharge model.

use ds_core::numeric::Real;
use ds_core::params::ParameterSet;
use ds_core::state::State;
use ds_core::units::{Charge, Current, Resistance};

use crate::common::check_finite;
use crate::error::{ModelError, ModelResult};

/// Constant-current battery discharge with SOC-dependent open-circuit voltage.
///
/// ## Model
///
/// State of charge follows coulomb counting under a constant discharge
/// current, floored at zero:
///
/// ```text
/// soc[k+1] = max(0, soc[k] - I * dt / Q)
/// ```
///
/// with `Q` the capacity in coulombs. Terminal voltage is derived from a
/// linear open-circuit voltage fit:
///
/// ```text
/// v_oc  = a * soc + b
/// v_bat = v_oc - I * R_int
/// ```
///
/// The SOC floor is the only state clamp in the catalog; a fully drained
/// pack keeps reporting `v_oc = b` under load.
#[derive(Clone, Debug)]
pub struct BatteryDischarge {
    /// Rated capacity
    pub capacity: Charge,
    /// Internal resistance
    pub r_int: Resistance,
    /// Constant discharge current
    pub current: Current,
    /// OCV fit slope `a` (volts per unit SOC)
    pub ocv_slope_v: Real,
    /// OCV fit intercept `b` (volts)
    pub ocv_intercept_v: Real,
}

impl BatteryDischarge {
    pub const STATE_NAMES: &'static [&'static str] = &["soc"];
    pub const OBSERVABLES: &'static [&'static str] = &["v_oc", "v_bat"];

    /// Create a new battery discharge model.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if the capacity is not positive, the
    /// resistance or current is negative, or the OCV fit is not finite.
    pub fn new(
        capacity: Charge,
        r_int: Resistance,
        current: Current,
        ocv_slope_v: Real,
        ocv_intercept_v: Real,
    ) -> ModelResult<Self> {
        if capacity.value <= 0.0 {
            return Err(ModelError::InvalidParameter {
                what: "battery capacity must be positive",
            });
        }
        if r_int.value < 0.0 {
            return Err(ModelError::InvalidParameter {
                what: "internal resistance cannot be negative",
            });
        }
        if current.value < 0.0 {
            return Err(ModelError::InvalidParameter {
                what: "discharge current cannot be negative",
            });
        }
        check_finite(ocv_slope_v, "OCV slope must be finite")?;
        check_finite(ocv_intercept_v, "OCV intercept must be finite")?;

        Ok(Self {
            capacity,
            r_int,
            current,
            ocv_slope_v,
            ocv_intercept_v,
        })
    }

    /// Open-circuit voltage at the given state of charge.
    pub fn v_oc(&self, soc: Real) -> Real {
        self.ocv_slope_v * soc + self.ocv_intercept_v
    }

    /// Terminal voltage under the configured load current.
    pub fn v_bat(&self, soc: Real) -> Real {
        self.v_oc(soc) - self.current.value * self.r_int.value
    }

    /// One coulomb-counting step of length `dt_s`, floored at zero SOC.
    pub fn update(&self, dt_s: Real, x: &State) -> ModelResult<State> {
        let &[soc] = x.components() else {
            return Err(ModelError::StateShape {
                expected: Self::STATE_NAMES.len(),
                got: x.len(),
            });
        };

        let drained = self.current.value * dt_s / self.capacity.value;
        let next = (soc - drained).max(0.0);
        Ok(State::new(vec![next]))
    }

    /// Derived voltage series at the given state.
    pub fn observe(&self, x: &State) -> ModelResult<Vec<Real>> {
        let &[soc] = x.components() else {
            return Err(ModelError::StateShape {
                expected: Self::STATE_NAMES.len(),
                got: x.len(),
            });
        };
        Ok(vec![self.v_oc(soc), self.v_bat(soc)])
    }

    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .with("capacity_c", self.capacity.value)
            .with("r_int_ohm", self.r_int.value)
            .with("current_a", self.current.value)
            .with("ocv_slope_v", self.ocv_slope_v)
            .with("ocv_intercept_v", self.ocv_intercept_v)
    }
}
