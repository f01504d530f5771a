//! Servo motor electromechanical model.

use ds_core::numeric::Real;
use ds_core::params::ParameterSet;
use ds_core::state::State;

use crate::common::check_non_negative;
use crate::error::{ModelError, ModelResult};

/// DC servo motor with armature dynamics and a step voltage input.
///
/// ## Model
///
/// State is `[theta, omega, i]` (shaft angle, angular velocity, armature
/// current):
///
/// ```text
/// dtheta/dt = omega
/// domega/dt = (-b/J) * omega + (K_t/J) * i
/// di/dt     = (-K_e/L) * omega - (R/L) * i + (1/L) * V(t)
/// ```
///
/// `V(t)` is a step applied at t = 0: zero before, `step_voltage_v` after.
/// It depends on time only, never on state.
///
/// Parameter units are mixed (N*m*s, N*m/A, V*s/rad), so fields are plain
/// suffix-named values rather than single uom quantities.
#[derive(Clone, Debug)]
pub struct ServoMotor {
    /// Rotor moment of inertia J (kg*m^2)
    pub inertia_kg_m2: Real,
    /// Viscous friction b (N*m*s)
    pub damping_n_m_s: Real,
    /// Torque constant K_t (N*m/A)
    pub torque_constant_n_m_per_a: Real,
    /// Back-EMF constant K_e (V*s/rad)
    pub emf_constant_v_s_per_rad: Real,
    /// Armature resistance R (ohm)
    pub resistance_ohm: Real,
    /// Armature inductance L (H)
    pub inductance_h: Real,
    /// Step amplitude applied at t = 0 (V)
    pub step_voltage_v: Real,
}

impl ServoMotor {
    pub const STATE_NAMES: &'static [&'static str] = &["theta", "omega", "i"];

    /// # Errors
    /// Returns `InvalidParameter` unless J, L, R are positive and the
    /// remaining constants are non-negative and finite.
    pub fn new(
        inertia_kg_m2: Real,
        damping_n_m_s: Real,
        torque_constant_n_m_per_a: Real,
        emf_constant_v_s_per_rad: Real,
        resistance_ohm: Real,
        inductance_h: Real,
        step_voltage_v: Real,
    ) -> ModelResult<Self> {
        if !(inertia_kg_m2.is_finite() && inertia_kg_m2 > 0.0) {
            return Err(ModelError::InvalidParameter {
                what: "moment of inertia must be positive",
            });
        }
        if !(inductance_h.is_finite() && inductance_h > 0.0) {
            return Err(ModelError::InvalidParameter {
                what: "armature inductance must be positive",
            });
        }
        if !(resistance_ohm.is_finite() && resistance_ohm > 0.0) {
            return Err(ModelError::InvalidParameter {
                what: "armature resistance must be positive",
            });
        }
        for value in [
            damping_n_m_s,
            torque_constant_n_m_per_a,
            emf_constant_v_s_per_rad,
            step_voltage_v,
        ] {
            check_non_negative(value, "servo constants must be non-negative")?;
        }

        Ok(Self {
            inertia_kg_m2,
            damping_n_m_s,
            torque_constant_n_m_per_a,
            emf_constant_v_s_per_rad,
            resistance_ohm,
            inductance_h,
            step_voltage_v,
        })
    }

    /// Step input voltage: zero before t = 0, the step amplitude after.
    pub fn input_voltage(&self, t: Real) -> Real {
        if t >= 0.0 { self.step_voltage_v } else { 0.0 }
    }

    /// Analytic steady-state angular velocity under the step input.
    ///
    /// From domega/dt = 0 and di/dt = 0:
    /// `omega_ss = V * K_t / (K_e * K_t + R * b)`.
    pub fn steady_state_omega(&self) -> Real {
        let denom = self.emf_constant_v_s_per_rad * self.torque_constant_n_m_per_a
            + self.resistance_ohm * self.damping_n_m_s;
        self.step_voltage_v * self.torque_constant_n_m_per_a / denom
    }

    pub fn derivative(&self, t: Real, x: &State) -> ModelResult<State> {
        let &[_theta, omega, i] = x.components() else {
            return Err(ModelError::StateShape {
                expected: Self::STATE_NAMES.len(),
                got: x.len(),
            });
        };

        let v = self.input_voltage(t);
        let j = self.inertia_kg_m2;
        let l = self.inductance_h;

        let dtheta = omega;
        let domega = (-self.damping_n_m_s / j) * omega + (self.torque_constant_n_m_per_a / j) * i;
        let di = (-self.emf_constant_v_s_per_rad / l) * omega - (self.resistance_ohm / l) * i
            + v / l;

        Ok(State::new(vec![dtheta, domega, di]))
    }

    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::new()
            .with("inertia_kg_m2", self.inertia_kg_m2)
            .with("damping_n_m_s", self.damping_n_m_s)
            .with("torque_constant_n_m_per_a", self.torque_constant_n_m_per_a)
            .with("emf_constant_v_s_per_rad", self.emf_constant_v_s_per_rad)
            .with("resistance_ohm", self.resistance_ohm)
            .with("inductance_h", self.inductance_h)
            .with("step_voltage_v", self.step_voltage_v)
    }
}
