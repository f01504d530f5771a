//! Ordered state vectors with the arithmetic integrators need.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::numeric::Real;

/// Ordered, fixed-length vector of real-valued state components.
///
/// Component names live with the model; the vector itself is positional.
/// Each simulation step produces a fresh `State` from its predecessor, so
/// there is no shared mutable state between grid points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State(Vec<Real>);

impl State {
    pub fn new(components: Vec<Real>) -> Self {
        Self(components)
    }

    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn components(&self) -> &[Real] {
        &self.0
    }

    /// True when every component is a normal/subnormal/zero float.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Element-wise sum, used by the integrators to combine stage slopes.
    pub fn add(&self, other: &State) -> State {
        debug_assert_eq!(self.0.len(), other.0.len());
        State(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Element-wise scaling by a scalar.
    pub fn scaled(&self, factor: Real) -> State {
        State(self.0.iter().map(|v| factor * v).collect())
    }
}

impl Index<usize> for State {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        &self.0[index]
    }
}

impl From<Vec<Real>> for State {
    fn from(components: Vec<Real>) -> Self {
        Self(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_scale() {
        let a = State::new(vec![1.0, 2.0, 3.0]);
        let b = State::new(vec![0.5, 0.5, 0.5]);
        assert_eq!(a.add(&b), State::new(vec![1.5, 2.5, 3.5]));
        assert_eq!(a.scaled(2.0), State::new(vec![2.0, 4.0, 6.0]));
    }

    #[test]
    fn finite_check_detects_nan_and_inf() {
        assert!(State::new(vec![0.0, 1.0]).is_finite());
        assert!(!State::new(vec![0.0, Real::NAN]).is_finite());
        assert!(!State::new(vec![Real::INFINITY]).is_finite());
    }

    #[test]
    fn zeros_has_requested_length() {
        let x = State::zeros(4);
        assert_eq!(x.len(), 4);
        assert!(x.components().iter().all(|&v| v == 0.0));
    }
}
