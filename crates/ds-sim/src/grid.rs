//! Time grids for fixed-step simulation.

use ds_core::numeric::Real;

use crate::error::{SimError, SimResult};

/// Ordered, strictly increasing sequence of time points.
///
/// Validation happens at construction, so an invalid grid is
/// unrepresentable and `run` never produces a partial trajectory from a
/// malformed time range. All reference models define t = 0 as their
/// origin; grids starting earlier are rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    points: Vec<Real>,
}

impl TimeGrid {
    /// Uniform grid: `steps` intervals of `dt_s` starting at `start_s`.
    ///
    /// The grid has `steps + 1` points, including both endpoints.
    ///
    /// # Errors
    /// `InvalidTimeRange` if `dt_s` is not positive, `steps` is zero, or
    /// `start_s` is negative or non-finite.
    pub fn uniform(start_s: Real, dt_s: Real, steps: usize) -> SimResult<Self> {
        if !start_s.is_finite() || start_s < 0.0 {
            return Err(SimError::InvalidTimeRange {
                what: "start must be finite and non-negative",
            });
        }
        if !dt_s.is_finite() || dt_s <= 0.0 {
            return Err(SimError::InvalidTimeRange {
                what: "step size must be positive",
            });
        }
        if steps == 0 {
            return Err(SimError::InvalidTimeRange {
                what: "step count must be positive",
            });
        }

        let points = (0..=steps).map(|k| start_s + k as Real * dt_s).collect();
        Ok(Self { points })
    }

    /// Grid from an explicit point sequence.
    ///
    /// # Errors
    /// `InvalidTimeRange` if the sequence is empty, contains non-finite
    /// values, starts before zero, or is not strictly increasing.
    pub fn from_points(points: Vec<Real>) -> SimResult<Self> {
        let Some(&first) = points.first() else {
            return Err(SimError::InvalidTimeRange {
                what: "grid must not be empty",
            });
        };
        if !first.is_finite() || first < 0.0 {
            return Err(SimError::InvalidTimeRange {
                what: "start must be finite and non-negative",
            });
        }
        for pair in points.windows(2) {
            if !pair[1].is_finite() || pair[1] <= pair[0] {
                return Err(SimError::InvalidTimeRange {
                    what: "points must be strictly increasing",
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Real] {
        &self.points
    }

    /// Number of grid points (intervals + 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start_s(&self) -> Real {
        self.points[0]
    }

    pub fn end_s(&self) -> Real {
        self.points[self.points.len() - 1]
    }

    /// Iterate over consecutive (t_k, t_k+1) interval bounds.
    pub fn intervals(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
