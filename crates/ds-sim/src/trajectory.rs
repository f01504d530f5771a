//! Trajectory recording and read-only iteration.

use ds_core::numeric::Real;
use ds_core::state::State;
use serde::{Deserialize, Serialize};

/// One named derived scalar series (e.g. battery terminal voltage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSeries {
    pub name: String,
    pub values: Vec<Real>,
}

/// Ordered time series produced by a run.
///
/// Parallel `times`/`states` arrays plus any derived scalar series the
/// model reports. Appended to exactly once per grid point while the
/// engine steps; owned by the caller afterwards. Iteration is read-only
/// and restartable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    times_s: Vec<Real>,
    states: Vec<State>,
    derived: Vec<DerivedSeries>,
}

impl Trajectory {
    pub(crate) fn with_capacity(derived_names: &[&str], points: usize) -> Self {
        Self {
            times_s: Vec::with_capacity(points),
            states: Vec::with_capacity(points),
            derived: derived_names
                .iter()
                .map(|name| DerivedSeries {
                    name: (*name).to_string(),
                    values: Vec::with_capacity(points),
                })
                .collect(),
        }
    }

    pub(crate) fn push(&mut self, time_s: Real, state: State, derived_values: Vec<Real>) {
        debug_assert_eq!(derived_values.len(), self.derived.len());
        self.times_s.push(time_s);
        self.states.push(state);
        for (series, value) in self.derived.iter_mut().zip(derived_values) {
            series.values.push(value);
        }
    }

    /// Number of recorded grid points.
    pub fn len(&self) -> usize {
        self.times_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times_s.is_empty()
    }

    pub fn times_s(&self) -> &[Real] {
        &self.times_s
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }

    /// Values of one derived series, if the model reports it.
    pub fn derived(&self, name: &str) -> Option<&[Real]> {
        self.derived
            .iter()
            .find(|series| series.name == name)
            .map(|series| series.values.as_slice())
    }

    /// Names of the derived series, in model-declared order.
    pub fn derived_names(&self) -> impl Iterator<Item = &str> {
        self.derived.iter().map(|series| series.name.as_str())
    }

    /// Restartable read-only iteration over (time, state, derived) samples.
    pub fn iter(&self) -> impl Iterator<Item = Sample<'_>> {
        (0..self.len()).map(move |k| Sample {
            time_s: self.times_s[k],
            state: &self.states[k],
            derived: self
                .derived
                .iter()
                .map(|series| (series.name.as_str(), series.values[k]))
                .collect(),
        })
    }
}

/// Borrowed view of one grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<'a> {
    pub time_s: Real,
    pub state: &'a State,
    pub derived: Vec<(&'a str, Real)>,
}
