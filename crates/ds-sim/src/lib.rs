//! Fixed-grid simulation engine for the dynsim model catalog.
//!
//! Provides:
//! - Validating time grids (uniform or explicit point sequences)
//! - Fixed-step RK4 and forward Euler integrators for continuous models
//! - Direct iteration for discrete and discrete-stochastic models
//! - A caller-owned seeded RNG handle for reproducible stochastic runs
//! - Trajectory recording with derived scalar series

pub mod error;
pub mod grid;
pub mod integrator;
pub mod rng;
pub mod sim;
pub mod trajectory;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use grid::TimeGrid;
pub use integrator::{ForwardEuler, Integrator, Rk4};
pub use rng::SimRng;
pub use sim::{IntegratorType, SimOptions, run};
pub use trajectory::{DerivedSeries, Sample, Trajectory};
