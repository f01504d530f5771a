//! ds-core: stable foundation for dynsim.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors for electrical parameters)
//! - params (immutable named parameter sets)
//! - state (ordered state vectors with integrator arithmetic)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod params;
pub mod state;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use params::ParameterSet;
pub use state::State;
pub use units::*;
