//! Model catalog for the dynsim engine.
//!
//! Each module holds one dynamical system as a plain value type with a
//! validating constructor; `model::Model` is the tagged variant the
//! engine dispatches on.

pub mod battery;
mod common;
pub mod error;
pub mod gbm;
pub mod model;
pub mod rc;
pub mod seir;
pub mod servo;
pub mod sirs;

// Re-exports for public API
pub use battery::BatteryDischarge;
pub use error::{ModelError, ModelResult};
pub use gbm::GbmStockPrice;
pub use model::{Model, TransitionKind};
pub use rc::{RcCharging, RcDischarging};
pub use seir::Seir;
pub use servo::ServoMotor;
pub use sirs::Sirs;
