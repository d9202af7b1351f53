//! Evapotranspiration-driven irrigation decisions.
//!
//! [`Et0Estimator`] turns weather readings into a reference
//! evapotranspiration rate; [`IrrigationDecisionEngine`] combines that rate
//! with site state (power, water reserve, hour, mode) into an
//! [`IrrigationDecision`]. Both are pure and hold only read-only
//! configuration.
//!
//! ```
//! use irrigops::{Et0Estimator, IrrigationDecisionEngine, SystemConditions};
//!
//! let et0 = Et0Estimator::default().calculate(30.0, 50.0, 10.0);
//! // Skip the cycle when the estimate is unusable
//! if let Some(et0) = et0.value() {
//!     let conditions = SystemConditions::new(et0, 30.0, 50.0, 8, true, 3000);
//!     let decision = IrrigationDecisionEngine::default().make_decision(&conditions);
//!     assert!(decision.should_irrigate);
//! }
//! ```

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use logic::{Et0Estimator, IrrigationDecisionEngine};
pub use models::{
    Et0Estimate, InvalidEt0, IrrigationDecision, IrrigationMode, SystemConditions, Verdict,
    WeatherSample, INVALID_ET0,
};
