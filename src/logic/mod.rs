pub mod calculations;
pub mod decision;
pub mod et0;
pub mod rules;

pub use decision::IrrigationDecisionEngine;
pub use et0::{AtmosphericConstants, Et0Estimator};
pub use rules::RulesEngine;
