pub mod default_threshold;
pub mod engine;
pub mod extreme_mode;
pub mod heat_override;
pub mod low_demand;
pub mod optimal_window;
pub mod power_budget;
pub mod water_reserve;

pub use engine::RulesEngine;

use crate::models::SystemConditions;

/// ET0 below which no rule will ever water, mm/day. Also the zero point of
/// the duration scale.
pub const MIN_IRRIGATION_ET0: f64 = 2.0;

/// One step of the irrigation gating cascade
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// `Some(verdict)` if this rule decides, `None` to defer to the next rule
    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool>;
}
