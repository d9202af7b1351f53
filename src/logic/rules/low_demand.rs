use super::{Rule, MIN_IRRIGATION_ET0};
use crate::models::SystemConditions;

/// Low demand rule - never water when evaporative demand is minimal
///
/// Conditions:
/// - ET0 < 2.0 mm/day -> skip
///
/// Also catches the -1 invalid-estimate sentinel.
pub struct LowDemandRule;

impl Rule for LowDemandRule {
    fn id(&self) -> &'static str {
        "low_demand"
    }

    fn name(&self) -> &'static str {
        "Low Evaporative Demand"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        if conditions.et0 < MIN_IRRIGATION_ET0 {
            return Some(false);
        }
        None
    }
}
