use super::Rule;
use crate::logic::calculations::is_optimal_time;
use crate::models::{IrrigationMode, SystemConditions};

pub const EXTREME_MODE_MIN_ET0: f64 = 5.0;

/// Extreme mode rule - the most conservative policy needs both high demand
/// and an optimal window
///
/// Conditions:
/// - Mode is Extreme -> irrigate iff ET0 > 5.0 mm/day and hour is optimal
///
/// In the cascade this runs after the optimal window rule, so it only ever
/// sees non-optimal hours and skips.
pub struct ExtremeModeRule;

impl Rule for ExtremeModeRule {
    fn id(&self) -> &'static str {
        "extreme_mode"
    }

    fn name(&self) -> &'static str {
        "Extreme Conservation Mode"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        if conditions.mode == IrrigationMode::Extreme {
            return Some(conditions.et0 > EXTREME_MODE_MIN_ET0 && is_optimal_time(conditions.hour));
        }
        None
    }
}
