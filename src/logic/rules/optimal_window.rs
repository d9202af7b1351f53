use super::Rule;
use crate::logic::calculations::is_optimal_time;
use crate::models::SystemConditions;

pub const OPTIMAL_WINDOW_MIN_ET0: f64 = 2.5;

/// Optimal window rule - lower bar during the morning and evening windows
///
/// Conditions:
/// - Hour in 07-09 or 17-19 -> irrigate iff ET0 > 2.5 mm/day
pub struct OptimalWindowRule;

impl Rule for OptimalWindowRule {
    fn id(&self) -> &'static str {
        "optimal_window"
    }

    fn name(&self) -> &'static str {
        "Optimal Watering Window"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        if is_optimal_time(conditions.hour) {
            return Some(conditions.et0 > OPTIMAL_WINDOW_MIN_ET0);
        }
        None
    }
}
