use super::Rule;
use crate::models::SystemConditions;

/// Reserve below which the tank is never drawn from, mL
pub const MIN_WATER_RESERVE: u32 = 500;

/// Water reserve rule - hard safety floor on the tank
///
/// Conditions:
/// - Water level < 500 mL -> skip, regardless of demand or mode
pub struct WaterReserveRule;

impl Rule for WaterReserveRule {
    fn id(&self) -> &'static str {
        "water_reserve"
    }

    fn name(&self) -> &'static str {
        "Water Reserve Floor"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        if conditions.water_level < MIN_WATER_RESERVE {
            return Some(false);
        }
        None
    }
}
