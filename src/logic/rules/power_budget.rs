use super::Rule;
use crate::models::SystemConditions;

/// ET0 needed to justify drawing on backup power, mm/day
pub const UNPOWERED_MIN_ET0: f64 = 4.0;

/// Power budget rule - without mains/solar power only high demand justifies
/// running the pump
///
/// Conditions:
/// - Power unavailable and ET0 < 4.0 mm/day -> skip
pub struct PowerBudgetRule;

impl Rule for PowerBudgetRule {
    fn id(&self) -> &'static str {
        "power_budget"
    }

    fn name(&self) -> &'static str {
        "Backup Power Budget"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        if !conditions.power_available && conditions.et0 < UNPOWERED_MIN_ET0 {
            return Some(false);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_unpowered_moderate_demand() {
        let c = SystemConditions::new(3.99, 25.0, 50.0, 18, false, 1500);
        assert_eq!(PowerBudgetRule.evaluate(&c), Some(false));
    }

    #[test]
    fn defers_when_powered_or_high_demand() {
        let powered = SystemConditions::new(3.0, 25.0, 50.0, 18, true, 1500);
        let high = SystemConditions::new(4.0, 25.0, 50.0, 18, false, 1500);
        assert_eq!(PowerBudgetRule.evaluate(&powered), None);
        assert_eq!(PowerBudgetRule.evaluate(&high), None);
    }
}
