use super::Rule;
use crate::models::SystemConditions;

/// Air temperature above which heat compensation kicks in, °C
pub const HEAT_THRESHOLD_C: f64 = 35.0;
pub const HEAT_OVERRIDE_MIN_ET0: f64 = 3.0;

/// Heat override rule - water more readily in extreme heat, even outside
/// the optimal windows
///
/// Conditions:
/// - Temperature > 35°C -> irrigate iff ET0 > 3.0 mm/day
///
/// Exactly 35°C does not trigger.
pub struct HeatOverrideRule;

impl Rule for HeatOverrideRule {
    fn id(&self) -> &'static str {
        "heat_override"
    }

    fn name(&self) -> &'static str {
        "Heat Override"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        if conditions.temperature > HEAT_THRESHOLD_C {
            return Some(conditions.et0 > HEAT_OVERRIDE_MIN_ET0);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decides_above_threshold() {
        let c = SystemConditions::new(3.2, 36.0, 50.0, 12, true, 3000);
        assert_eq!(HeatOverrideRule.evaluate(&c), Some(true));

        let c = SystemConditions::new(3.0, 36.0, 50.0, 12, true, 3000);
        assert_eq!(HeatOverrideRule.evaluate(&c), Some(false));
    }

    #[test]
    fn threshold_is_exclusive() {
        let c = SystemConditions::new(6.0, 35.0, 50.0, 14, true, 2000);
        assert_eq!(HeatOverrideRule.evaluate(&c), None);
    }
}
