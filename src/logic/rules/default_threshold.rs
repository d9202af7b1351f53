use super::Rule;
use crate::models::SystemConditions;

pub const DEFAULT_MIN_ET0: f64 = 3.5;

/// Default threshold rule - final fallback, always decides
///
/// Conditions:
/// - ET0 > 3.5 mm/day -> irrigate
pub struct DefaultThresholdRule;

impl Rule for DefaultThresholdRule {
    fn id(&self) -> &'static str {
        "default_threshold"
    }

    fn name(&self) -> &'static str {
        "Default Demand Threshold"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        Some(conditions.et0 > DEFAULT_MIN_ET0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_decides() {
        let c = SystemConditions::new(3.6, 20.0, 50.0, 12, true, 3000);
        assert_eq!(DefaultThresholdRule.evaluate(&c), Some(true));

        let c = SystemConditions::new(3.5, 20.0, 50.0, 12, true, 3000);
        assert_eq!(DefaultThresholdRule.evaluate(&c), Some(false));
    }
}
