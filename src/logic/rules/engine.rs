use super::{
    default_threshold::DefaultThresholdRule, extreme_mode::ExtremeModeRule,
    heat_override::HeatOverrideRule, low_demand::LowDemandRule,
    optimal_window::OptimalWindowRule, power_budget::PowerBudgetRule,
    water_reserve::WaterReserveRule, Rule,
};
use crate::models::SystemConditions;

/// Which rule settled the gating question, and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleVerdict {
    pub rule_id: &'static str,
    pub rule_name: &'static str,
    pub irrigate: bool,
}

impl RuleVerdict {
    /// Reported if every rule defers. Fails closed.
    fn unmatched() -> Self {
        Self {
            rule_id: "unmatched",
            rule_name: "No Rule Matched",
            irrigate: false,
        }
    }
}

/// Ordered gating cascade. The first rule returning a verdict wins; order
/// is significant and fixed at construction.
pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(LowDemandRule),
            Box::new(WaterReserveRule),
            Box::new(PowerBudgetRule),
            Box::new(OptimalWindowRule),
            Box::new(HeatOverrideRule),
            Box::new(ExtremeModeRule),
            Box::new(DefaultThresholdRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, conditions: &SystemConditions) -> RuleVerdict {
        self.rules
            .iter()
            .find_map(|rule| {
                rule.evaluate(conditions).map(|irrigate| RuleVerdict {
                    rule_id: rule.id(),
                    rule_name: rule.name(),
                    irrigate,
                })
            })
            .unwrap_or_else(RuleVerdict::unmatched)
    }

    pub fn evaluate_rule(&self, rule_id: &str, conditions: &SystemConditions) -> Option<bool> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(conditions))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RulesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RulesEngine")
            .field("rules", &self.list_rules())
            .finish()
    }
}
