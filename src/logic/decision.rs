use super::calculations::is_optimal_time;
use super::rules::heat_override::HEAT_THRESHOLD_C;
use super::rules::{RulesEngine, MIN_IRRIGATION_ET0};
use crate::models::{IrrigationDecision, IrrigationMode, SystemConditions, Verdict};

pub const DEFAULT_MIN_DURATION: i32 = 5;
pub const DEFAULT_MAX_DURATION: i32 = 60;

/// Seconds of run time per mm/day of ET0 above the floor
const SECONDS_PER_ET0: f64 = 10.0;
const HEAT_FACTOR: f64 = 1.3;
const CONSERVATION_FACTOR: f64 = 0.7;
const EXTREME_FACTOR: f64 = 0.5;
const UNPOWERED_FACTOR: f64 = 0.8;
const OPTIMAL_WINDOW_FACTOR: f64 = 1.1;

/// Turns a [`SystemConditions`] snapshot into an irrigation decision.
///
/// Holds only the duration bounds and the fixed rule cascade; every method
/// is a pure function of its argument, so one engine can serve any number
/// of threads.
#[derive(Debug)]
pub struct IrrigationDecisionEngine {
    min_duration: i32,
    max_duration: i32,
    rules: RulesEngine,
}

impl IrrigationDecisionEngine {
    pub fn new(min_duration: i32, max_duration: i32) -> Self {
        Self {
            min_duration,
            max_duration,
            rules: RulesEngine::new(),
        }
    }

    pub fn min_duration(&self) -> i32 {
        self.min_duration
    }

    pub fn max_duration(&self) -> i32 {
        self.max_duration
    }

    pub fn rules(&self) -> &RulesEngine {
        &self.rules
    }

    pub fn should_irrigate(&self, conditions: &SystemConditions) -> bool {
        self.rules.evaluate(conditions).irrigate
    }

    /// Run time in seconds, computed whether or not the cascade would water.
    ///
    /// The linear base is scaled by heat, mode, power and window multipliers
    /// in that order, truncating toward zero after each one, then clamped to
    /// the configured bounds.
    pub fn calculate_duration(&self, conditions: &SystemConditions) -> i32 {
        let mut secs = ((conditions.et0 - MIN_IRRIGATION_ET0) * SECONDS_PER_ET0) as i32;

        if conditions.temperature > HEAT_THRESHOLD_C {
            secs = scale(secs, HEAT_FACTOR);
        }

        match conditions.mode {
            IrrigationMode::Normal => {}
            IrrigationMode::Conservation => secs = scale(secs, CONSERVATION_FACTOR),
            IrrigationMode::Extreme => secs = scale(secs, EXTREME_FACTOR),
        }

        if !conditions.power_available {
            secs = scale(secs, UNPOWERED_FACTOR);
        }

        if is_optimal_time(conditions.hour) {
            secs = scale(secs, OPTIMAL_WINDOW_FACTOR);
        }

        self.clamp(secs)
    }

    pub fn make_decision(&self, conditions: &SystemConditions) -> IrrigationDecision {
        self.explain(conditions).decision
    }

    /// Like [`make_decision`](Self::make_decision), also naming the rule that
    /// settled it.
    pub fn explain(&self, conditions: &SystemConditions) -> Verdict {
        let verdict = self.rules.evaluate(conditions);

        let decision = if verdict.irrigate {
            IrrigationDecision::irrigate(self.clamp(self.calculate_duration(conditions)))
        } else {
            IrrigationDecision::skip()
        };

        tracing::debug!(
            rule = verdict.rule_id,
            et0 = conditions.et0,
            hour = conditions.hour,
            mode = %conditions.mode,
            irrigate = decision.should_irrigate,
            duration_secs = decision.duration_secs,
            "irrigation decision"
        );

        Verdict {
            rule_id: verdict.rule_id,
            rule_name: verdict.rule_name,
            decision,
        }
    }

    // min() before max(): a minimum above the maximum wins
    fn clamp(&self, secs: i32) -> i32 {
        secs.min(self.max_duration).max(self.min_duration)
    }
}

impl Default for IrrigationDecisionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DURATION, DEFAULT_MAX_DURATION)
    }
}

fn scale(secs: i32, factor: f64) -> i32 {
    (secs as f64 * factor) as i32
}
