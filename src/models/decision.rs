use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine output. `duration_secs` is 0 exactly when `should_irrigate` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationDecision {
    pub should_irrigate: bool,
    pub duration_secs: i32,
}

impl IrrigationDecision {
    pub fn skip() -> Self {
        Self {
            should_irrigate: false,
            duration_secs: 0,
        }
    }

    pub fn irrigate(duration_secs: i32) -> Self {
        Self {
            should_irrigate: true,
            duration_secs,
        }
    }

    pub fn as_tuple(&self) -> (bool, i32) {
        (self.should_irrigate, self.duration_secs)
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs.max(0) as u64)
    }
}

impl std::fmt::Display for IrrigationDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.should_irrigate {
            write!(f, "IRRIGATE for {} seconds", self.duration_secs)
        } else {
            write!(f, "SKIP")
        }
    }
}

/// A decision together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub rule_id: &'static str,
    pub rule_name: &'static str,
    pub decision: IrrigationDecision,
}
