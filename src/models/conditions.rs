use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationMode {
    #[default]
    Normal,
    Conservation,
    Extreme,
}

impl IrrigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationMode::Normal => "normal",
            IrrigationMode::Conservation => "conservation",
            IrrigationMode::Extreme => "extreme",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(IrrigationMode::Normal),
            "conservation" | "conserve" => Some(IrrigationMode::Conservation),
            "extreme" => Some(IrrigationMode::Extreme),
            _ => None,
        }
    }

    pub fn all() -> &'static [IrrigationMode] {
        &[
            IrrigationMode::Normal,
            IrrigationMode::Conservation,
            IrrigationMode::Extreme,
        ]
    }
}

impl std::fmt::Display for IrrigationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of everything the decision engine looks at for one evaluation.
///
/// The engine treats `et0` as opaque: it is never recomputed or checked for
/// provenance, so an invalid-estimate sentinel simply falls through the
/// low-demand rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemConditions {
    /// Reference evapotranspiration, mm/day
    pub et0: f64,
    /// Air temperature, °C
    pub temperature: f64,
    /// Relative humidity, %. Recorded but not consulted by any rule.
    pub humidity: f64,
    /// Hour of day. Not range-checked.
    pub hour: i32,
    pub power_available: bool,
    /// Water reserve, mL
    pub water_level: u32,
    #[serde(default)]
    pub mode: IrrigationMode,
}

impl SystemConditions {
    pub fn new(
        et0: f64,
        temperature: f64,
        humidity: f64,
        hour: i32,
        power_available: bool,
        water_level: u32,
    ) -> Self {
        Self {
            et0,
            temperature,
            humidity,
            hour,
            power_available,
            water_level,
            mode: IrrigationMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: IrrigationMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_str_valid() {
        assert_eq!(IrrigationMode::from_str("normal"), Some(IrrigationMode::Normal));
        assert_eq!(IrrigationMode::from_str("Normal"), Some(IrrigationMode::Normal));
        assert_eq!(
            IrrigationMode::from_str("CONSERVATION"),
            Some(IrrigationMode::Conservation)
        );
        assert_eq!(
            IrrigationMode::from_str(" extreme "),
            Some(IrrigationMode::Extreme)
        );
    }

    #[test]
    fn mode_from_str_invalid() {
        assert_eq!(IrrigationMode::from_str(""), None);
        assert_eq!(IrrigationMode::from_str("eco"), None);
    }

    #[test]
    fn mode_round_trip() {
        for mode in IrrigationMode::all() {
            assert_eq!(
                IrrigationMode::from_str(&mode.to_string()),
                Some(*mode),
                "Round-trip failed for {:?}",
                mode
            );
        }
    }

    #[test]
    fn mode_defaults_to_normal() {
        assert_eq!(IrrigationMode::default(), IrrigationMode::Normal);
        let conditions = SystemConditions::new(4.5, 28.0, 60.0, 8, true, 3000);
        assert_eq!(conditions.mode, IrrigationMode::Normal);
    }

    #[test]
    fn with_mode_leaves_original_untouched() {
        let base = SystemConditions::new(4.5, 28.0, 60.0, 8, true, 3000);
        let extreme = base.with_mode(IrrigationMode::Extreme);
        assert_eq!(base.mode, IrrigationMode::Normal);
        assert_eq!(extreme.mode, IrrigationMode::Extreme);
        assert_eq!(extreme.et0, base.et0);
    }

    #[test]
    fn conditions_deserialize_with_default_mode() {
        let json = r#"{
            "et0": 6.0, "temperature": 35.0, "humidity": 45.0, "hour": 14,
            "power_available": true, "water_level": 2000
        }"#;
        let conditions: SystemConditions = serde_json::from_str(json).unwrap();
        assert_eq!(conditions.mode, IrrigationMode::Normal);
        assert_eq!(conditions.hour, 14);

        let json = r#"{
            "et0": 7.5, "temperature": 38.0, "humidity": 40.0, "hour": 12,
            "power_available": true, "water_level": 4000, "mode": "extreme"
        }"#;
        let conditions: SystemConditions = serde_json::from_str(json).unwrap();
        assert_eq!(conditions.mode, IrrigationMode::Extreme);
    }
}
