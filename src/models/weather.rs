use serde::{Deserialize, Serialize};

/// One set of validated weather readings handed to the estimator.
///
/// Altitude is not part of the sample: it is fixed per estimator instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Air temperature, °C
    pub temperature: f64,
    /// Relative humidity, %
    pub humidity: f64,
    /// Net radiation, MJ/m²/day
    pub radiation: f64,
    /// Wind speed at 2 m, m/s. Falls back to the estimator's configured speed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
}

impl WeatherSample {
    pub fn new(temperature: f64, humidity: f64, radiation: f64) -> Self {
        Self {
            temperature,
            humidity,
            radiation,
            wind_speed: None,
        }
    }

    pub fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = Some(wind_speed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_builder_pattern() {
        let sample = WeatherSample::new(25.0, 60.0, 8.0);
        assert_eq!(sample.wind_speed, None);

        let windy = sample.with_wind_speed(3.5);
        assert_eq!(windy.wind_speed, Some(3.5));
        assert_eq!(windy.temperature, 25.0);
        // Builder consumes a copy; the original is untouched
        assert_eq!(sample.wind_speed, None);
    }

    #[test]
    fn sample_deserializes_without_wind() {
        let sample: WeatherSample =
            serde_json::from_str(r#"{"temperature": 30.0, "humidity": 50.0, "radiation": 10.0}"#)
                .unwrap();
        assert_eq!(sample, WeatherSample::new(30.0, 50.0, 10.0));
    }
}
