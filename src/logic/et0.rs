use super::calculations::{
    actual_vapor_pressure, atmospheric_pressure, psychrometric_constant,
    saturation_vapor_pressure, vapor_pressure_slope,
};
use crate::models::{Et0Estimate, InvalidEt0, WeatherSample, MAX_ET0};
use serde::Serialize;

pub const DEFAULT_WIND_SPEED: f64 = 2.0;
pub const DEFAULT_ALTITUDE: f64 = 0.0;

/// Site constants derived once from altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphericConstants {
    pub pressure_kpa: f64,
    pub gamma: f64,
}

impl AtmosphericConstants {
    pub fn for_altitude(altitude_m: f64) -> Self {
        let pressure_kpa = atmospheric_pressure(altitude_m);
        Self {
            pressure_kpa,
            gamma: psychrometric_constant(pressure_kpa),
        }
    }
}

/// Reference evapotranspiration estimator (FAO Penman-Monteith, reference grass)
///
/// Wind speed and altitude are fixed when the estimator is built. The
/// atmospheric constants are derived at that point and never change, so
/// an estimator can be shared freely across threads.
///
/// Accepted inputs:
/// - Temperature: -10 to 50 °C
/// - Relative humidity: 0 to 100 %
/// - Radiation: >= 0 MJ/m²/day
///
/// Anything else, and any result outside 0-15 mm/day, yields
/// [`Et0Estimate::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Et0Estimator {
    wind_speed: f64,
    altitude: f64,
    constants: AtmosphericConstants,
}

impl Et0Estimator {
    pub fn new(wind_speed: f64, altitude: f64) -> Self {
        Self {
            wind_speed,
            altitude,
            constants: AtmosphericConstants::for_altitude(altitude),
        }
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn constants(&self) -> AtmosphericConstants {
        self.constants
    }

    pub fn calculate(&self, temperature: f64, humidity: f64, radiation: f64) -> Et0Estimate {
        self.calculate_with_wind(temperature, humidity, radiation, self.wind_speed)
    }

    /// Same as [`calculate`](Self::calculate) but reports invalid results as
    /// the `-1` sentinel.
    pub fn calculate_raw(&self, temperature: f64, humidity: f64, radiation: f64) -> f64 {
        self.calculate(temperature, humidity, radiation).sentinel()
    }

    /// Estimate from a sample. A wind speed carried by the sample overrides
    /// the configured one for this call only.
    pub fn estimate(&self, sample: &WeatherSample) -> Et0Estimate {
        self.calculate_with_wind(
            sample.temperature,
            sample.humidity,
            sample.radiation,
            sample.wind_speed.unwrap_or(self.wind_speed),
        )
    }

    fn calculate_with_wind(
        &self,
        temperature: f64,
        humidity: f64,
        radiation: f64,
        wind_speed: f64,
    ) -> Et0Estimate {
        if let Err(reason) = validate_inputs(temperature, humidity, radiation) {
            tracing::debug!(temperature, humidity, radiation, %reason, "ET0 input rejected");
            return Et0Estimate::Invalid(reason);
        }

        let gamma = self.constants.gamma;
        let delta = vapor_pressure_slope(temperature);
        let es = saturation_vapor_pressure(temperature);
        let ea = actual_vapor_pressure(temperature, humidity);

        let numerator = 0.408 * delta * radiation
            + gamma * (900.0 / (temperature + 273.15)) * wind_speed * (es - ea);
        let denominator = delta + gamma * (1.0 + 0.34 * wind_speed);

        if denominator == 0.0 {
            tracing::debug!(temperature, wind_speed, "ET0 denominator is zero");
            return Et0Estimate::Invalid(InvalidEt0::ZeroDenominator);
        }

        let et0 = numerator / denominator;

        // Also rejects NaN produced by a non-finite wind speed
        if !(0.0..=MAX_ET0).contains(&et0) {
            tracing::debug!(et0, "ET0 outside plausible range");
            return Et0Estimate::Invalid(InvalidEt0::OutOfPhysicalRange);
        }

        Et0Estimate::Valid(et0)
    }
}

impl Default for Et0Estimator {
    fn default() -> Self {
        Self::new(DEFAULT_WIND_SPEED, DEFAULT_ALTITUDE)
    }
}

fn validate_inputs(temperature: f64, humidity: f64, radiation: f64) -> Result<(), InvalidEt0> {
    if !(-10.0..=50.0).contains(&temperature) {
        return Err(InvalidEt0::TemperatureOutOfRange);
    }
    if !(0.0..=100.0).contains(&humidity) {
        return Err(InvalidEt0::HumidityOutOfRange);
    }
    if radiation.is_nan() || radiation < 0.0 {
        return Err(InvalidEt0::NegativeRadiation);
    }
    Ok(())
}
