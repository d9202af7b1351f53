/// Standard sea-level barometric pressure, kPa
pub const SEA_LEVEL_PRESSURE_KPA: f64 = 101.3;

/// Calculate barometric pressure (kPa) at an altitude in metres
/// Simplified ideal gas law with a standard 20°C atmosphere
pub fn atmospheric_pressure(altitude_m: f64) -> f64 {
    SEA_LEVEL_PRESSURE_KPA * ((293.0 - 0.0065 * altitude_m) / 293.0).powf(5.26)
}

/// Psychrometric constant (kPa/°C) for a given barometric pressure
pub fn psychrometric_constant(pressure_kpa: f64) -> f64 {
    0.000665 * pressure_kpa
}

/// Saturation vapor pressure (kPa) at an air temperature in °C
pub fn saturation_vapor_pressure(temp_c: f64) -> f64 {
    0.6108 * ((17.27 * temp_c) / (temp_c + 237.3)).exp()
}

/// Slope of the saturation vapor pressure curve (kPa/°C)
pub fn vapor_pressure_slope(temp_c: f64) -> f64 {
    let es = saturation_vapor_pressure(temp_c);
    (4098.0 * es) / (temp_c + 237.3).powi(2)
}

/// Actual vapor pressure (kPa) from temperature and relative humidity (%)
pub fn actual_vapor_pressure(temp_c: f64, relative_humidity: f64) -> f64 {
    (relative_humidity / 100.0) * saturation_vapor_pressure(temp_c)
}

/// Morning (07-09) and evening (17-19) windows, inclusive, when less of the
/// applied water is lost to evaporation
pub fn is_optimal_time(hour: i32) -> bool {
    (7..=9).contains(&hour) || (17..=19).contains(&hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_at_sea_level() {
        assert!((atmospheric_pressure(0.0) - 101.3).abs() < 1e-9);
    }

    #[test]
    fn pressure_drops_with_altitude() {
        assert!((atmospheric_pressure(15.0) - 101.1228).abs() < 1e-3);
        assert!((atmospheric_pressure(1000.0) - 90.0246).abs() < 1e-3);
        assert!(atmospheric_pressure(2000.0) < atmospheric_pressure(1000.0));
    }

    #[test]
    fn psychrometric_constant_known_values() {
        assert!((psychrometric_constant(101.3) - 0.0673645).abs() < 1e-9);
        assert!((psychrometric_constant(90.0246) - 0.0598664).abs() < 1e-6);
    }

    #[test]
    fn saturation_vapor_pressure_known_values() {
        // 0.6108 kPa at freezing by construction
        assert!((saturation_vapor_pressure(0.0) - 0.6108).abs() < 1e-9);
        // FAO-56 Annex 2 table
        assert!((saturation_vapor_pressure(20.0) - 2.338).abs() < 1e-3);
        assert!((saturation_vapor_pressure(25.0) - 3.168).abs() < 1e-3);
        assert!((saturation_vapor_pressure(35.0) - 5.623).abs() < 1e-3);
    }

    #[test]
    fn vapor_pressure_slope_known_values() {
        assert!((vapor_pressure_slope(20.0) - 0.145).abs() < 1e-3);
        assert!((vapor_pressure_slope(25.0) - 0.189).abs() < 1e-3);
        assert!(vapor_pressure_slope(30.0) > vapor_pressure_slope(25.0));
    }

    #[test]
    fn actual_vapor_pressure_scales_with_humidity() {
        let es = saturation_vapor_pressure(25.0);
        assert!((actual_vapor_pressure(25.0, 100.0) - es).abs() < 1e-12);
        assert!((actual_vapor_pressure(25.0, 60.0) - 0.6 * es).abs() < 1e-12);
        assert_eq!(actual_vapor_pressure(25.0, 0.0), 0.0);
    }

    #[test]
    fn optimal_time_windows() {
        for hour in [7, 8, 9, 17, 18, 19] {
            assert!(is_optimal_time(hour), "hour {} should be optimal", hour);
        }
        for hour in [0, 6, 10, 12, 14, 16, 20, 23] {
            assert!(!is_optimal_time(hour), "hour {} should not be optimal", hour);
        }
    }

    #[test]
    fn optimal_time_ignores_out_of_range_hours() {
        assert!(!is_optimal_time(-1));
        assert!(!is_optimal_time(24));
        assert!(!is_optimal_time(31));
    }
}
