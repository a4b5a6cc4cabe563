use crate::forecast::TemperatureUnit;

/// Converts pressure from hPa to mmHg, rounded to the nearest integer
///
/// # Arguments
///
/// * 'pressure' - pressure in hPa
pub fn hpa_to_mmhg(pressure: f64) -> i32 {
    (pressure * 0.75).round() as i32
}

/// Converts a temperature into the target unit, rounded to the nearest integer.
///
/// The value is assumed to be expressed in the other unit. Rounding makes repeated
/// conversions lossy, e.g. 38 F -> 3 C -> 37 F.
///
/// # Arguments
///
/// * 'value' - temperature to convert
/// * 'target' - unit to convert into
pub fn convert(value: i32, target: TemperatureUnit) -> i32 {
    let value = value as f64;
    match target {
        TemperatureUnit::Fahrenheit => (value * 9.0 / 5.0 + 32.0).round() as i32,
        TemperatureUnit::Celsius => ((value - 32.0) * 5.0 / 9.0).round() as i32,
    }
}
