use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use crate::summary::DaySummary;
use crate::units::convert;

/// Short-term forecast summary attached to a time point
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outlook {
    pub trend_symbol: Option<String>,
}

impl Outlook {
    pub fn new(symbol: &str) -> Self {
        Outlook { trend_symbol: Some(symbol.to_string()) }
    }
}

/// One timestamped reading plus whatever outlooks the provider attached to it.
/// Readings are optional since the provider does not guarantee them for every point.
///
#[derive(Debug, Clone, PartialEq)]
pub struct TimePoint {
    pub time: DateTime<Utc>,
    pub temperature: Option<f64>,
    pub pressure_at_sea_level: Option<f64>,
    pub next_1_hours: Option<Outlook>,
    pub next_6_hours: Option<Outlook>,
    pub next_12_hours: Option<Outlook>,
}

impl TimePoint {
    /// Returns a time point with both instant readings and no outlooks
    ///
    /// # Arguments
    ///
    /// * 'time' - time of the reading
    /// * 'temperature' - air temperature in Celsius
    /// * 'pressure' - air pressure at sea level in hPa
    pub fn reading(time: DateTime<Utc>, temperature: f64, pressure: f64) -> Self {
        TimePoint {
            time,
            temperature: Some(temperature),
            pressure_at_sea_level: Some(pressure),
            next_1_hours: None,
            next_6_hours: None,
            next_12_hours: None,
        }
    }
}

/// Ordered timeseries as received from the forecast provider
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawForecast {
    pub timeseries: Vec<TimePoint>,
}

/// Serialized through `Display`/`FromStr` so config files and queries accept "c"/"f"
/// in any case as well as the full names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, SerializeDisplay, DeserializeFromStr)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "celsius"),
            TemperatureUnit::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(format!("unknown temperature unit: {}", other)),
        }
    }
}

/// Display-ready summary for one calendar day.
///
/// `temperature_celsius` keeps the aggregated value while `temperature_display`
/// follows the unit the card is currently expressed in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCard {
    pub day: NaiveDate,
    pub date: DateTime<Utc>,
    pub temperature_celsius: i32,
    pub temperature_display: i32,
    pub pressure_display: i32,
    pub trend: String,
    pub unit: TemperatureUnit,
}

impl DailyCard {
    /// Creates a card in Celsius from an aggregated day
    ///
    /// # Arguments
    ///
    /// * 'day' - the calendar day the card represents
    /// * 'summary' - aggregated values for that day
    pub fn new(day: NaiveDate, summary: DaySummary) -> Self {
        DailyCard {
            day,
            date: summary.date,
            temperature_celsius: summary.temperature,
            temperature_display: summary.temperature,
            pressure_display: summary.pressure,
            trend: summary.trend,
            unit: TemperatureUnit::Celsius,
        }
    }

    /// Converts the displayed temperature in place.
    ///
    /// Conversion starts from the currently displayed value, so toggling back and forth
    /// may drift by a degree due to rounding.
    ///
    /// # Arguments
    ///
    /// * 'target' - unit to express the card in
    pub fn change_unit(&mut self, target: TemperatureUnit) {
        if self.unit == target {
            return;
        }
        self.temperature_display = convert(self.temperature_display, target);
        self.unit = target;
    }
}
