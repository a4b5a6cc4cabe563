use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use crate::forecast::TimePoint;
use crate::summary::errors::SummaryError;
use crate::summary::trend::resolve_trend;
use crate::units::hpa_to_mmhg;

/// Aggregated values for one day, pressure already in mmHg
///
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub temperature: i32,
    pub pressure: i32,
    pub trend: String,
    pub date: DateTime<Utc>,
}

/// Extracts temperature and pressure from a time point
///
/// # Arguments
///
/// * 'point' - the time point to read
pub fn readings(point: &TimePoint) -> Result<(f64, f64), SummaryError> {
    let temperature = point.temperature
        .filter(|t| t.is_finite())
        .ok_or(SummaryError::MalformedPoint { time: point.time, field: "air_temperature" })?;
    let pressure = point.pressure_at_sea_level
        .filter(|p| p.is_finite())
        .ok_or(SummaryError::MalformedPoint { time: point.time, field: "air_pressure_at_sea_level" })?;

    Ok((temperature, pressure))
}

/// Reduces the time points of one day into a summary.
///
/// Points lacking a reading are left out of the averages. Of the remaining points the
/// middle one decides the trend and the first one gives the date of the summary.
///
/// # Arguments
///
/// * 'entries' - the time points of the day, in time order
/// * 'day' - the calendar day being summarized
pub fn aggregate(entries: &[&TimePoint], day: NaiveDate) -> Result<DaySummary, SummaryError> {
    let mut valid: Vec<(&TimePoint, f64, f64)> = Vec::with_capacity(entries.len());
    for &point in entries {
        match readings(point) {
            Ok((t, p)) => valid.push((point, t, p)),
            Err(e) => warn!("excluding point from {}: {}", day, e),
        }
    }

    let (first, _, _) = valid.first().ok_or(SummaryError::MissingData { day })?;
    let (middle, _, _) = valid[valid.len() / 2];

    let count = valid.len() as f64;
    let temperature = valid.iter().map(|(_, t, _)| t).sum::<f64>() / count;
    let pressure = (valid.iter().map(|(_, _, p)| p).sum::<f64>() / count).round();

    Ok(DaySummary {
        temperature: temperature.round() as i32,
        pressure: hpa_to_mmhg(pressure),
        trend: resolve_trend(middle),
        date: first.time,
    })
}
