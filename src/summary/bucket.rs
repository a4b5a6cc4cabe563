use chrono::{Datelike, NaiveDate, TimeZone, Timelike};
use crate::forecast::{RawForecast, TimePoint};
use crate::summary::ForecastContext;

/// Hours of the day whose readings count towards a future day, both bounds exclusive.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub after_hour: u32,
    pub before_hour: u32,
}

impl Default for DayWindow {
    fn default() -> Self {
        DayWindow { after_hour: 10, before_hour: 23 }
    }
}

impl DayWindow {
    pub fn contains(&self, hour: u32) -> bool {
        hour > self.after_hour && hour < self.before_hour
    }
}

/// Returns the time points that belong to the given calendar day.
///
/// Dates and hours are evaluated in the time zone of the context. For the current day
/// every hour qualifies since only the remaining part of it is forecasted, for any other
/// day only hours inside the daytime window are kept. An empty result is a valid outcome.
///
/// # Arguments
///
/// * 'raw' - the forecast to pick points from
/// * 'day' - the calendar day to collect
/// * 'ctx' - time zone, current day and daytime window
pub fn bucket<'a, Tz: TimeZone>(raw: &'a RawForecast, day: NaiveDate, ctx: &ForecastContext<Tz>) -> Vec<&'a TimePoint> {
    let is_today = day == ctx.today;

    raw.timeseries
        .iter()
        .filter(|p| {
            let local = p.time.with_timezone(&ctx.tz);
            let same_day = local.year() == day.year()
                && local.month() == day.month()
                && local.day() == day.day();

            same_day && (is_today || ctx.window.contains(local.hour()))
        })
        .collect()
}
