pub mod errors;
mod aggregate;
mod bucket;
mod trend;

use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use log::{debug, warn};
use crate::forecast::{DailyCard, RawForecast, TemperatureUnit};
use crate::summary::errors::SummaryError;

pub use aggregate::{aggregate, readings, DaySummary};
pub use bucket::{bucket, DayWindow};
pub use trend::{resolve_trend, UNKNOWN_TREND};

/// One slot per requested day, either a card or the reason it could not be built
pub type CardSlot = Result<DailyCard, SummaryError>;

/// Everything the summarizer needs to know about "where" and "when" it runs
///
#[derive(Debug, Clone)]
pub struct ForecastContext<Tz: TimeZone> {
    pub tz: Tz,
    pub today: NaiveDate,
    pub window: DayWindow,
}

impl<Tz: TimeZone> ForecastContext<Tz> {
    pub fn new(tz: Tz, today: NaiveDate, window: DayWindow) -> Self {
        ForecastContext { tz, today, window }
    }

    /// Returns a context where today is the current date in the given time zone
    ///
    /// # Arguments
    ///
    /// * 'tz' - time zone that calendar days are evaluated in
    /// * 'window' - daytime window for days other than today
    pub fn now(tz: Tz, window: DayWindow) -> Self {
        let today = Utc::now().with_timezone(&tz).date_naive();
        ForecastContext { tz, today, window }
    }
}

/// Summarizes a single calendar day into a card
///
/// # Arguments
///
/// * 'raw' - the forecast to summarize
/// * 'day' - the calendar day
/// * 'ctx' - summarizer context
pub fn summarize<Tz: TimeZone>(raw: &RawForecast, day: NaiveDate, ctx: &ForecastContext<Tz>) -> CardSlot {
    let entries = bucket(raw, day, ctx);
    if entries.is_empty() {
        return Err(SummaryError::MissingData { day });
    }

    let summary = aggregate(&entries, day)?;
    debug!("summarized {} from {} points: {:?}", day, entries.len(), summary);

    Ok(DailyCard::new(day, summary))
}

/// Builds cards for `count` consecutive days starting at today plus `start_offset_days`.
///
/// The result always has exactly `count` slots in chronological order. A day that cannot
/// be summarized keeps its position as an error slot naming the day.
///
/// # Arguments
///
/// * 'raw' - the forecast to summarize
/// * 'count' - number of days
/// * 'start_offset_days' - offset of the first day relative to today
/// * 'ctx' - summarizer context
pub fn build_cards<Tz: TimeZone>(
    raw: &RawForecast,
    count: usize,
    start_offset_days: i64,
    ctx: &ForecastContext<Tz>,
) -> Vec<CardSlot> {
    (0..count as i64)
        .map(|i| {
            let offset = start_offset_days
                .checked_add(i)
                .ok_or(SummaryError::DateOutOfRange { offset: start_offset_days })?;
            let day = TimeDelta::try_days(offset)
                .and_then(|delta| ctx.today.checked_add_signed(delta))
                .ok_or(SummaryError::DateOutOfRange { offset })?;

            summarize(raw, day, ctx).inspect_err(|e| warn!("no card for {}: {}", day, e))
        })
        .collect()
}

/// Expresses every available card in the target unit
///
/// # Arguments
///
/// * 'cards' - card slots to convert in place
/// * 'target' - unit to convert into
pub fn change_unit(cards: &mut [CardSlot], target: TemperatureUnit) {
    for card in cards.iter_mut().flatten() {
        card.change_unit(target);
    }
}
