use chrono::{NaiveDate, TimeZone, Utc};
use log::info;
use crate::forecast::{RawForecast, TemperatureUnit};
use crate::summary::{build_cards, change_unit, CardSlot, DayWindow, ForecastContext};

/// Holds the latest forecast and the cards currently shown.
///
/// The dashboard does no locking of its own; callers sharing it between tasks serialize
/// access (the service keeps it behind a mutex).
#[derive(Debug)]
pub struct Dashboard<Tz: TimeZone> {
    tz: Tz,
    window: DayWindow,
    count: usize,
    offset: i64,
    unit: TemperatureUnit,
    forecast: Option<RawForecast>,
    cards: Vec<CardSlot>,
}

impl<Tz: TimeZone> Dashboard<Tz> {
    /// Returns an empty dashboard waiting for its first forecast
    ///
    /// # Arguments
    ///
    /// * 'tz' - time zone calendar days are evaluated in
    /// * 'window' - daytime window for days other than today
    /// * 'count' - number of cards to build
    /// * 'offset' - offset in days of the first card relative to today
    /// * 'unit' - unit cards are expressed in
    pub fn new(tz: Tz, window: DayWindow, count: usize, offset: i64, unit: TemperatureUnit) -> Self {
        Dashboard { tz, window, count, offset, unit, forecast: None, cards: Vec::new() }
    }

    /// Replaces the forecast, cards are left untouched until the next `set_cards`
    ///
    /// # Arguments
    ///
    /// * 'forecast' - the newly received forecast
    pub fn set_forecast(&mut self, forecast: RawForecast) {
        info!("received forecast with {} points", forecast.timeseries.len());
        self.forecast = Some(forecast);
    }

    /// Rebuilds the cards starting at the given offset, in the current unit
    ///
    /// # Arguments
    ///
    /// * 'today' - the current calendar day
    /// * 'offset' - offset in days of the first card relative to today
    pub fn set_cards(&mut self, today: NaiveDate, offset: i64) {
        self.offset = offset;

        let Some(forecast) = &self.forecast else {
            self.cards.clear();
            return;
        };

        let ctx = ForecastContext::new(self.tz.clone(), today, self.window);
        let mut cards = build_cards(forecast, self.count, offset, &ctx);
        change_unit(&mut cards, self.unit);
        self.cards = cards;
    }

    /// Rebuilds the cards for the current date at the current offset
    ///
    pub fn refresh_cards(&mut self) {
        let today = Utc::now().with_timezone(&self.tz).date_naive();
        self.set_cards(today, self.offset);
    }

    /// Converts all cards into the given unit, cards already in that unit are left as is
    ///
    /// # Arguments
    ///
    /// * 'unit' - unit to express the cards in
    pub fn change_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
        change_unit(&mut self.cards, unit);
    }

    pub fn cards(&self) -> &[CardSlot] {
        &self.cards
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn has_forecast(&self) -> bool {
        self.forecast.is_some()
    }
}
