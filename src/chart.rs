use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::forecast::DailyCard;
use crate::summary::CardSlot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataItem<T> {
    pub x: DateTime<Utc>,
    pub y: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub temperature: Vec<DataItem<i32>>,
    pub pressure: Vec<DataItem<i32>>,
}

impl ChartData {
    pub fn from_cards(cards: &[CardSlot]) -> Self {
        ChartData {
            temperature: temperature_series(cards),
            pressure: pressure_series(cards),
        }
    }
}

/// Returns displayed temperatures of the available cards, in the unit each card is in
///
/// # Arguments
///
/// * 'cards' - card slots as built by the summarizer
pub fn temperature_series(cards: &[CardSlot]) -> Vec<DataItem<i32>> {
    series(cards, |c| c.temperature_display)
}

/// Returns pressure in mmHg of the available cards
///
/// # Arguments
///
/// * 'cards' - card slots as built by the summarizer
pub fn pressure_series(cards: &[CardSlot]) -> Vec<DataItem<i32>> {
    series(cards, |c| c.pressure_display)
}

fn series<T>(cards: &[CardSlot], y: impl Fn(&DailyCard) -> T) -> Vec<DataItem<T>> {
    cards.iter()
        .flatten()
        .map(|c| DataItem { x: c.date, y: y(c) })
        .collect()
}
