use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};
use crate::forecast::{Outlook, RawForecast, TimePoint};

#[serde_as]
#[derive(Deserialize, Default)]
pub struct Details {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub air_temperature: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub air_pressure_at_sea_level: Option<f64>,
}

#[derive(Deserialize, Default)]
pub struct Instant {
    #[serde(default)]
    pub details: Details,
}

#[derive(Deserialize, Default)]
pub struct Summary {
    pub symbol_code: Option<String>,
}

#[derive(Deserialize)]
pub struct Period {
    #[serde(default)]
    pub summary: Summary,
}

#[derive(Deserialize)]
pub struct Data {
    #[serde(default)]
    pub instant: Instant,
    pub next_1_hours: Option<Period>,
    pub next_6_hours: Option<Period>,
    pub next_12_hours: Option<Period>,
}

#[derive(Deserialize)]
pub struct FullTimeSeries {
    pub time: DateTime<Utc>,
    pub data: Data,
}

#[derive(Deserialize)]
pub struct Properties {
    pub timeseries: Vec<FullTimeSeries>,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub properties: Properties,
}

impl From<Period> for Outlook {
    fn from(p: Period) -> Self {
        Outlook { trend_symbol: p.summary.symbol_code }
    }
}

impl From<FullTimeSeries> for TimePoint {
    fn from(ts: FullTimeSeries) -> Self {
        TimePoint {
            time: ts.time,
            temperature: ts.data.instant.details.air_temperature,
            pressure_at_sea_level: ts.data.instant.details.air_pressure_at_sea_level,
            next_1_hours: ts.data.next_1_hours.map(Outlook::from),
            next_6_hours: ts.data.next_6_hours.map(Outlook::from),
            next_12_hours: ts.data.next_12_hours.map(Outlook::from),
        }
    }
}

impl From<FullForecast> for RawForecast {
    fn from(f: FullForecast) -> Self {
        RawForecast {
            timeseries: f.properties.timeseries.into_iter().map(TimePoint::from).collect(),
        }
    }
}
