use std::fmt;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryError {
    MissingData { day: NaiveDate },
    MalformedPoint { time: DateTime<Utc>, field: &'static str },
    DateOutOfRange { offset: i64 },
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SummaryError::MissingData { day } =>
                write!(f, "SummaryError::MissingData: no qualifying readings for {}", day),
            SummaryError::MalformedPoint { time, field } =>
                write!(f, "SummaryError::MalformedPoint: {} is missing {}", time, field),
            SummaryError::DateOutOfRange { offset } =>
                write!(f, "SummaryError::DateOutOfRange: day offset {} is not representable", offset),
        }
    }
}
