use crate::forecast::{Outlook, TimePoint};

/// Label used when a time point carries no usable outlook
pub const UNKNOWN_TREND: &str = "Hmm..";

/// Picks a representative short-term forecast label for a time point.
///
/// Not every point carries every horizon, so the 6 hour outlook is preferred,
/// then 12 hours, then 1 hour. An outlook without a symbol is skipped.
///
/// # Arguments
///
/// * 'point' - the time point to resolve a trend for
pub fn resolve_trend(point: &TimePoint) -> String {
    [&point.next_6_hours, &point.next_12_hours, &point.next_1_hours]
        .into_iter()
        .flatten()
        .find_map(|o: &Outlook| o.trend_symbol.clone())
        .unwrap_or_else(|| UNKNOWN_TREND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn point() -> TimePoint {
        TimePoint::reading(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(), 10.0, 1000.0)
    }

    #[test]
    fn test_prefers_next_6_hours() {
        let mut p = point();
        p.next_1_hours = Some(Outlook::new("rain"));
        p.next_6_hours = Some(Outlook::new("cloudy"));
        p.next_12_hours = Some(Outlook::new("clearsky_day"));
        assert_eq!(resolve_trend(&p), "cloudy");
    }

    #[test]
    fn test_falls_back_to_next_12_hours() {
        let mut p = point();
        p.next_12_hours = Some(Outlook::new("X"));
        assert_eq!(resolve_trend(&p), "X");
    }

    #[test]
    fn test_falls_back_to_next_1_hours() {
        let mut p = point();
        p.next_1_hours = Some(Outlook::new("fog"));
        assert_eq!(resolve_trend(&p), "fog");
    }

    #[test]
    fn test_outlook_without_symbol_is_skipped() {
        let mut p = point();
        p.next_6_hours = Some(Outlook::default());
        p.next_1_hours = Some(Outlook::new("snow"));
        assert_eq!(resolve_trend(&p), "snow");
    }

    #[test]
    fn test_placeholder_when_nothing_available() {
        assert_eq!(resolve_trend(&point()), UNKNOWN_TREND);
        assert_eq!(resolve_trend(&point()), "Hmm..");
    }
}
