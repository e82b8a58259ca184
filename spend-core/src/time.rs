//! Time utilities: summary windows and user-supplied dates.

use anyhow::{bail, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Rolling summary window ending now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Window {
    #[default]
    Week,
    Month,
}

impl Window {
    pub fn days(&self) -> i64 {
        match self {
            Window::Week => 7,
            Window::Month => 30,
        }
    }

    /// Inclusive bounds: `now` minus `days - 1` days, up to `now`.
    pub fn bounds(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (now - Duration::days(self.days() - 1), now)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days())
    }
}

impl FromStr for Window {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "7d" | "7" | "week" => Ok(Window::Week),
            "30d" | "30" | "month" => Ok(Window::Month),
            other => bail!("invalid window '{other}' (expected 7d or 30d)"),
        }
    }
}

/// Parse an occurrence date given as RFC3339 or plain `YYYY-MM-DD` (midnight UTC).
pub fn parse_occurred_at(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{s}': {e}"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_week_bounds() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 18, 0, 0).unwrap();
        let (start, end) = Window::Week.bounds(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 3, 4, 18, 0, 0).unwrap());
        assert_eq!(end, now);
    }

    #[test]
    fn test_window_from_str() {
        assert_eq!("30d".parse::<Window>().unwrap(), Window::Month);
        assert_eq!("7d".parse::<Window>().unwrap(), Window::Week);
        assert!("90d".parse::<Window>().is_err());
    }

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_occurred_at("2026-02-20").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-02-20T00:00:00+00:00");
        assert!(parse_occurred_at("20/02/2026").is_err());
    }
}
