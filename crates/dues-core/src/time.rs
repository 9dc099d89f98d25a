use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::CoreError;

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn on(date: NaiveDate) -> Self {
        Self(start_of_day_utc(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Midnight UTC of `date`, the instant a due date takes effect.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// A due date applies from midnight UTC of that day onwards.
pub fn is_due(due_date: NaiveDate, now: DateTime<Utc>) -> bool {
    start_of_day_utc(due_date) <= now
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| CoreError::Validation(format!("invalid date `{}`: {}", raw.trim(), err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn quota_due_today_is_due_from_midnight() {
        let due = date(2024, 5, 1);
        assert!(is_due(due, start_of_day_utc(due)));
        assert!(!is_due(due, start_of_day_utc(due) - Duration::seconds(1)));
    }

    #[test]
    fn fixed_clock_reports_requested_day() {
        let clock = FixedClock::on(date(2024, 2, 29));
        assert_eq!(clock.today(), date(2024, 2, 29));
    }

    #[test]
    fn parse_date_rejects_non_iso_input() {
        assert_eq!(parse_date(" 2024-01-31 ").unwrap(), date(2024, 1, 31));
        let err = parse_date("31/01/2024").expect_err("non-iso date");
        assert!(err.to_string().contains("31/01/2024"));
    }
}
