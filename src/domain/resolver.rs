//! Alias resolution: binding -> canonical weekday.
//!
//! Fixed bindings never touch the clock. Relative bindings ask for the reference date
//! each time they are resolved, so "明日" means a different day depending on when the
//! message arrives.

use super::entities::Weekday;
use super::errors::DomainError;
use super::vocabulary::{AliasBinding, DayOffset};
use chrono::{Datelike, Days, NaiveDate};

/// Resolve one binding. `today` is called only for relative bindings, once per call.
pub fn resolve<F>(binding: AliasBinding, today: F) -> Result<Weekday, DomainError>
where
    F: FnOnce() -> Result<NaiveDate, DomainError>,
{
    match binding {
        AliasBinding::Fixed(day) => Ok(day),
        AliasBinding::Relative(offset) => weekday_after(today()?, offset),
    }
}

/// Weekday of `date + offset` calendar days.
pub fn weekday_after(date: NaiveDate, offset: DayOffset) -> Result<Weekday, DomainError> {
    date.checked_add_days(Days::new(u64::from(offset.0)))
        .map(|d| Weekday::from(d.weekday()))
        .ok_or_else(|| DomainError::Clock(format!("{date} + {} days is out of range", offset.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_binding_does_not_read_clock() {
        let day = resolve(AliasBinding::Fixed(Weekday::Thursday), || {
            panic!("clock must not be read")
        })
        .unwrap();
        assert_eq!(day, Weekday::Thursday);
    }

    #[test]
    fn test_today_and_tomorrow() {
        // 2025-01-15 is a Wednesday.
        let today = || Ok(date(2025, 1, 15));
        assert_eq!(
            resolve(AliasBinding::Relative(DayOffset::TODAY), today).unwrap(),
            Weekday::Wednesday
        );
        assert_eq!(
            resolve(AliasBinding::Relative(DayOffset::TOMORROW), today).unwrap(),
            Weekday::Thursday
        );
    }

    #[test]
    fn test_tomorrow_crosses_month_and_year() {
        // 2025-01-31 Friday -> 2025-02-01 Saturday.
        assert_eq!(
            weekday_after(date(2025, 1, 31), DayOffset::TOMORROW).unwrap(),
            Weekday::Saturday
        );
        // 2024-02-29 Thursday (leap day) -> 2024-03-01 Friday.
        assert_eq!(
            weekday_after(date(2024, 2, 29), DayOffset::TOMORROW).unwrap(),
            Weekday::Friday
        );
        // 2025-12-31 Wednesday -> 2026-01-01 Thursday.
        assert_eq!(
            weekday_after(date(2025, 12, 31), DayOffset::TOMORROW).unwrap(),
            Weekday::Thursday
        );
    }

    #[test]
    fn test_clock_failure_propagates() {
        let err = resolve(AliasBinding::Relative(DayOffset::TODAY), || {
            Err(DomainError::Clock("unavailable".into()))
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Clock(_)));
    }

    #[test]
    fn test_out_of_range_date_is_an_error() {
        assert!(weekday_after(NaiveDate::MAX, DayOffset::TOMORROW).is_err());
    }
}
