//! Implements ClockPort. System clock in a fixed timezone, and a frozen clock for tests/replays.

use crate::domain::DomainError;
use crate::ports::ClockPort;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Wall clock converted into the reference timezone on every call.
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> Result<DateTime<Tz>, DomainError> {
        Ok(Utc::now().with_timezone(&self.tz))
    }
}

/// Always returns the same instant.
pub struct FixedClock {
    instant: DateTime<Tz>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }

    /// Clock frozen at a local wall time in `tz`. Fails on nonexistent or ambiguous local times.
    pub fn at_local(tz: Tz, local: NaiveDateTime) -> Result<Self, DomainError> {
        tz.from_local_datetime(&local)
            .single()
            .map(Self::new)
            .ok_or_else(|| DomainError::Clock(format!("{local} is not a unique time in {tz}")))
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> Result<DateTime<Tz>, DomainError> {
        Ok(self.instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use chrono_tz::Asia::Tokyo;

    #[test]
    fn test_fixed_clock_today_uses_reference_timezone() {
        // 2025-01-15 23:30 UTC is already 2025-01-16 in Tokyo.
        let utc = Utc.with_ymd_and_hms(2025, 1, 15, 23, 30, 0).unwrap();
        let clock = FixedClock::new(utc.with_timezone(&Tokyo));
        assert_eq!(
            clock.today().unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
        );
    }

    #[test]
    fn test_at_local() {
        let local = NaiveDate::from_ymd_opt(2025, 3, 31)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let clock = FixedClock::at_local(Tokyo, local).unwrap();
        assert_eq!(clock.now().unwrap().hour(), 8);
    }

    #[test]
    fn test_system_clock_reports_configured_zone() {
        let now = SystemClock::new(Tokyo).now().unwrap();
        assert_eq!(now.timezone(), Tokyo);
    }
}
