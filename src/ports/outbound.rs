//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ReminderKind, ReminderSettings, ScheduleEntry, UserId, Weekday};
use crate::ports::ReplyMessage;
use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

/// Whether an upsert created a new row or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Weekly schedule store, scoped per user.
#[async_trait::async_trait]
pub trait ScheduleStore: Send + Sync {
    /// The row for `day`, or `None` when nothing is registered. A miss is not an error.
    async fn lookup_schedule(
        &self,
        user: &UserId,
        day: Weekday,
    ) -> Result<Option<ScheduleEntry>, DomainError>;

    /// All rows of the user, in Monday..Sunday order.
    async fn list_schedules(&self, user: &UserId) -> Result<Vec<ScheduleEntry>, DomainError>;

    /// Insert or replace the row for `entry.weekday`.
    async fn upsert_schedule(
        &self,
        user: &UserId,
        entry: &ScheduleEntry,
    ) -> Result<UpsertOutcome, DomainError>;

    /// Reminder times of the user; all off when never set.
    async fn reminder_settings(&self, user: &UserId) -> Result<ReminderSettings, DomainError>;

    /// Set (`Some`) or stop (`None`) one reminder.
    async fn set_reminder_time(
        &self,
        user: &UserId,
        kind: ReminderKind,
        at: Option<NaiveTime>,
    ) -> Result<(), DomainError>;

    /// Every user with at least one reminder on.
    async fn reminder_users(&self) -> Result<Vec<(UserId, ReminderSettings)>, DomainError>;
}

/// Pushes a message to a user outside of a reply (reminders).
#[async_trait::async_trait]
pub trait NotifierPort: Send + Sync {
    async fn push(&self, user: &UserId, message: &ReplyMessage) -> Result<(), DomainError>;
}

/// Current instant in the fixed reference timezone.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> Result<DateTime<Tz>, DomainError>;

    /// Calendar date of [`ClockPort::now`] in the reference timezone.
    fn today(&self) -> Result<NaiveDate, DomainError> {
        self.now().map(|t| t.date_naive())
    }
}
