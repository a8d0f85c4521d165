//! Reminder use case: find due night/morning reminders and push them.
//!
//! A reminder is due when the current local time is within `window` after the user's
//! configured time. The loop runs once per `window`, so every configured time is seen once.
//! Sends are remembered per (user, kind, date) so a reminder never goes out twice a day.

use crate::domain::reminder::is_due;
use crate::domain::{DomainError, ReminderKind, UserId, resolver};
use crate::ports::{ClockPort, NotifierPort, ReplyComposer, ReplyMessage, ScheduleStore};
use chrono::{DateTime, NaiveDate, TimeDelta};
use chrono_tz::Tz;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// A rendered reminder ready to push.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub user: UserId,
    pub kind: ReminderKind,
    pub message: ReplyMessage,
}

pub struct ReminderService {
    store: Arc<dyn ScheduleStore>,
    clock: Arc<dyn ClockPort>,
    composer: Arc<dyn ReplyComposer>,
    window: Duration,
    sent: Mutex<HashSet<(UserId, ReminderKind, NaiveDate)>>,
}

impl ReminderService {
    pub fn new(
        store: Arc<dyn ScheduleStore>,
        clock: Arc<dyn ClockPort>,
        composer: Arc<dyn ReplyComposer>,
        window: Duration,
    ) -> Self {
        Self {
            store,
            clock,
            composer,
            window,
            sent: Mutex::new(HashSet::new()),
        }
    }

    /// Reminders due at `now`. Users without a row for the target day get nothing.
    pub async fn reminders_due(&self, now: DateTime<Tz>) -> Result<Vec<Reminder>, DomainError> {
        let window = TimeDelta::from_std(self.window)
            .map_err(|e| DomainError::Config(format!("reminder window: {e}")))?;
        let today = now.date_naive();
        let mut due = Vec::new();

        for (user, settings) in self.store.reminder_users().await? {
            for kind in ReminderKind::ALL {
                let Some(at) = settings.time(kind) else {
                    continue;
                };
                let key = (user.clone(), kind, today);
                if !is_due(now.time(), at, window) || self.sent.lock().await.contains(&key) {
                    continue;
                }
                let day = resolver::weekday_after(today, kind.target_offset())?;
                let Some(entry) = self.store.lookup_schedule(&user, day).await? else {
                    debug!(user = %user, %kind, day = %day, "nothing to remind");
                    continue;
                };
                {
                    let mut sent = self.sent.lock().await;
                    sent.retain(|(_, _, d)| *d >= today);
                    sent.insert(key);
                }
                due.push(Reminder {
                    message: self.composer.reminder(kind, &entry),
                    user: user.clone(),
                    kind,
                });
            }
        }
        Ok(due)
    }

    /// Check once per window and push what is due. Runs until the process exits.
    pub async fn run_loop(&self, notifier: Arc<dyn NotifierPort>) -> Result<(), DomainError> {
        info!(window_secs = self.window.as_secs(), "reminder loop started");
        loop {
            let now = self.clock.now()?;
            match self.reminders_due(now).await {
                Ok(due) => {
                    for reminder in due {
                        if let Err(e) = notifier.push(&reminder.user, &reminder.message).await {
                            warn!(user = %reminder.user, kind = %reminder.kind, error = %e, "reminder push failed");
                        } else {
                            info!(user = %reminder.user, kind = %reminder.kind, "reminder sent");
                        }
                    }
                }
                Err(e) => warn!(error = %e, "reminder check failed"),
            }
            tokio::time::sleep(self.window).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::persistence::StaticScheduleStore;
    use crate::adapters::reply::TextComposer;
    use crate::domain::{ScheduleEntry, Weekday};
    use chrono::NaiveTime;
    use chrono_tz::Asia::Tokyo;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        let local = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap();
        FixedClock::at_local(Tokyo, local).unwrap().now().unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn service(entries: Vec<ScheduleEntry>) -> (Arc<StaticScheduleStore>, ReminderService) {
        let store = Arc::new(StaticScheduleStore::new(entries));
        let clock = Arc::new(FixedClock::new(at(2025, 1, 15, 0, 0)));
        let svc = ReminderService::new(
            store.clone(),
            clock,
            Arc::new(TextComposer::new()),
            Duration::from_secs(300),
        );
        (store, svc)
    }

    #[tokio::test]
    async fn test_night_reminder_on_last_day_of_month_names_next_month_day() {
        // 2025-01-31 is a Friday; tomorrow is Saturday 2025-02-01.
        let (store, svc) = service(vec![
            ScheduleEntry::new(Weekday::Friday, "缶", None),
            ScheduleEntry::new(Weekday::Saturday, "古紙", Some("紐で縛る".into())),
        ]);
        let user = UserId::new("u1");
        store
            .set_reminder_time(&user, ReminderKind::Night, Some(hm(21, 0)))
            .await
            .unwrap();

        let due = svc.reminders_due(at(2025, 1, 31, 21, 2)).await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, ReminderKind::Night);
        let text = due[0].message.plain_text();
        assert!(text.contains("明日のごみ (土曜)"), "{text}");
        assert!(text.contains("古紙"));
    }

    #[tokio::test]
    async fn test_morning_reminder_is_about_today() {
        let (store, svc) = service(vec![ScheduleEntry::new(Weekday::Wednesday, "ビン", None)]);
        let user = UserId::new("u1");
        store
            .set_reminder_time(&user, ReminderKind::Morning, Some(hm(7, 0)))
            .await
            .unwrap();

        // 2025-01-15 is a Wednesday.
        let due = svc.reminders_due(at(2025, 1, 15, 7, 0)).await.unwrap();
        assert_eq!(due.len(), 1);
        assert!(due[0].message.plain_text().contains("今日のごみ (水曜)"));
    }

    #[tokio::test]
    async fn test_outside_window_or_already_sent_is_not_due() {
        let (store, svc) = service(vec![ScheduleEntry::new(Weekday::Thursday, "プラ", None)]);
        let user = UserId::new("u1");
        store
            .set_reminder_time(&user, ReminderKind::Night, Some(hm(21, 0)))
            .await
            .unwrap();

        assert!(svc.reminders_due(at(2025, 1, 15, 20, 59)).await.unwrap().is_empty());
        assert!(svc.reminders_due(at(2025, 1, 15, 21, 5)).await.unwrap().is_empty());
        assert_eq!(svc.reminders_due(at(2025, 1, 15, 21, 1)).await.unwrap().len(), 1);
        assert!(svc.reminders_due(at(2025, 1, 15, 21, 3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_row_for_target_day_sends_nothing() {
        let (store, svc) = service(vec![]);
        let user = UserId::new("u1");
        store
            .set_reminder_time(&user, ReminderKind::Morning, Some(hm(7, 0)))
            .await
            .unwrap();
        assert!(svc.reminders_due(at(2025, 1, 15, 7, 0)).await.unwrap().is_empty());
    }
}
