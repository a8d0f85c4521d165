//! Message -> reply intent. Tokenize, extract the intent, look up every requested day.
//!
//! - Unrecognized text and "no day given" are reply outcomes, not errors
//! - A store miss for one day does not affect the other days of the same request
//! - Store and clock failures propagate unchanged; nothing is retried here

use crate::domain::{
    DaySchedule, DomainError, Route, Tokenizer, UnrecognizedInput, UserId, extract_intent,
};
use crate::ports::{ClockPort, ScheduleStore};
use std::sync::Arc;
use tracing::debug;

/// What to answer, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyIntent {
    /// The message contained text outside the vocabulary.
    Unrecognized(UnrecognizedInput),
    /// Only modifiers (or nothing) were given.
    NoTarget,
    Help,
    AllDays { detailed: bool },
    /// One lookup per requested weekday, Monday..Sunday.
    Days {
        detailed: bool,
        days: Vec<DaySchedule>,
    },
}

pub struct IntentService {
    store: Arc<dyn ScheduleStore>,
    clock: Arc<dyn ClockPort>,
    tokenizer: Tokenizer<'static>,
}

impl IntentService {
    pub fn new(store: Arc<dyn ScheduleStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            store,
            clock,
            tokenizer: Tokenizer::default(),
        }
    }

    pub async fn process_message(
        &self,
        user: &UserId,
        raw: &str,
    ) -> Result<ReplyIntent, DomainError> {
        let tokens = match self.tokenizer.tokenize(raw) {
            Ok(tokens) => tokens,
            Err(unrecognized) => {
                debug!(user = %user, residue = %unrecognized.residue, "message not understood");
                return Ok(ReplyIntent::Unrecognized(unrecognized));
            }
        };

        let intent = extract_intent(&tokens, || self.clock.today())?;
        debug!(
            user = %user,
            tokens = tokens.len(),
            targets = ?intent.targets(),
            detailed = intent.detailed,
            all_days = intent.all_days,
            help = intent.help_requested,
            "intent extracted"
        );

        let detailed = intent.detailed;
        let days = match intent.route() {
            Route::Help => return Ok(ReplyIntent::Help),
            Route::AllDays => return Ok(ReplyIntent::AllDays { detailed }),
            Route::NoTarget => return Ok(ReplyIntent::NoTarget),
            Route::Days(targets) => targets,
        };

        let mut looked_up = Vec::with_capacity(days.len());
        for &weekday in days {
            let entry = self.store.lookup_schedule(user, weekday).await?;
            looked_up.push(DaySchedule { weekday, entry });
        }

        Ok(ReplyIntent::Days {
            detailed,
            days: looked_up,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::persistence::StaticScheduleStore;
    use crate::domain::{ReminderKind, ReminderSettings, ScheduleEntry, Weekday};
    use crate::ports::UpsertOutcome;
    use chrono::{NaiveDate, NaiveTime};
    use chrono_tz::Asia::Tokyo;

    fn clock_on(y: i32, m: u32, d: u32) -> Arc<dyn ClockPort> {
        let local = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Arc::new(FixedClock::at_local(Tokyo, local).unwrap())
    }

    fn service(entries: Vec<ScheduleEntry>) -> IntentService {
        // 2025-01-15 is a Wednesday.
        IntentService::new(Arc::new(StaticScheduleStore::new(entries)), clock_on(2025, 1, 15))
    }

    fn user() -> UserId {
        UserId::new("u1")
    }

    #[tokio::test]
    async fn test_today_on_wednesday() {
        let svc = service(vec![ScheduleEntry::new(Weekday::Wednesday, "プラ", None)]);
        let got = svc.process_message(&user(), "今日").await.unwrap();
        let ReplyIntent::Days { days, detailed } = got else {
            panic!("expected days, got {got:?}");
        };
        assert!(!detailed);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].weekday, Weekday::Wednesday);
        assert_eq!(days[0].entry.as_ref().unwrap().item, "プラ");
    }

    #[tokio::test]
    async fn test_tomorrow_at_month_end() {
        // 2025-01-31 Friday; tomorrow is Saturday 2025-02-01.
        let svc = IntentService::new(Arc::new(StaticScheduleStore::default()), clock_on(2025, 1, 31));
        let got = svc.process_message(&user(), "あした").await.unwrap();
        let ReplyIntent::Days { days, .. } = got else {
            panic!("expected days");
        };
        assert_eq!(days[0].weekday, Weekday::Saturday);
    }

    #[tokio::test]
    async fn test_unknown_text() {
        let got = service(vec![]).process_message(&user(), "xyz").await.unwrap();
        assert!(matches!(got, ReplyIntent::Unrecognized(u) if u.residue == "xyz"));
    }

    #[tokio::test]
    async fn test_modifier_only_is_no_target() {
        let svc = service(vec![]);
        assert_eq!(svc.process_message(&user(), "詳細").await.unwrap(), ReplyIntent::NoTarget);
        assert_eq!(svc.process_message(&user(), "  ").await.unwrap(), ReplyIntent::NoTarget);
    }

    #[tokio::test]
    async fn test_all_days_wins_over_day_list() {
        let got = service(vec![])
            .process_message(&user(), "全部 月 詳細")
            .await
            .unwrap();
        assert_eq!(got, ReplyIntent::AllDays { detailed: true });
    }

    #[tokio::test]
    async fn test_partial_miss_keeps_every_day() {
        let svc = service(vec![ScheduleEntry::new(Weekday::Sunday, "古紙", None)]);
        let got = svc.process_message(&user(), "日 月").await.unwrap();
        let ReplyIntent::Days { days, .. } = got else {
            panic!("expected days");
        };
        let order: Vec<Weekday> = days.iter().map(|d| d.weekday).collect();
        assert_eq!(order, vec![Weekday::Monday, Weekday::Sunday]);
        assert!(days[0].entry.is_none());
        assert!(days[1].entry.is_some());
    }

    struct FailingStore;

    #[async_trait::async_trait]
    impl ScheduleStore for FailingStore {
        async fn lookup_schedule(
            &self,
            _user: &UserId,
            _day: Weekday,
        ) -> Result<Option<ScheduleEntry>, DomainError> {
            Err(DomainError::Store("unreachable".into()))
        }

        async fn list_schedules(&self, _user: &UserId) -> Result<Vec<ScheduleEntry>, DomainError> {
            Err(DomainError::Store("unreachable".into()))
        }

        async fn upsert_schedule(
            &self,
            _user: &UserId,
            _entry: &ScheduleEntry,
        ) -> Result<UpsertOutcome, DomainError> {
            Err(DomainError::Store("unreachable".into()))
        }

        async fn reminder_settings(&self, _user: &UserId) -> Result<ReminderSettings, DomainError> {
            Err(DomainError::Store("unreachable".into()))
        }

        async fn set_reminder_time(
            &self,
            _user: &UserId,
            _kind: ReminderKind,
            _at: Option<NaiveTime>,
        ) -> Result<(), DomainError> {
            Err(DomainError::Store("unreachable".into()))
        }

        async fn reminder_users(&self) -> Result<Vec<(UserId, ReminderSettings)>, DomainError> {
            Err(DomainError::Store("unreachable".into()))
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let svc = IntentService::new(Arc::new(FailingStore), clock_on(2025, 1, 15));
        let err = svc.process_message(&user(), "月曜").await.unwrap_err();
        assert!(matches!(err, DomainError::Store(_)));
    }
}
