//! Conversation use case: one incoming message -> at most one reply.
//!
//! Routes register/update and reminder commands to the store and everything else through
//! the intent core, then renders with the configured ReplyComposer.

use crate::domain::{DomainError, UserId};
use crate::ports::{ClockPort, ReplyComposer, ReplyMessage, ScheduleStore, UpsertOutcome};
use crate::shared::messages;
use crate::usecases::intent_service::{IntentService, ReplyIntent};
use crate::domain::reminder::format_time;
use crate::usecases::reminder_command::{self, ReminderCommand};
use crate::usecases::schedule_command::{self, ScheduleCommand};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ConversationService {
    intents: IntentService,
    store: Arc<dyn ScheduleStore>,
    clock: Arc<dyn ClockPort>,
    composer: Arc<dyn ReplyComposer>,
    mention: String,
}

impl ConversationService {
    pub fn new(
        store: Arc<dyn ScheduleStore>,
        clock: Arc<dyn ClockPort>,
        composer: Arc<dyn ReplyComposer>,
        mention: impl Into<String>,
    ) -> Self {
        Self {
            intents: IntentService::new(Arc::clone(&store), Arc::clone(&clock)),
            store,
            clock,
            composer,
            mention: mention.into(),
        }
    }

    /// Reply to `raw`. Returns `None` for a bare mention with nothing after it.
    pub async fn handle_message(
        &self,
        user: &UserId,
        raw: &str,
    ) -> Result<Option<ReplyMessage>, DomainError> {
        let Some(text) = self.strip_mention(raw) else {
            return Ok(None);
        };

        if let Some(parsed) = schedule_command::parse(text) {
            let reply = match parsed {
                Ok(cmd) => self.run_command(user, cmd).await?,
                Err(rejected) => {
                    info!(user = %user, reason = ?rejected, "command rejected");
                    self.composer.notice(&rejected.to_string())
                }
            };
            return Ok(Some(reply));
        }

        if let Some(parsed) = reminder_command::parse(text) {
            let reply = match parsed {
                Ok(cmd) => self.run_reminder_command(user, cmd).await?,
                Err(rejected) => {
                    info!(user = %user, reason = ?rejected, "reminder command rejected");
                    self.composer.notice(&rejected.to_string())
                }
            };
            return Ok(Some(reply));
        }

        let intent = self.intents.process_message(user, text).await?;
        self.render(user, intent).await.map(Some)
    }

    /// Text after the configured mention, or `None` when only the mention was sent.
    fn strip_mention<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let trimmed = raw.trim();
        if self.mention.is_empty() {
            return Some(trimmed);
        }
        match trimmed.strip_prefix(self.mention.as_str()) {
            Some("") => None,
            Some(rest) if rest.starts_with(char::is_whitespace) => {
                let rest = rest.trim();
                (!rest.is_empty()).then_some(rest)
            }
            _ => Some(trimmed),
        }
    }

    async fn render(&self, user: &UserId, intent: ReplyIntent) -> Result<ReplyMessage, DomainError> {
        Ok(match intent {
            ReplyIntent::Unrecognized(_) => self.composer.unrecognized(),
            ReplyIntent::NoTarget => self.composer.no_target(),
            ReplyIntent::Help => self.composer.help(),
            ReplyIntent::AllDays { detailed } => {
                let entries = self.store.list_schedules(user).await?;
                info!(user = %user, rows = entries.len(), "weekly schedule requested");
                self.composer.week(&entries, detailed)
            }
            ReplyIntent::Days { detailed, days } => {
                let misses = days.iter().filter(|d| d.entry.is_none()).count();
                if misses > 0 {
                    warn!(user = %user, misses, requested = days.len(), "schedule lookup miss");
                }
                self.composer.days(&days, detailed)
            }
        })
    }

    async fn run_command(
        &self,
        user: &UserId,
        cmd: ScheduleCommand,
    ) -> Result<ReplyMessage, DomainError> {
        let kind = cmd.kind;
        let entry = match cmd.into_entry(|| self.clock.today())? {
            Ok(entry) => entry,
            Err(rejected) => return Ok(self.composer.notice(&rejected.to_string())),
        };

        let outcome = self.store.upsert_schedule(user, &entry).await?;
        info!(user = %user, day = %entry.weekday, ?kind, ?outcome, "schedule command applied");

        let day = entry.weekday.name();
        let headline = match outcome {
            UpsertOutcome::Inserted => messages::registered(day),
            UpsertOutcome::Updated => messages::updated(day),
        };
        let detail = messages::day_detail(day, &entry.item, entry.display_note());
        Ok(self.composer.notice(&format!("{headline}\n\n{detail}")))
    }

    async fn run_reminder_command(
        &self,
        user: &UserId,
        cmd: ReminderCommand,
    ) -> Result<ReplyMessage, DomainError> {
        let text = match cmd {
            ReminderCommand::Show => {
                let settings = self.store.reminder_settings(user).await?;
                let shown = |at: Option<chrono::NaiveTime>| {
                    at.map(format_time)
                        .unwrap_or_else(|| messages::REMINDER_OFF.to_string())
                };
                messages::reminder_settings(&shown(settings.night), &shown(settings.morning))
            }
            ReminderCommand::Set(kind, at) => {
                self.store.set_reminder_time(user, kind, Some(at)).await?;
                messages::reminder_set(kind.label(), &format_time(at))
            }
            ReminderCommand::Stop(kind) => {
                self.store.set_reminder_time(user, kind, None).await?;
                messages::reminder_stopped(kind.label())
            }
        };
        info!(user = %user, command = ?cmd, "reminder command applied");
        Ok(self.composer.notice(&text))
    }
}
