//! Plain text replies. Multi-day replies are one message with a blank line between days.

use crate::domain::{DaySchedule, ReminderKind, ScheduleEntry, Weekday};
use crate::ports::{ReplyComposer, ReplyMessage};
use crate::shared::messages;

/// Blank-line separator between per-day segments.
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Title and relative-day word of a reminder.
pub fn reminder_heading(kind: ReminderKind) -> (&'static str, &'static str) {
    match kind {
        ReminderKind::Night => (messages::REMINDER_NIGHT_TITLE, "明日"),
        ReminderKind::Morning => (messages::REMINDER_MORNING_TITLE, "今日"),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextComposer;

impl TextComposer {
    pub fn new() -> Self {
        Self
    }

    /// Text for one requested day.
    pub fn segment(day: Weekday, entry: Option<&ScheduleEntry>, detailed: bool) -> String {
        match entry {
            None => messages::day_not_found(day.name()),
            Some(e) if detailed => messages::day_detail(day.name(), &e.item, e.display_note()),
            Some(e) => messages::day_line(day.name(), &e.item),
        }
    }
}

impl ReplyComposer for TextComposer {
    fn days(&self, days: &[DaySchedule], detailed: bool) -> ReplyMessage {
        let segments: Vec<String> = days
            .iter()
            .map(|d| Self::segment(d.weekday, d.entry.as_ref(), detailed))
            .collect();
        ReplyMessage::text(segments.join(SEGMENT_SEPARATOR))
    }

    fn week(&self, entries: &[ScheduleEntry], detailed: bool) -> ReplyMessage {
        if entries.is_empty() {
            return ReplyMessage::text(messages::SCHEDULE_EMPTY);
        }
        let segments: Vec<String> = entries
            .iter()
            .map(|e| Self::segment(e.weekday, Some(e), detailed))
            .collect();
        ReplyMessage::text(segments.join(SEGMENT_SEPARATOR))
    }

    fn help(&self) -> ReplyMessage {
        ReplyMessage::text(messages::HELP_LINES.join("\n"))
    }

    fn reminder(&self, kind: ReminderKind, entry: &ScheduleEntry) -> ReplyMessage {
        let (title, relative) = reminder_heading(kind);
        ReplyMessage::text(messages::reminder_text(
            title,
            &messages::reminder_day(relative, entry.weekday.name()),
            &entry.item,
            entry.display_note(),
        ))
    }
}
