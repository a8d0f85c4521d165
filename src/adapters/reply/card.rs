//! Rich card replies: one bubble per day, a carousel when there is more than one.
//! The JSON follows the LINE Flex Message layout; `alt_text` carries the plain-text version.

use super::text::{TextComposer, reminder_heading};
use crate::domain::{DaySchedule, NOTE_PLACEHOLDER, ReminderKind, ScheduleEntry, Weekday};
use crate::ports::{ReplyComposer, ReplyMessage};
use crate::shared::messages;
use serde_json::{Value, json};

const HEADER_COLOR: &str = "#176FB8";
const LABEL_COLOR: &str = "#aaaaaa";
const NIGHT_COLOR: &str = "#27304A";
const MORNING_COLOR: &str = "#F2A93B";

fn text(s: &str, extra: Value) -> Value {
    let mut v = json!({ "type": "text", "text": s, "wrap": true });
    if let (Some(obj), Value::Object(more)) = (v.as_object_mut(), extra) {
        obj.extend(more);
    }
    v
}

fn vbox(contents: Vec<Value>) -> Value {
    json!({ "type": "box", "layout": "vertical", "spacing": "md", "contents": contents })
}

fn bubble(header: &str, body: Vec<Value>) -> Value {
    json!({
        "type": "bubble",
        "header": vbox(vec![text(header, json!({ "weight": "bold", "size": "xl", "color": HEADER_COLOR }))]),
        "body": vbox(body),
    })
}

fn carousel(bubbles: Vec<Value>) -> Value {
    json!({ "type": "carousel", "contents": bubbles })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CardComposer;

impl CardComposer {
    pub fn new() -> Self {
        Self
    }

    fn day_bubble(day: Weekday, entry: Option<&ScheduleEntry>, detailed: bool) -> Value {
        let Some(e) = entry else {
            return bubble(day.name(), vec![text(&messages::day_not_found(day.name()), json!({}))]);
        };
        let mut body = vec![
            text(messages::LABEL_ITEM, json!({ "size": "sm", "color": LABEL_COLOR })),
            text(&e.item, json!({ "weight": "bold", "size": "md" })),
        ];
        if detailed {
            body.push(json!({ "type": "separator", "margin": "lg" }));
            body.push(text(
                messages::LABEL_NOTE,
                json!({ "size": "sm", "color": LABEL_COLOR, "margin": "lg" }),
            ));
            body.push(text(e.display_note(), json!({})));
        }
        bubble(day.name(), body)
    }

    fn wrap(bubbles: Vec<Value>) -> Value {
        if bubbles.len() == 1 {
            bubbles.into_iter().next().unwrap_or(Value::Null)
        } else {
            carousel(bubbles)
        }
    }
}

impl ReplyComposer for CardComposer {
    fn days(&self, days: &[DaySchedule], detailed: bool) -> ReplyMessage {
        let bubbles = days
            .iter()
            .map(|d| Self::day_bubble(d.weekday, d.entry.as_ref(), detailed))
            .collect();
        ReplyMessage::Flex {
            alt_text: TextComposer.days(days, detailed).plain_text().to_string(),
            contents: Self::wrap(bubbles),
        }
    }

    fn week(&self, entries: &[ScheduleEntry], detailed: bool) -> ReplyMessage {
        if entries.is_empty() {
            return ReplyMessage::text(messages::SCHEDULE_EMPTY);
        }
        let bubbles = entries
            .iter()
            .map(|e| Self::day_bubble(e.weekday, Some(e), detailed))
            .collect();
        ReplyMessage::Flex {
            alt_text: messages::WEEK_ALT_TEXT.to_string(),
            contents: carousel(bubbles),
        }
    }

    fn reminder(&self, kind: ReminderKind, entry: &ScheduleEntry) -> ReplyMessage {
        let (title, relative) = reminder_heading(kind);
        let background = match kind {
            ReminderKind::Night => NIGHT_COLOR,
            ReminderKind::Morning => MORNING_COLOR,
        };
        let day_line = messages::reminder_day(relative, entry.weekday.name());
        let header = json!({
            "type": "box",
            "layout": "vertical",
            "paddingAll": "12px",
            "backgroundColor": background,
            "contents": [
                text(title, json!({ "color": "#ffffff", "size": "md", "weight": "bold" })),
                text(&day_line, json!({ "color": "#ffffff", "size": "xl", "weight": "bold", "margin": "sm" })),
            ],
        });
        let mut body = vec![text(&entry.item, json!({ "weight": "bold", "size": "xl" }))];
        let note = entry.display_note();
        if note != NOTE_PLACEHOLDER {
            body.push(json!({ "type": "separator", "margin": "xl" }));
            body.push(text(note, json!({ "size": "sm", "color": "#666666", "margin": "lg" })));
        }
        ReplyMessage::Flex {
            alt_text: messages::reminder_alt(relative, &entry.item),
            contents: json!({ "type": "bubble", "size": "kilo", "header": header, "body": vbox(body) }),
        }
    }

    fn help(&self) -> ReplyMessage {
        let body = messages::HELP_LINES
            .iter()
            .map(|line| text(line, json!({ "size": "sm" })))
            .collect();
        ReplyMessage::Flex {
            alt_text: messages::HELP_ALT_TEXT.to_string(),
            contents: bubble(messages::HELP_ALT_TEXT, body),
        }
    }
}
