//! Daily reminders: a night one about tomorrow's collection and a morning one about today's.
//!
//! Times are wall-clock `HH:MM` in the reference timezone.

use super::vocabulary::DayOffset;
use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Night,
    Morning,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 2] = [ReminderKind::Night, ReminderKind::Morning];

    /// Day the reminder is about, relative to the day it is sent.
    pub fn target_offset(self) -> DayOffset {
        match self {
            ReminderKind::Night => DayOffset::TOMORROW,
            ReminderKind::Morning => DayOffset::TODAY,
        }
    }

    /// Word users type to pick the reminder ("夜" / "朝").
    pub fn label(self) -> &'static str {
        match self {
            ReminderKind::Night => "夜",
            ReminderKind::Morning => "朝",
        }
    }

    pub fn from_label(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == word)
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReminderKind::Night => "night",
            ReminderKind::Morning => "morning",
        })
    }
}

/// Per-user reminder times. `None` means the reminder is off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderSettings {
    pub night: Option<NaiveTime>,
    pub morning: Option<NaiveTime>,
}

impl ReminderSettings {
    pub fn time(&self, kind: ReminderKind) -> Option<NaiveTime> {
        match kind {
            ReminderKind::Night => self.night,
            ReminderKind::Morning => self.morning,
        }
    }

    pub fn set(&mut self, kind: ReminderKind, at: Option<NaiveTime>) {
        match kind {
            ReminderKind::Night => self.night = at,
            ReminderKind::Morning => self.morning = at,
        }
    }

    pub fn is_off(&self) -> bool {
        self.night.is_none() && self.morning.is_none()
    }
}

/// Parse `H:MM` or `HH:MM` (24-hour clock).
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let (h, m) = text.split_once(':')?;
    let digits = |s: &str, max_len: usize| {
        (!s.is_empty() && s.len() <= max_len && s.bytes().all(|b| b.is_ascii_digit()))
            .then(|| s.parse::<u32>().ok())
            .flatten()
    };
    if m.len() != 2 {
        return None;
    }
    NaiveTime::from_hms_opt(digits(h, 2)?, digits(m, 2)?, 0)
}

pub fn format_time(at: NaiveTime) -> String {
    at.format("%H:%M").to_string()
}

/// True when `now` is at or after `at` by less than `window`, on the same day.
pub fn is_due(now: NaiveTime, at: NaiveTime, window: TimeDelta) -> bool {
    let elapsed = now - at;
    elapsed >= TimeDelta::zero() && elapsed < window
}
