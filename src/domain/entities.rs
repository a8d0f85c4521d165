//! Domain entities. Pure data structures for the core business.
//!
//! No storage/IO types here — adapters map their rows into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown instead of a note that is empty or one of [`NO_NOTE_SENTINELS`].
pub const NOTE_PLACEHOLDER: &str = "特記事項はありません。";

/// Note values that mean "no note" when users type them in.
pub const NO_NOTE_SENTINELS: &[&str] = &["なし", "特になし", "-"];

/// Canonical weekday. Ordered Monday (0) .. Sunday (6); this order is the sort key for replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "月曜")]
    Monday,
    #[serde(rename = "火曜")]
    Tuesday,
    #[serde(rename = "水曜")]
    Wednesday,
    #[serde(rename = "木曜")]
    Thursday,
    #[serde(rename = "金曜")]
    Friday,
    #[serde(rename = "土曜")]
    Saturday,
    #[serde(rename = "日曜")]
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical storage / display name (e.g. "月曜").
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "月曜",
            Weekday::Tuesday => "火曜",
            Weekday::Wednesday => "水曜",
            Weekday::Thursday => "木曜",
            Weekday::Friday => "金曜",
            Weekday::Saturday => "土曜",
            Weekday::Sunday => "日曜",
        }
    }

    /// Inverse of [`Weekday::name`]. Only canonical names are accepted; aliases go through the vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity the schedule store scopes rows by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the weekly schedule. Owned by the store; read-only for the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "day_of_week")]
    pub weekday: Weekday,
    pub item: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl ScheduleEntry {
    pub fn new(weekday: Weekday, item: impl Into<String>, note: Option<String>) -> Self {
        Self {
            weekday,
            item: item.into(),
            note,
        }
    }

    /// Note text for display: the placeholder when the note is missing, blank or a sentinel.
    pub fn display_note(&self) -> &str {
        match self.note.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() && !NO_NOTE_SENTINELS.contains(&n) => n,
            _ => NOTE_PLACEHOLDER,
        }
    }
}

/// Result of looking up one requested weekday. `entry` is `None` on a store miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub weekday: Weekday,
    pub entry: Option<ScheduleEntry>,
}
