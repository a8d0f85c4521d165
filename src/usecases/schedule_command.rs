//! Register / update commands: `登録 <曜日> <品目> [注意事項…]` and `変更 …`.
//!
//! A whitespace-split grammar of its own. Only the day word goes through the vocabulary,
//! and it must be exactly one day alias.

use crate::domain::{
    AliasBinding, DomainError, NO_NOTE_SENTINELS, ScheduleEntry, Vocabulary, Weekday, resolver,
};
use crate::shared::messages;
use chrono::NaiveDate;
use thiserror::Error;

pub const ITEM_MAX_CHARS: usize = 50;
pub const NOTE_MAX_CHARS: usize = 200;

/// Stored in place of any "no note" value users type (`なし`, `-`, ...).
const STORED_EMPTY_NOTE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Register,
    Update,
}

impl CommandKind {
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Register => "登録",
            CommandKind::Update => "変更",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        [CommandKind::Register, CommandKind::Update]
            .into_iter()
            .find(|k| k.keyword() == word)
    }
}

/// A parsed, not yet resolved command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCommand {
    pub kind: CommandKind,
    pub day_word: String,
    pub item: String,
    pub note: Option<String>,
}

/// Rejections shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{}", messages::command_usage(.0.keyword()))]
    Usage(CommandKind),

    #[error("{}", messages::command_bad_day(.0))]
    BadDay(String),

    #[error("{}", messages::item_too_long(ITEM_MAX_CHARS))]
    ItemTooLong,

    #[error("{}", messages::note_too_long(NOTE_MAX_CHARS))]
    NoteTooLong,
}

/// `None` when the text is not a command at all.
pub fn parse(text: &str) -> Option<Result<ScheduleCommand, CommandError>> {
    let mut words = text.split_whitespace();
    let kind = CommandKind::from_keyword(words.next()?)?;

    let (Some(day_word), Some(item)) = (words.next(), words.next()) else {
        return Some(Err(CommandError::Usage(kind)));
    };
    let rest: Vec<&str> = words.collect();
    let note = (!rest.is_empty()).then(|| rest.join(" "));

    Some(validate(ScheduleCommand {
        kind,
        day_word: day_word.to_string(),
        item: item.to_string(),
        note,
    }))
}

fn validate(cmd: ScheduleCommand) -> Result<ScheduleCommand, CommandError> {
    if cmd.item.chars().count() > ITEM_MAX_CHARS {
        return Err(CommandError::ItemTooLong);
    }
    if cmd
        .note
        .as_ref()
        .is_some_and(|n| n.chars().count() > NOTE_MAX_CHARS)
    {
        return Err(CommandError::NoteTooLong);
    }
    Ok(cmd)
}

impl ScheduleCommand {
    /// Resolve the day word and build the row to store. `today` is read only for relative days.
    pub fn into_entry<F>(self, today: F) -> Result<Result<ScheduleEntry, CommandError>, DomainError>
    where
        F: FnOnce() -> Result<NaiveDate, DomainError>,
    {
        let Some(binding) = day_binding(&self.day_word) else {
            return Ok(Err(CommandError::BadDay(self.day_word)));
        };
        let weekday: Weekday = resolver::resolve(binding, today)?;
        let note = self.note.map(|n| {
            if NO_NOTE_SENTINELS.contains(&n.as_str()) {
                STORED_EMPTY_NOTE.to_string()
            } else {
                sanitize(&n)
            }
        });
        Ok(Ok(ScheduleEntry::new(weekday, sanitize(&self.item), note)))
    }
}

fn day_binding(word: &str) -> Option<AliasBinding> {
    Vocabulary::standard().lookup(word)?.binding()
}

/// Prefix values that a spreadsheet would read as a formula.
pub fn sanitize(value: &str) -> String {
    match value.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{value}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wednesday() -> Result<NaiveDate, DomainError> {
        Ok(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
    }

    #[test]
    fn test_non_command_text() {
        assert!(parse("月曜 詳細").is_none());
        assert!(parse("").is_none());
        assert!(parse("登録する 月").is_none());
    }

    #[test]
    fn test_parse_register_with_note() {
        let cmd = parse("登録 月曜 燃えるゴミ 水を 切る").unwrap().unwrap();
        assert_eq!(cmd.kind, CommandKind::Register);
        assert_eq!(cmd.day_word, "月曜");
        assert_eq!(cmd.item, "燃えるゴミ");
        assert_eq!(cmd.note.as_deref(), Some("水を 切る"));
    }

    #[test]
    fn test_missing_item_is_usage_error() {
        let err = parse("変更 火").unwrap().unwrap_err();
        assert_eq!(err, CommandError::Usage(CommandKind::Update));
        assert!(err.to_string().contains("変更 曜日 品目"));
    }

    #[test]
    fn test_length_limits() {
        let long_item = "あ".repeat(ITEM_MAX_CHARS + 1);
        assert_eq!(
            parse(&format!("登録 月 {long_item}")).unwrap(),
            Err(CommandError::ItemTooLong)
        );
        let long_note = "い".repeat(NOTE_MAX_CHARS + 1);
        assert_eq!(
            parse(&format!("登録 月 プラ {long_note}")).unwrap(),
            Err(CommandError::NoteTooLong)
        );
        let ok_item = "あ".repeat(ITEM_MAX_CHARS);
        assert!(parse(&format!("登録 月 {ok_item}")).unwrap().is_ok());
    }

    #[test]
    fn test_into_entry_resolves_relative_day() {
        let cmd = parse("登録 明日 缶").unwrap().unwrap();
        let entry = cmd.into_entry(wednesday).unwrap().unwrap();
        assert_eq!(entry.weekday, Weekday::Thursday);
        assert_eq!(entry.note, None);
    }

    #[test]
    fn test_into_entry_rejects_non_day_word() {
        let cmd = parse("登録 詳細 缶").unwrap().unwrap();
        assert_eq!(
            cmd.into_entry(wednesday).unwrap(),
            Err(CommandError::BadDay("詳細".into()))
        );
        let cmd = parse("登録 月火 缶").unwrap().unwrap();
        assert!(cmd.into_entry(wednesday).unwrap().is_err());
    }

    #[test]
    fn test_clear_note_and_sanitize() {
        let cmd = parse("変更 金曜日 =SUM(A1) なし").unwrap().unwrap();
        let entry = cmd.into_entry(wednesday).unwrap().unwrap();
        assert_eq!(entry.weekday, Weekday::Friday);
        assert_eq!(entry.item, "'=SUM(A1)");
        assert_eq!(entry.note.as_deref(), Some("-"));
        assert_eq!(sanitize("燃えるゴミ"), "燃えるゴミ");
    }

    #[test]
    fn test_every_no_note_word_is_stored_unsanitized() {
        for word in ["なし", "特になし", "-"] {
            let cmd = parse(&format!("登録 月 缶 {word}")).unwrap().unwrap();
            let entry = cmd.into_entry(wednesday).unwrap().unwrap();
            assert_eq!(entry.note.as_deref(), Some("-"), "note {word:?}");
        }
        let cmd = parse("登録 月 缶 -10度以下").unwrap().unwrap();
        let entry = cmd.into_entry(wednesday).unwrap().unwrap();
        assert_eq!(entry.note.as_deref(), Some("'-10度以下"));
    }
}
