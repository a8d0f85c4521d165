//! Reminder commands: `リマインダー`, `通知 夜|朝 HH:MM`, `停止 夜|朝`.

use crate::domain::ReminderKind;
use crate::domain::reminder::parse_time;
use crate::shared::messages;
use chrono::NaiveTime;
use thiserror::Error;

const SHOW_KEYWORD: &str = "リマインダー";
const SET_KEYWORD: &str = "通知";
const STOP_KEYWORD: &str = "停止";

const SET_FORM: &str = "通知 夜|朝 時:分";
const STOP_FORM: &str = "停止 夜|朝";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderCommand {
    Show,
    Set(ReminderKind, NaiveTime),
    Stop(ReminderKind),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReminderCommandError {
    #[error("{}", messages::reminder_usage(.0))]
    Usage(&'static str),

    #[error("{}", messages::reminder_bad_time(.0))]
    BadTime(String),
}

/// `None` when the text is not a reminder command.
pub fn parse(text: &str) -> Option<Result<ReminderCommand, ReminderCommandError>> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let result = match words.as_slice() {
        [SHOW_KEYWORD] => Ok(ReminderCommand::Show),
        [SET_KEYWORD, kind, time] => match ReminderKind::from_label(kind) {
            None => Err(ReminderCommandError::Usage(SET_FORM)),
            Some(kind) => parse_time(time)
                .map(|at| ReminderCommand::Set(kind, at))
                .ok_or_else(|| ReminderCommandError::BadTime((*time).to_string())),
        },
        [SET_KEYWORD, ..] => Err(ReminderCommandError::Usage(SET_FORM)),
        [STOP_KEYWORD, kind] => ReminderKind::from_label(kind)
            .map(ReminderCommand::Stop)
            .ok_or(ReminderCommandError::Usage(STOP_FORM)),
        [STOP_KEYWORD, ..] => Err(ReminderCommandError::Usage(STOP_FORM)),
        _ => return None,
    };
    Some(result)
}
