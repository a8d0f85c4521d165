//! Application configuration. Paths, timezone, user identity, reply style.

use crate::domain::DomainError;
use chrono_tz::Tz;
use serde::Deserialize;
use std::time::Duration;

/// Reference timezone for "today"/"tomorrow" when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Mention removed from the front of a message before it is interpreted.
pub const DEFAULT_MENTION: &str = "@bot";

pub const DEFAULT_REMINDER_WINDOW_SECS: u64 = 300;

/// How replies are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStyle {
    #[default]
    Text,
    Card,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding schedules.db. Read from GOMI_BOT_DATA_DIR.
    pub data_dir: Option<String>,

    /// IANA timezone name used to resolve relative days. Read from GOMI_BOT_TIMEZONE.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Store scope for the local chat session. Read from GOMI_BOT_USER_ID.
    #[serde(default)]
    pub user_id: Option<String>,

    /// "text" or "card". Read from GOMI_BOT_REPLY_STYLE.
    #[serde(default)]
    pub reply_style: Option<ReplyStyle>,

    /// Mention prefix to strip. Read from GOMI_BOT_MENTION.
    #[serde(default)]
    pub mention: Option<String>,

    /// Static schedule as JSON; when set, the SQLite store is not used. Read from GOMI_BOT_SCHEDULE.
    #[serde(default)]
    pub schedule: Option<String>,

    /// Reminder check interval and due window in seconds (default 300).
    /// Read from GOMI_BOT_REMINDER_WINDOW_SECS.
    #[serde(default)]
    pub reminder_window_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("GOMI_BOT"));
        if let Ok(path) = std::env::var("GOMI_BOT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or("./data")
    }

    /// Parsed reference timezone. Defaults to Asia/Tokyo; an unknown name is a config error.
    pub fn timezone_or_default(&self) -> Result<Tz, DomainError> {
        let name = self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE);
        name.parse::<Tz>()
            .map_err(|e| DomainError::Config(format!("timezone {name:?}: {e}")))
    }

    pub fn user_id_or_default(&self) -> String {
        self.user_id.clone().unwrap_or_else(|| "local".to_string())
    }

    pub fn reply_style_or_default(&self) -> ReplyStyle {
        self.reply_style.unwrap_or_default()
    }

    pub fn mention_or_default(&self) -> &str {
        self.mention.as_deref().unwrap_or(DEFAULT_MENTION)
    }

    /// Reminder window. Zero is treated as unset.
    pub fn reminder_window_or_default(&self) -> Duration {
        let secs = self
            .reminder_window_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_REMINDER_WINDOW_SECS);
        Duration::from_secs(secs)
    }
}
