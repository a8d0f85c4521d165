//! Application use cases. Orchestrate domain logic via ports.

pub mod conversation_service;
pub mod intent_service;
pub mod reminder_command;
pub mod reminder_service;
pub mod schedule_command;

pub use conversation_service::ConversationService;
pub use intent_service::{IntentService, ReplyIntent};
pub use reminder_command::{ReminderCommand, ReminderCommandError};
pub use reminder_service::{Reminder, ReminderService};
pub use schedule_command::{CommandError, CommandKind, ScheduleCommand};
