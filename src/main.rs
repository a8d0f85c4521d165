//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use gomi_bot::adapters::clock::SystemClock;
use gomi_bot::adapters::persistence::{SqliteScheduleRepo, StaticScheduleStore};
use gomi_bot::adapters::reply::composer_for;
use gomi_bot::adapters::ui::notifier::ConsoleNotifier;
use gomi_bot::adapters::ui::tui::ChatTui;
use gomi_bot::domain::UserId;
use gomi_bot::ports::{ClockPort, InputPort, NotifierPort, ScheduleStore};
use gomi_bot::shared::config::{AppConfig, ReplyStyle};
use gomi_bot::usecases::{ConversationService, ReminderService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let tz = cfg.timezone_or_default()?;
    let style = cfg.reply_style_or_default();
    info!(timezone = %tz, ?style, "configuration loaded");

    gomi_bot::adapters::ui::init_ui();

    // --- Schedule store: static JSON document if given, SQLite otherwise ---
    let store: Arc<dyn ScheduleStore> = match cfg.schedule.as_deref() {
        Some(json) => Arc::new(StaticScheduleStore::from_json(json)?),
        None => {
            let data_path = PathBuf::from(cfg.data_dir_or_default());
            Arc::new(SqliteScheduleRepo::connect(&data_path).await?)
        }
    };
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new(tz));

    let composer = composer_for(style);
    let user = UserId::new(cfg.user_id_or_default());

    // --- Services ---
    let conversation = Arc::new(ConversationService::new(
        Arc::clone(&store),
        Arc::clone(&clock),
        Arc::clone(&composer),
        cfg.mention_or_default(),
    ));

    // --- Reminders: background loop, printed between prompts ---
    let reminders = ReminderService::new(store, clock, composer, cfg.reminder_window_or_default());
    let notifier: Arc<dyn NotifierPort> = Arc::new(ConsoleNotifier::new(user.clone()));
    tokio::spawn(async move {
        if let Err(e) = reminders.run_loop(notifier).await {
            warn!(error = %e, "reminder loop stopped");
        }
    });

    let input_port: Arc<dyn InputPort> =
        Arc::new(ChatTui::new(conversation, user, style == ReplyStyle::Card));

    input_port.run().await?;

    Ok(())
}
