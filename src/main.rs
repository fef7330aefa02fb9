// Sidekick - personal assistant app core
// Entry point: a small command surface over the services, plus the
// long-running alarm scheduler.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sidekick::app::App;
use sidekick::config::DEFAULT_LOG_FILTER;
use sidekick::error::AppError;
use sidekick::i18n::Language;
use sidekick::services::{AlarmScheduler, AlarmSink, FiredAlarm};

/// Headless stand-in for the device: vibration becomes a log line, the
/// modal alert goes to stdout.
struct ConsoleSink;

#[async_trait]
impl AlarmSink for ConsoleSink {
    async fn vibrate(&self, duration: Duration) {
        tracing::info!("Vibrating for {:?}", duration);
    }

    async fn alert(&self, fired: &FiredAlarm) {
        println!("{}  {}", fired.title, fired.body);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = std::env::var_os("SIDEKICK_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    let app = App::init(&data_dir).await?;
    let language = app.settings.language().await;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or("");

    match arg(0) {
        "" | "run" => run_scheduler(app, language).await?,
        "add-alarm" => match app.alarms.add(arg(1), arg(2), arg(3)).await {
            Ok(alarm) => println!(
                "{}  {}",
                language.alarm_scheduled_title(),
                language.alarm_scheduled_body(&alarm.day, &alarm.hour, &alarm.minute)
            ),
            Err(e) if e.is_validation() => println!(
                "{}  {}",
                language.missing_info_title(),
                language.missing_info_body()
            ),
            Err(e) => return Err(e.into()),
        },
        "delete-alarm" => app.alarms.delete(arg(1)).await,
        "list-alarms" => {
            for alarm in app.alarms.list().await {
                println!("{}  {} {}:{}", alarm.id, alarm.day, alarm.hour, alarm.minute);
            }
        }
        "add-note" => match app.notes.create(arg(1), arg(2)).await {
            Ok(note) => println!("{}", note.id),
            Err(e @ AppError::EmptyNote) => println!("{}", e),
            Err(e) => return Err(e.into()),
        },
        "toggle-note" => {
            let note = app.notes.toggle_done(arg(1)).await?;
            println!("{} done={}", note.id, note.done);
        }
        "delete-note" => app.notes.delete(arg(1)).await,
        "list-notes" => {
            for note in app.notes.list().await {
                let marker = if note.done { "x" } else { " " };
                println!("[{}] {}  {}", marker, note.id, note.title);
            }
        }
        "set-language" => {
            let language = Language::from_str(arg(1))?;
            app.settings.set_language(language).await?;
        }
        other => anyhow::bail!("unknown command: {other}"),
    }

    Ok(())
}

/// Runs the minute tick until Ctrl-C.
async fn run_scheduler(app: App, language: Language) -> anyhow::Result<()> {
    tracing::info!("Starting Sidekick");

    let scheduler = AlarmScheduler::new(app.alarms.clone(), Arc::new(ConsoleSink), language);
    let handle = scheduler.start();

    tokio::signal::ctrl_c().await?;

    handle.stop();
    tracing::info!("Shutting down");

    Ok(())
}
