//! Alarm scheduler
//!
//! Background task that polls the wall clock once a minute and fires
//! every alarm whose day/hour/minute match. Firing never mutates the
//! stored record, so an alarm stays in the list until the user deletes
//! it, and it fires again on any later minute that produces an
//! identical match.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use tokio::task::JoinHandle;

use crate::config::{ALARM_TICK_PERIOD, ALARM_VIBRATION};
use crate::i18n::Language;
use crate::services::AlarmService;

/// A single alarm match, ready to surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredAlarm {
    pub alarm_id: String,
    /// Localized alert title.
    pub title: String,
    /// Literal "{hour}:{minute}" using the stored field text.
    pub body: String,
}

/// Delivery seam for fired alarms. The production sink vibrates the
/// device and opens a modal alert; tests record what would have fired.
#[async_trait]
pub trait AlarmSink: Send + Sync {
    async fn vibrate(&self, duration: Duration);
    async fn alert(&self, fired: &FiredAlarm);
}

pub struct AlarmScheduler {
    service: AlarmService,
    sink: Arc<dyn AlarmSink>,
    language: Language,
}

impl AlarmScheduler {
    pub fn new(service: AlarmService, sink: Arc<dyn AlarmSink>, language: Language) -> Self {
        Self {
            service,
            sink,
            language,
        }
    }

    /// Starts the minute tick. Checks run until the returned handle is
    /// stopped or dropped.
    pub fn start(self) -> SchedulerHandle {
        let handle = tokio::spawn(async move {
            tracing::info!("Starting alarm scheduler");

            let mut interval = tokio::time::interval(ALARM_TICK_PERIOD);
            // The first interval tick completes immediately; consume it
            // so the first check lands one full period after start.
            interval.tick().await;

            loop {
                interval.tick().await;
                self.check().await;
            }
        });

        SchedulerHandle { handle }
    }

    async fn check(&self) {
        let now = Local::now().naive_local();

        for alarm in self.service.due(now).await {
            tracing::info!("Alarm {} fired", alarm.id);

            let fired = FiredAlarm {
                alarm_id: alarm.id.clone(),
                title: self.language.alarm_alert_title().to_string(),
                body: format!("{}:{}", alarm.hour, alarm.minute),
            };

            self.sink.vibrate(ALARM_VIBRATION).await;
            self.sink.alert(&fired).await;
        }
    }
}

/// Owns the background tick task. Stopping (or dropping) the handle
/// aborts the task, so no checks outlive the screen that started them.
pub struct SchedulerHandle {
    handle: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn stop(self) {
        self.handle.abort();
        tracing::info!("Alarm scheduler stopped");
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
