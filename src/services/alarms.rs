//! Alarm service
//!
//! Owns the in-memory alarm list, persists every mutation through the
//! record store, and answers "which alarms are due at this instant".
//! The list in memory is the writable copy; the store holds the durable
//! mirror, rewritten after each mutation.

use std::sync::Arc;

use chrono::{NaiveDateTime, Timelike};
use tokio::sync::Mutex;

use crate::config::{DAY_FORMAT, KEY_ALARMS};
use crate::database::models::AlarmRecord;
use crate::database::store::RecordStore;
use crate::error::{AppError, Result};
use crate::services::next_id;

#[derive(Clone)]
pub struct AlarmService {
    store: RecordStore,
    alarms: Arc<Mutex<Vec<AlarmRecord>>>,
}

impl AlarmService {
    /// Loads the stored alarm list. A missing or unreadable record
    /// yields an empty list.
    pub async fn load(store: RecordStore) -> Self {
        let alarms: Vec<AlarmRecord> = store.get_or_default(KEY_ALARMS).await;
        tracing::info!("Loaded {} alarm(s)", alarms.len());

        Self {
            store,
            alarms: Arc::new(Mutex::new(alarms)),
        }
    }

    /// Snapshot of the current list, in insertion order.
    pub async fn list(&self) -> Vec<AlarmRecord> {
        self.alarms.lock().await.clone()
    }

    /// Adds an alarm. Every field must be non-empty; nothing is stored
    /// otherwise. Returns the created record so the caller can echo the
    /// scheduled day and time back to the user.
    pub async fn add(&self, day: &str, hour: &str, minute: &str) -> Result<AlarmRecord> {
        if day.is_empty() {
            return Err(AppError::MissingInfo("day"));
        }
        if hour.is_empty() {
            return Err(AppError::MissingInfo("hour"));
        }
        if minute.is_empty() {
            return Err(AppError::MissingInfo("minute"));
        }

        let record = AlarmRecord {
            id: next_id(),
            day: day.to_string(),
            hour: hour.to_string(),
            minute: minute.to_string(),
        };

        let snapshot = {
            let mut alarms = self.alarms.lock().await;
            alarms.push(record.clone());
            alarms.clone()
        };
        self.persist(&snapshot).await;

        tracing::info!(
            "Alarm {} scheduled for {} at {}:{}",
            record.id,
            record.day,
            record.hour,
            record.minute
        );
        Ok(record)
    }

    /// Removes the alarm with the given id. Unknown ids are a no-op;
    /// the (unchanged) list is still written through.
    pub async fn delete(&self, id: &str) {
        let snapshot = {
            let mut alarms = self.alarms.lock().await;
            alarms.retain(|a| a.id != id);
            alarms.clone()
        };
        self.persist(&snapshot).await;

        tracing::info!("Alarm {} deleted", id);
    }

    /// Alarms due at the given instant. See [`due_alarms`].
    pub async fn due(&self, now: NaiveDateTime) -> Vec<AlarmRecord> {
        let alarms = self.alarms.lock().await;
        due_alarms(&alarms, now)
    }

    /// Write-through after an in-memory mutation. Memory is already
    /// updated at this point; a failed write leaves it ahead of disk
    /// until the next successful write.
    async fn persist(&self, alarms: &[AlarmRecord]) {
        if let Err(e) = self.store.set(KEY_ALARMS, &alarms).await {
            tracing::warn!("Failed to persist alarms: {}", e);
        }
    }
}

/// An alarm is due when its day text equals `now`'s date rendered in the
/// canonical format AND its hour/minute text parses to `now`'s hour and
/// minute. A record whose hour or minute does not parse never matches;
/// it does not abort the check for the others.
pub fn due_alarms(alarms: &[AlarmRecord], now: NaiveDateTime) -> Vec<AlarmRecord> {
    let day = now.format(DAY_FORMAT).to_string();
    let hour = now.hour();
    let minute = now.minute();

    alarms
        .iter()
        .filter(|a| {
            a.day == day
                && a.hour.trim().parse::<u32>() == Ok(hour)
                && a.minute.trim().parse::<u32>() == Ok(minute)
        })
        .cloned()
        .collect()
}
