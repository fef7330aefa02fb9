//! Services module
//!
//! Feature logic built on top of the record store.

pub mod alarms;
pub mod notes;
pub mod scheduler;
pub mod settings;

pub use alarms::AlarmService;
pub use notes::NoteService;
pub use scheduler::{AlarmScheduler, AlarmSink, FiredAlarm, SchedulerHandle};
pub use settings::SettingsService;

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Fresh record id derived from the millisecond clock. Ids are forced
/// strictly increasing, so two records created within the same
/// millisecond still get distinct ids.
pub(crate) fn next_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let id = now.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, id, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return id.to_string(),
            Err(actual) => prev = actual,
        }
    }
}
