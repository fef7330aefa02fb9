//! Record types persisted through the record store.

use serde::{Deserialize, Serialize};

/// A scheduled alarm.
///
/// `day` keeps the exact text the user entered (day.month.year). The
/// matching loop compares it verbatim against the current date rendered
/// in the same format, so no date parsing happens anywhere. `hour` and
/// `minute` stay text too; they are parsed only at match time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmRecord {
    pub id: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
}

/// A user note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub done: bool,
    /// Milliseconds since the epoch, refreshed on every mutation.
    pub updated_at: i64,
}
