//! Notes service
//!
//! Create/update/toggle/delete of user notes. The in-memory list is the
//! single writable copy; every mutation is written through to the
//! record store. New notes go to the head of the list and mutations
//! never reorder it.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::config::KEY_NOTES;
use crate::database::models::NoteRecord;
use crate::database::store::RecordStore;
use crate::error::{AppError, Result};
use crate::services::next_id;

#[derive(Clone)]
pub struct NoteService {
    store: RecordStore,
    notes: Arc<Mutex<Vec<NoteRecord>>>,
}

impl NoteService {
    /// Loads the stored note list. A missing or unreadable record
    /// yields an empty list.
    pub async fn load(store: RecordStore) -> Self {
        let notes: Vec<NoteRecord> = store.get_or_default(KEY_NOTES).await;
        tracing::info!("Loaded {} note(s)", notes.len());

        Self {
            store,
            notes: Arc::new(Mutex::new(notes)),
        }
    }

    /// Snapshot of the list, most recently created first.
    pub async fn list(&self) -> Vec<NoteRecord> {
        self.notes.lock().await.clone()
    }

    /// Creates a note at the head of the list. Rejected when title and
    /// body are both blank after trimming.
    pub async fn create(&self, title: &str, body: &str) -> Result<NoteRecord> {
        if title.trim().is_empty() && body.trim().is_empty() {
            return Err(AppError::EmptyNote);
        }

        let record = NoteRecord {
            id: next_id(),
            title: title.to_string(),
            body: body.to_string(),
            done: false,
            updated_at: Utc::now().timestamp_millis(),
        };

        let snapshot = {
            let mut notes = self.notes.lock().await;
            notes.insert(0, record.clone());
            notes.clone()
        };
        self.persist(&snapshot).await;

        tracing::info!("Note {} created", record.id);
        Ok(record)
    }

    /// Replaces a note's title and body in place, refreshing its
    /// timestamp. The note keeps its position in the list.
    pub async fn update(&self, id: &str, title: &str, body: &str) -> Result<NoteRecord> {
        if title.trim().is_empty() && body.trim().is_empty() {
            return Err(AppError::EmptyNote);
        }

        let (updated, snapshot) = {
            let mut notes = self.notes.lock().await;
            let note = notes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or_else(|| AppError::NoteNotFound(id.to_string()))?;

            note.title = title.to_string();
            note.body = body.to_string();
            note.updated_at = Utc::now().timestamp_millis();

            (note.clone(), notes.clone())
        };
        self.persist(&snapshot).await;

        tracing::debug!("Note {} updated", updated.id);
        Ok(updated)
    }

    /// Flips the completion flag, refreshing the timestamp. Title, body
    /// and position are untouched.
    pub async fn toggle_done(&self, id: &str) -> Result<NoteRecord> {
        let (updated, snapshot) = {
            let mut notes = self.notes.lock().await;
            let note = notes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or_else(|| AppError::NoteNotFound(id.to_string()))?;

            note.done = !note.done;
            note.updated_at = Utc::now().timestamp_millis();

            (note.clone(), notes.clone())
        };
        self.persist(&snapshot).await;

        Ok(updated)
    }

    /// Removes a note. Unknown ids are a no-op.
    pub async fn delete(&self, id: &str) {
        let snapshot = {
            let mut notes = self.notes.lock().await;
            notes.retain(|n| n.id != id);
            notes.clone()
        };
        self.persist(&snapshot).await;

        tracing::info!("Note {} deleted", id);
    }

    /// Write-through after an in-memory mutation; same contract as the
    /// alarm list.
    async fn persist(&self, notes: &[NoteRecord]) {
        if let Err(e) = self.store.set(KEY_NOTES, &notes).await {
            tracing::warn!("Failed to persist notes: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::initialize_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_service() -> (NoteService, RecordStore) {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        let store = RecordStore::new(pool);
        (NoteService::load(store.clone()).await, store)
    }

    #[tokio::test]
    async fn test_create_with_title_only() {
        let (service, _store) = create_test_service().await;

        let note = service.create("Shop", "").await.unwrap();

        assert_eq!(note.title, "Shop");
        assert!(!note.done);

        let notes = service.list().await;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0], note);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_note() {
        let (service, store) = create_test_service().await;

        let result = service.create("   ", "\t\n").await;
        assert!(matches!(result, Err(AppError::EmptyNote)));

        assert!(service.list().await.is_empty());

        let persisted: Option<Vec<NoteRecord>> = store.get(KEY_NOTES).await.unwrap();
        assert!(persisted.is_none());
    }

    #[tokio::test]
    async fn test_newest_note_comes_first() {
        let (service, _store) = create_test_service().await;

        service.create("first", "").await.unwrap();
        service.create("second", "").await.unwrap();
        service.create("third", "").await.unwrap();

        let notes = service.list().await;
        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_toggle_done_flips_flag_only() {
        let (service, _store) = create_test_service().await;

        let note = service.create("Shop", "milk").await.unwrap();
        let toggled = service.toggle_done(&note.id).await.unwrap();

        assert!(toggled.done);
        assert_eq!(toggled.id, note.id);
        assert_eq!(toggled.title, note.title);
        assert_eq!(toggled.body, note.body);
        assert!(toggled.updated_at >= note.updated_at);

        let back = service.toggle_done(&note.id).await.unwrap();
        assert!(!back.done);
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let (service, _store) = create_test_service().await;

        let older = service.create("older", "").await.unwrap();
        service.create("newer", "").await.unwrap();

        service.update(&older.id, "older edited", "body").await.unwrap();

        let notes = service.list().await;
        assert_eq!(notes[0].title, "newer");
        assert_eq!(notes[1].title, "older edited");
        assert_eq!(notes[1].body, "body");
    }

    #[tokio::test]
    async fn test_update_rejects_blank_note() {
        let (service, _store) = create_test_service().await;

        let note = service.create("keep", "me").await.unwrap();
        let result = service.update(&note.id, " ", "").await;

        assert!(matches!(result, Err(AppError::EmptyNote)));
        assert_eq!(service.list().await[0].title, "keep");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let (service, _store) = create_test_service().await;

        let result = service.update("missing", "t", "b").await;
        assert!(matches!(result, Err(AppError::NoteNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_note() {
        let (service, _store) = create_test_service().await;

        let note = service.create("bye", "").await.unwrap();
        service.delete(&note.id).await;
        service.delete("already-gone").await;

        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_reload_preserves_content_and_order() {
        let (service, store) = create_test_service().await;

        service.create("first", "").await.unwrap();
        let second = service.create("second", "").await.unwrap();
        service.toggle_done(&second.id).await.unwrap();
        let before = service.list().await;

        let reloaded = NoteService::load(store).await;
        assert_eq!(reloaded.list().await, before);
    }
}
