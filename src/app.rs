//! Application wiring
//!
//! Opens the record store under the data directory and builds every
//! feature service on top of it.

use std::path::Path;

use crate::database::{create_pool, RecordStore};
use crate::error::Result;
use crate::services::{AlarmService, NoteService, SettingsService};

/// All services, wired to one record store.
#[derive(Clone)]
pub struct App {
    pub store: RecordStore,
    pub settings: SettingsService,
    pub notes: NoteService,
    pub alarms: AlarmService,
}

impl App {
    /// Initializes storage under `data_dir` and loads every feature's
    /// persisted state.
    pub async fn init(data_dir: &Path) -> Result<App> {
        tracing::info!("Initializing application at {:?}", data_dir);

        std::fs::create_dir_all(data_dir)?;

        let pool = create_pool(&data_dir.join("sidekick.db")).await?;
        let store = RecordStore::new(pool);

        let settings = SettingsService::new(store.clone());
        let notes = NoteService::load(store.clone()).await;
        let alarms = AlarmService::load(store.clone()).await;

        tracing::info!("Application initialized successfully");

        Ok(App {
            store,
            settings,
            notes,
            alarms,
        })
    }
}
