//! Settings service
//!
//! Language preference, profile avatar and the weather credential, all
//! stored through the record store under fixed keys. Reads collapse
//! missing or unreadable state into defaults; nothing here surfaces a
//! storage failure to the user.

use std::str::FromStr;

use crate::config::{KEY_APP_LANGUAGE, KEY_PROFILE_AVATAR, KEY_WEATHER_API_KEY};
use crate::database::store::RecordStore;
use crate::error::Result;
use crate::i18n::Language;

#[derive(Clone)]
pub struct SettingsService {
    store: RecordStore,
}

impl SettingsService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Active UI language. Anything missing, unreadable or unknown
    /// falls back to the default.
    pub async fn language(&self) -> Language {
        match self.store.get::<String>(KEY_APP_LANGUAGE).await {
            Ok(Some(code)) => Language::from_str(&code).unwrap_or_default(),
            _ => Language::default(),
        }
    }

    pub async fn set_language(&self, language: Language) -> Result<()> {
        self.store.set(KEY_APP_LANGUAGE, &language.code()).await
    }

    /// Local image reference for the profile avatar, if one was chosen.
    pub async fn avatar(&self) -> Option<String> {
        self.store.get(KEY_PROFILE_AVATAR).await.ok().flatten()
    }

    pub async fn set_avatar(&self, uri: &str) -> Result<()> {
        self.store.set(KEY_PROFILE_AVATAR, &uri).await
    }

    pub async fn weather_api_key(&self) -> Option<String> {
        self.store.get(KEY_WEATHER_API_KEY).await.ok().flatten()
    }

    /// Stores the weather credential, trimmed.
    pub async fn set_weather_api_key(&self, key: &str) -> Result<()> {
        self.store.set(KEY_WEATHER_API_KEY, &key.trim()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::initialize_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_service() -> (SettingsService, RecordStore) {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        let store = RecordStore::new(pool);
        (SettingsService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_language_defaults_to_turkish() {
        let (service, _store) = create_test_service().await;

        assert_eq!(service.language().await, Language::Tr);
    }

    #[tokio::test]
    async fn test_language_round_trip() {
        let (service, _store) = create_test_service().await;

        service.set_language(Language::Ar).await.unwrap();
        assert_eq!(service.language().await, Language::Ar);
    }

    #[tokio::test]
    async fn test_unknown_stored_language_falls_back() {
        let (service, store) = create_test_service().await;

        store.set(KEY_APP_LANGUAGE, &"de").await.unwrap();
        assert_eq!(service.language().await, Language::Tr);
    }

    #[tokio::test]
    async fn test_avatar_round_trip() {
        let (service, _store) = create_test_service().await;

        assert_eq!(service.avatar().await, None);

        service.set_avatar("file:///pictures/me.png").await.unwrap();
        assert_eq!(
            service.avatar().await,
            Some("file:///pictures/me.png".to_string())
        );
    }

    #[tokio::test]
    async fn test_weather_api_key_is_trimmed() {
        let (service, _store) = create_test_service().await;

        service.set_weather_api_key("  abc123  ").await.unwrap();
        assert_eq!(service.weather_api_key().await, Some("abc123".to_string()));
    }
}
