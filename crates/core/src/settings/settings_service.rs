use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::SettingsRepositoryTrait;
use crate::errors::Result;
use crate::settings::{OnEmpty, Settings, SettingsUpdate, DEFAULT_EARN_WITH_US_LINK};

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Current settings record, created with defaults on first access.
    async fn get_settings(&self) -> Result<Settings>;

    /// Apply an update and return the resulting record.
    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn get_settings(&self) -> Result<Settings> {
        if let Some(settings) = self.settings_repository.get_settings()? {
            return Ok(settings);
        }
        debug!("No settings record yet, seeding defaults");
        self.settings_repository
            .create_if_absent(DEFAULT_EARN_WITH_US_LINK)
            .await
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings> {
        match update.link() {
            Some(link) => self.settings_repository.upsert_link(link).await,
            None => match self.settings_repository.get_settings()? {
                Some(existing) => match update.on_empty {
                    OnEmpty::KeepExisting => Ok(existing),
                    OnEmpty::UseDefault => {
                        self.settings_repository
                            .upsert_link(DEFAULT_EARN_WITH_US_LINK)
                            .await
                    }
                },
                None => {
                    self.settings_repository
                        .create_if_absent(DEFAULT_EARN_WITH_US_LINK)
                        .await
                }
            },
        }
    }
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SETTINGS_RECORD_ID;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeRepository {
        row: Mutex<Option<Settings>>,
        inserts: AtomicUsize,
    }

    impl FakeRepository {
        fn make_row(link: &str) -> Settings {
            let now = chrono::Utc::now().naive_utc();
            Settings {
                id: SETTINGS_RECORD_ID.to_string(),
                earn_with_us_link: link.to_string(),
                created_at: now,
                updated_at: now,
            }
        }
    }

    #[async_trait]
    impl SettingsRepositoryTrait for FakeRepository {
        fn get_settings(&self) -> Result<Option<Settings>> {
            Ok(self.row.lock().unwrap().clone())
        }

        async fn create_if_absent(&self, link: &str) -> Result<Settings> {
            let mut row = self.row.lock().unwrap();
            if row.is_none() {
                self.inserts.fetch_add(1, Ordering::SeqCst);
                *row = Some(Self::make_row(link));
            }
            Ok(row.clone().unwrap())
        }

        async fn upsert_link(&self, link: &str) -> Result<Settings> {
            let mut row = self.row.lock().unwrap();
            match row.as_mut() {
                Some(existing) => {
                    existing.earn_with_us_link = link.to_string();
                    existing.updated_at = chrono::Utc::now().naive_utc();
                }
                None => {
                    self.inserts.fetch_add(1, Ordering::SeqCst);
                    *row = Some(Self::make_row(link));
                }
            }
            Ok(row.clone().unwrap())
        }
    }

    fn service() -> (SettingsService, Arc<FakeRepository>) {
        let repo = Arc::new(FakeRepository::default());
        (SettingsService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn first_read_seeds_exactly_one_default_row() {
        let (service, repo) = service();
        let settings = service.get_settings().await.unwrap();
        assert_eq!(settings.earn_with_us_link, DEFAULT_EARN_WITH_US_LINK);
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_reads_return_identical_values() {
        let (service, repo) = service();
        let first = service.get_settings().await.unwrap();
        let second = service.get_settings().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn updated_link_is_visible_on_next_read() {
        let (service, _) = service();
        let update = SettingsUpdate {
            earn_with_us_link: Some("https://example.com/earn".to_string()),
            ..Default::default()
        };
        let updated = service.update_settings(&update).await.unwrap();
        assert_eq!(updated.earn_with_us_link, "https://example.com/earn");

        let read_back = service.get_settings().await.unwrap();
        assert_eq!(read_back.earn_with_us_link, "https://example.com/earn");
    }

    #[tokio::test]
    async fn empty_update_keeps_existing_value() {
        let (service, _) = service();
        let update = SettingsUpdate {
            earn_with_us_link: Some("https://example.com/earn".to_string()),
            ..Default::default()
        };
        service.update_settings(&update).await.unwrap();

        for empty in [None, Some(String::new()), Some("   ".to_string())] {
            let result = service
                .update_settings(&SettingsUpdate {
                    earn_with_us_link: empty,
                    ..Default::default()
                })
                .await
                .unwrap();
            assert_eq!(result.earn_with_us_link, "https://example.com/earn");
        }
    }

    #[tokio::test]
    async fn empty_update_on_empty_store_creates_default_row() {
        let (service, repo) = service();
        let result = service
            .update_settings(&SettingsUpdate::default())
            .await
            .unwrap();
        assert_eq!(result.earn_with_us_link, DEFAULT_EARN_WITH_US_LINK);
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn use_default_policy_resets_link() {
        let (service, _) = service();
        service
            .update_settings(&SettingsUpdate {
                earn_with_us_link: Some("https://example.com/earn".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = service
            .update_settings(&SettingsUpdate {
                earn_with_us_link: None,
                on_empty: OnEmpty::UseDefault,
            })
            .await
            .unwrap();
        assert_eq!(result.earn_with_us_link, DEFAULT_EARN_WITH_US_LINK);
    }

    #[test]
    fn update_payload_uses_camel_case() {
        let update: SettingsUpdate = serde_json::from_str(
            r#"{"earnWithUsLink": "https://example.com/earn", "onEmpty": "useDefault"}"#,
        )
        .unwrap();
        assert_eq!(update.link(), Some("https://example.com/earn"));
        assert_eq!(update.on_empty, OnEmpty::UseDefault);

        let bare: SettingsUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.link(), None);
        assert_eq!(bare.on_empty, OnEmpty::KeepExisting);
    }
}
