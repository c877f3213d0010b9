use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::model::PlatformSettingsDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::platform_settings::dsl::*;
use markethub_core::errors::Result;
use markethub_core::settings::{Settings, SettingsRepositoryTrait, SETTINGS_RECORD_ID};

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

fn load_row(conn: &mut SqliteConnection) -> Result<Settings> {
    platform_settings
        .find(SETTINGS_RECORD_ID)
        .first::<PlatformSettingsDB>(conn)
        .map(Settings::from)
        .map_err(|e| StorageError::from(e).into())
}

// Implement the trait for SettingsRepository
#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self) -> Result<Option<Settings>> {
        let mut conn = get_connection(&self.pool)?;
        let row = platform_settings
            .find(SETTINGS_RECORD_ID)
            .first::<PlatformSettingsDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Settings::from))
    }

    async fn create_if_absent(&self, link: &str) -> Result<Settings> {
        let row = PlatformSettingsDB::seed(link);
        self.writer
            .exec(move |conn| {
                // INSERT OR IGNORE: under a racing first access one insert
                // wins and both callers read the surviving row.
                diesel::insert_or_ignore_into(platform_settings)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                load_row(conn)
            })
            .await
    }

    async fn upsert_link(&self, new_link: &str) -> Result<Settings> {
        let new_link = new_link.to_string();
        self.writer
            .exec(move |conn| {
                let now = chrono::Utc::now().naive_utc();
                diesel::insert_into(platform_settings)
                    .values(&PlatformSettingsDB::seed(&new_link))
                    .on_conflict(id)
                    .do_update()
                    .set((earn_with_us_link.eq(&new_link), updated_at.eq(now)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                load_row(conn)
            })
            .await
    }
}
