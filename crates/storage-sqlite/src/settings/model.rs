//! Database model for the platform settings record.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use markethub_core::settings::{Settings, SETTINGS_RECORD_ID};

/// Database model for the singleton settings row
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::platform_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettingsDB {
    pub id: String,
    pub earn_with_us_link: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PlatformSettingsDB {
    /// Fresh row under the fixed record id, both timestamps set to now.
    pub fn seed(link: &str) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: SETTINGS_RECORD_ID.to_string(),
            earn_with_us_link: link.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

// Conversion to the domain model
impl From<PlatformSettingsDB> for Settings {
    fn from(db: PlatformSettingsDB) -> Self {
        Self {
            id: db.id,
            earn_with_us_link: db.earn_with_us_link,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
