//! Repository trait for the platform settings record.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::Settings;

/// Storage operations for the single settings row.
///
/// Implementations must make `create_if_absent` safe under concurrent first
/// access: when two callers race, one insert wins and both observe the
/// surviving row.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Read the settings row, if one has been created.
    fn get_settings(&self) -> Result<Option<Settings>>;

    /// Insert the row with the given link unless it already exists, then
    /// return whatever row survived.
    async fn create_if_absent(&self, link: &str) -> Result<Settings>;

    /// Create the row with the given link, or overwrite the link of the
    /// existing row. Returns the resulting record.
    async fn upsert_link(&self, link: &str) -> Result<Settings>;
}
