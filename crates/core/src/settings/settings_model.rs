use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed key of the platform settings row. Creation inserts under this key
/// with INSERT OR IGNORE, so concurrent first reads cannot produce duplicates.
pub const SETTINGS_RECORD_ID: &str = "platform";

/// Link shown to sellers when no value has been configured yet.
pub const DEFAULT_EARN_WITH_US_LINK: &str = "https://play.google.com/store";

/// Platform-wide configuration record. Exactly one row exists once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: String,
    pub earn_with_us_link: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// What to do when an update carries no usable link.
///
/// `KeepExisting` preserves the historical behavior (an empty update is a
/// no-op); `UseDefault` resets the link to [`DEFAULT_EARN_WITH_US_LINK`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum OnEmpty {
    #[default]
    KeepExisting,
    UseDefault,
}

/// Update payload for the settings record.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default)]
    pub earn_with_us_link: Option<String>,
    #[serde(default)]
    pub on_empty: OnEmpty,
}

impl SettingsUpdate {
    /// The submitted link, trimmed; `None` when the field is missing, empty,
    /// or whitespace-only.
    pub fn link(&self) -> Option<&str> {
        self.earn_with_us_link
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
