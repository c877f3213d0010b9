//! SQLite storage implementation for the platform settings record.

mod model;
mod repository;

pub use model::PlatformSettingsDB;
pub use repository::SettingsRepository;

// Re-export trait from core for convenience
pub use markethub_core::settings::SettingsRepositoryTrait;
