//! Database-agnostic domain layer for the Markethub marketplace backend.
//!
//! Storage-specific code lives in `markethub-storage-sqlite`; this crate only
//! defines domain models, repository traits, and services.

pub mod errors;
pub mod settings;

pub use errors::{Error, Result};
