//! Service layer for minha-nota
//!
//! The service layer provides business logic on top of the storage layer,
//! validating every settings change before it is written.

pub mod settings;

pub use settings::SettingsService;
