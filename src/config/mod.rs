//! Configuration module for minha-nota
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - Application preferences persistence

pub mod paths;
pub mod preferences;

pub use paths::NotaPaths;
pub use preferences::Preferences;
