//! minha-nota - monthly billing e-mails from a saved template
//!
//! A user saves a recipient, company, salary, bank accounts and PIX keys
//! once, together with subject and body templates. Each month the templates
//! are rendered for the reference date and the fields copied out.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and preferences
//! - `error`: Custom error types
//! - `models`: Settings, money, bank accounts and PIX entries
//! - `template`: Tokenizer and renderer for `{MES}`, `{CONTA_01}`, ...
//! - `storage`: JSON key-value storage for the settings blob
//! - `services`: Business logic layer
//! - `clipboard`: Clipboard access and the copy action
//! - `export`: JSON/YAML export and import
//! - `display`: Terminal formatting
//! - `setup`: Interactive settings form
//! - `cli`: Command handlers
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use minha_nota::models::{Money, Settings};
//! use minha_nota::template::render;
//!
//! let settings = Settings {
//!     company: "Acme".into(),
//!     subject: "Recibo {MES}/{ANO} - {EMPRESA}".into(),
//!     amount: Some(Money::from_cents(123450)),
//!     ..Settings::default()
//! };
//! let date = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
//! assert_eq!(render(&settings, date).subject, "Recibo Julho/2024 - Acme");
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod setup;
pub mod storage;
pub mod template;

pub use error::NotaError;
