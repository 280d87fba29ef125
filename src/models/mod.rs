//! Core data models for minha-nota
//!
//! This module contains the data structures behind the billing template:
//! the settings object, its bank accounts and PIX entries, and money.

pub mod bank_account;
pub mod money;
pub mod pix;
pub mod settings;

pub use bank_account::BankAccount;
pub use money::{Money, MoneyParseError};
pub use pix::PixEntry;
pub use settings::Settings;
