//! Display formatting for terminal output
//!
//! Provides utilities for formatting settings, entry tables and rendered
//! messages for terminal display.

pub mod settings;

pub use settings::{
    format_bank_account_list, format_pix_list, format_rendered_message, format_settings_details,
    format_validation_errors,
};
