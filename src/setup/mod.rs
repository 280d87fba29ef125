//! Interactive setup
//!
//! Walks a user through the settings form on first use, or edits the
//! existing settings later.

pub mod prompt;
pub mod steps;
pub mod wizard;

pub use prompt::Prompter;
pub use wizard::{SetupResult, SetupWizard};
