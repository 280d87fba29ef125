//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod pix;
pub mod render;
pub mod settings;

pub use account::{handle_account_command, AccountCommands};
pub use pix::{handle_pix_command, PixCommands};
pub use render::{handle_copy_command, handle_render_command, CopyArgs, FieldArg, RenderArgs};
pub use settings::{handle_settings_command, SettingsCommands};
