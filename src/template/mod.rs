//! Template engine for billing messages
//!
//! - `token`: single-pass tokenizer for `{NAME}` / `{NAME_NN}` placeholders
//! - `calendar`: reference dates and pt-BR month names
//! - `renderer`: substitution tables and the settings renderer

pub mod calendar;
pub mod renderer;
pub mod token;

pub use calendar::{month_name, parse_reference_date, today};
pub use renderer::{render, MessageField, Occurrence, RenderedMessage, Renderer, Substitutions};
pub use token::{positional_token, token_names, Segment, Tokenizer};
