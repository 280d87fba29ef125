//! Render and copy CLI commands
//!
//! Resolve the templates for a reference month and print them, or put one
//! field on the clipboard.

use std::collections::BTreeMap;
use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use tracing::warn;

use crate::clipboard::{ClipboardWriter, CopyAction, CopyOutcome};
use crate::display::format_rendered_message;
use crate::error::NotaResult;
use crate::services::SettingsService;
use crate::storage::KeyValueStore;
use crate::template::{parse_reference_date, today, MessageField, RenderedMessage, Renderer};

/// Message field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    /// Recipient e-mail address
    Email,
    /// Rendered subject
    Subject,
    /// Rendered body
    Body,
}

impl From<FieldArg> for MessageField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Email => MessageField::Email,
            FieldArg::Subject => MessageField::Subject,
            FieldArg::Body => MessageField::Body,
        }
    }
}

/// Arguments for `render`
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Reference date (YYYY-MM-DD or YYYY-MM), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print only one field
    #[arg(short, long, value_enum)]
    pub field: Option<FieldArg>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `copy`
#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Field to copy
    #[arg(value_enum)]
    pub field: FieldArg,

    /// Reference date (YYYY-MM-DD or YYYY-MM), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Resolve the optional `--date` argument
pub fn resolve_date(date: Option<&str>) -> NotaResult<NaiveDate> {
    match date {
        Some(input) => parse_reference_date(input),
        None => Ok(today()),
    }
}

fn render_message<S: KeyValueStore>(
    service: &SettingsService<S>,
    renderer: &Renderer,
    date: Option<&str>,
) -> NotaResult<RenderedMessage> {
    let date = resolve_date(date)?;

    if !service.is_configured()? {
        eprintln!("No settings saved yet. Run 'minha-nota setup' first.");
    }

    let message = service.render(renderer, date)?;

    let unresolved = message.unresolved_tokens();
    if !unresolved.is_empty() {
        warn!(tokens = ?unresolved, "unresolved tokens in rendered message");
        let listed: Vec<String> = unresolved.iter().map(|t| format!("{{{}}}", t)).collect();
        eprintln!("Warning: unresolved tokens: {}", listed.join(", "));
    }

    Ok(message)
}

/// Handle the `render` command
pub fn handle_render_command<S: KeyValueStore>(
    service: &SettingsService<S>,
    renderer: &Renderer,
    args: RenderArgs,
) -> NotaResult<()> {
    let message = render_message(service, renderer, args.date.as_deref())?;

    match (args.field, args.json) {
        (Some(field), true) => {
            let field = MessageField::from(field);
            let value = BTreeMap::from([(field.to_string(), message.field(field))]);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        (Some(field), false) => println!("{}", message.field(field.into())),
        (None, true) => println!("{}", serde_json::to_string_pretty(&message)?),
        (None, false) => print!("{}", format_rendered_message(&message)),
    }

    Ok(())
}

/// Handle the `copy` command
///
/// Shows the copied label for the feedback window before returning.
pub fn handle_copy_command<S, C>(
    service: &SettingsService<S>,
    renderer: &Renderer,
    clipboard: &mut C,
    feedback: Duration,
    args: CopyArgs,
) -> NotaResult<()>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    let message = render_message(service, renderer, args.date.as_deref())?;
    let field = MessageField::from(args.field);

    let mut action = CopyAction::new(feedback);
    match action.copy(clipboard, message.field(field))? {
        CopyOutcome::Skipped => {
            println!("Nothing to copy: {} is empty.", field);
        }
        CopyOutcome::Copied => {
            println!("{}: {}", action.label_at(Instant::now()), field);
            while let Some(remaining) = action.remaining_at(Instant::now()) {
                thread::sleep(remaining);
            }
            action.tick(Instant::now());
        }
    }

    Ok(())
}
