//! Setup wizard orchestration
//!
//! Walks through the settings form, previews the rendered message and saves
//! the result through the settings service.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::display::{format_rendered_message, format_validation_errors};
use crate::error::NotaResult;
use crate::models::Settings;
use crate::services::SettingsService;
use crate::storage::KeyValueStore;
use crate::template::Renderer;

use super::prompt::Prompter;
use super::steps::{entries::EntriesStep, profile::ProfileStep, templates::TemplatesStep};

/// Result of running the setup wizard
pub struct SetupResult {
    /// Whether the settings were saved
    pub completed: bool,
    /// The settings as entered
    pub settings: Settings,
}

/// The setup wizard
pub struct SetupWizard {
    renderer: Renderer,
    preview_date: NaiveDate,
}

impl SetupWizard {
    /// Create a wizard that previews messages for `preview_date`
    pub fn new(renderer: Renderer, preview_date: NaiveDate) -> Self {
        Self {
            renderer,
            preview_date,
        }
    }

    /// Run the interactive wizard, starting from the stored settings
    pub fn run<R, W, S>(
        &self,
        prompter: &mut Prompter<R, W>,
        service: &mut SettingsService<S>,
    ) -> NotaResult<SetupResult>
    where
        R: BufRead,
        W: Write,
        S: KeyValueStore,
    {
        let mut settings = service.load()?;

        prompter.say("")?;
        prompter.say("===========================================")?;
        prompter.say("  minha-nota setup")?;
        prompter.say("===========================================")?;
        prompter.say("")?;
        prompter.say("Fill in the invoice e-mail details once; every month")?;
        prompter.say("'minha-nota render' fills in the date for you.")?;
        prompter.say("Press Enter to keep the value shown in brackets.")?;

        if !prompter.confirm("Ready to begin?", true)? {
            prompter.say("Setup cancelled.")?;
            return Ok(SetupResult {
                completed: false,
                settings,
            });
        }

        loop {
            ProfileStep::run(prompter, &mut settings)?;
            TemplatesStep::run(prompter, &mut settings)?;
            EntriesStep::run(prompter, &mut settings)?;

            let errors = settings.validation_errors();
            if errors.is_empty() {
                break;
            }

            prompter.say("")?;
            prompter.say("Some required fields are missing:")?;
            prompter.say(format_validation_errors(&errors).trim_end())?;
            if !prompter.confirm("Go through the steps again?", false)? {
                prompter.say("Setup cancelled. Nothing was saved.")?;
                return Ok(SetupResult {
                    completed: false,
                    settings,
                });
            }
        }

        let preview = self.renderer.render(&settings, self.preview_date);

        prompter.say("")?;
        prompter.say("===========================================")?;
        prompter.say("  Preview")?;
        prompter.say("===========================================")?;
        prompter.say("")?;
        prompter.say(format_rendered_message(&preview).trim_end())?;
        prompter.say("")?;

        if !prompter.confirm("Save these settings?", true)? {
            prompter.say("Setup cancelled. Nothing was saved.")?;
            return Ok(SetupResult {
                completed: false,
                settings,
            });
        }

        service.save(&settings)?;

        prompter.say("")?;
        prompter.say("Setup complete!")?;
        prompter.say("")?;
        prompter.say("Next steps:")?;
        prompter.say("  - Run 'minha-nota render' to see this month's message")?;
        prompter.say("  - Run 'minha-nota copy body' to copy the body to the clipboard")?;
        prompter.say("")?;

        Ok(SetupResult {
            completed: true,
            settings,
        })
    }
}
