//! Profile step: recipient, company and salary

use std::io::{BufRead, Write};

use crate::error::NotaResult;
use crate::models::{Money, Settings};
use crate::setup::prompt::Prompter;

/// Profile setup step
pub struct ProfileStep;

impl ProfileStep {
    /// Ask for e-mail, company and amount, keeping current values on empty input
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        settings: &mut Settings,
    ) -> NotaResult<()> {
        prompter.say("")?;
        prompter.say("Step 1: Who gets the invoice")?;
        prompter.say("----------------------------")?;

        settings.email = prompter.ask_with_default("Recipient e-mail", &settings.email)?;
        settings.company = prompter.ask_with_default("Company name", &settings.company)?;
        settings.amount = Self::ask_amount(prompter, settings.amount)?;

        Ok(())
    }

    fn ask_amount<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        current: Option<Money>,
    ) -> NotaResult<Option<Money>> {
        let current_text = current.map(|m| m.to_string()).unwrap_or_default();

        loop {
            let answer = prompter.ask_with_default("Salary (e.g. 5.000,00)", &current_text)?;
            if answer.is_empty() {
                return Ok(current);
            }

            match Money::parse(&answer) {
                Ok(amount) if amount.is_negative() => {
                    prompter.say("Salary cannot be negative.")?;
                }
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => prompter.say(&format!("{}. Try again.", e))?,
            }
        }
    }
}
