//! Templates step: subject and body

use std::io::{BufRead, Write};

use crate::error::NotaResult;
use crate::models::Settings;
use crate::setup::prompt::Prompter;

/// Template setup step
pub struct TemplatesStep;

impl TemplatesStep {
    /// Ask for the subject and body templates
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        settings: &mut Settings,
    ) -> NotaResult<()> {
        prompter.say("")?;
        prompter.say("Step 2: Message templates")?;
        prompter.say("-------------------------")?;
        prompter.say("Available tokens:")?;
        prompter.say("  {MES}        month name, e.g. Julho")?;
        prompter.say("  {ANO}        four-digit year")?;
        prompter.say("  {EMPRESA}    company name")?;
        prompter.say("  {SALARIO}    salary, e.g. R$ 5.000,00 (body only)")?;
        prompter.say("  {CONTA_01}   first bank account (body only)")?;
        prompter.say("  {PIX_01}     first PIX key (body only)")?;
        prompter.say("")?;

        settings.subject = prompter.ask_with_default("Subject", &settings.subject)?;

        if !settings.body.is_empty() {
            prompter.say("Current body:")?;
            for line in settings.body.lines() {
                prompter.say(&format!("  {}", line))?;
            }
        }
        settings.body = prompter.ask_multiline("Body", &settings.body)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_subject_and_body() {
        let input = "Nota {MES}/{ANO}\nOlá,\nsegue a nota de {SALARIO}.\n.\n";
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut settings = Settings::default();

        TemplatesStep::run(&mut prompter, &mut settings).unwrap();

        assert_eq!(settings.subject, "Nota {MES}/{ANO}");
        assert_eq!(settings.body, "Olá,\nsegue a nota de {SALARIO}.");
    }
}
