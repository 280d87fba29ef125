//! Entries step: bank accounts and PIX keys

use std::io::{BufRead, Write};

use crate::display::{format_bank_account_list, format_pix_list};
use crate::error::NotaResult;
use crate::models::bank_account::BANK_ACCOUNT_TOKEN_PREFIX;
use crate::models::pix::PIX_TOKEN_PREFIX;
use crate::models::{BankAccount, PixEntry, Settings};
use crate::setup::prompt::Prompter;
use crate::template::positional_token;

/// Bank account and PIX setup step
pub struct EntriesStep;

impl EntriesStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        settings: &mut Settings,
    ) -> NotaResult<()> {
        prompter.say("")?;
        prompter.say("Step 3: Payment details")?;
        prompter.say("-----------------------")?;

        Self::bank_accounts(prompter, settings)?;
        Self::pix_entries(prompter, settings)?;

        Ok(())
    }

    fn bank_accounts<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        settings: &mut Settings,
    ) -> NotaResult<()> {
        if !settings.bank_accounts.is_empty() {
            prompter.say("Current bank accounts:")?;
            prompter.say(format_bank_account_list(&settings.bank_accounts).trim_end())?;
            if !prompter.confirm("Keep them?", true)? {
                settings.bank_accounts.clear();
            }
        }

        while prompter.confirm("Add a bank account?", false)? {
            let name = prompter.ask("  Institution")?;
            let agency = prompter.ask("  Agency")?;
            let number = prompter.ask("  Account number")?;

            let account = BankAccount::new(name, agency, number);
            if account.name.is_empty() || account.agency.is_empty() || account.number.is_empty() {
                prompter.say("  Incomplete bank account skipped.")?;
                continue;
            }

            let position = settings.add_bank_account(account);
            prompter.say(&format!(
                "  Added as {{{}}}",
                positional_token(BANK_ACCOUNT_TOKEN_PREFIX, position)
            ))?;
        }

        Ok(())
    }

    fn pix_entries<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        settings: &mut Settings,
    ) -> NotaResult<()> {
        if !settings.pix.is_empty() {
            prompter.say("Current PIX keys:")?;
            prompter.say(format_pix_list(&settings.pix).trim_end())?;
            if !prompter.confirm("Keep them?", true)? {
                settings.pix.clear();
            }
        }

        while prompter.confirm("Add a PIX key?", false)? {
            let key = prompter.ask("  Key")?;
            let owner = prompter.ask("  Owner")?;
            let bank = prompter.ask("  Institution")?;

            let pix = PixEntry::new(key, owner, bank);
            if pix.key.is_empty() || pix.owner.is_empty() || pix.bank.is_empty() {
                prompter.say("  Incomplete PIX key skipped.")?;
                continue;
            }

            let position = settings.add_pix(pix);
            prompter.say(&format!(
                "  Added as {{{}}}",
                positional_token(PIX_TOKEN_PREFIX, position)
            ))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, settings: &mut Settings) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        EntriesStep::run(&mut prompter, settings).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_adds_accounts_and_pix() {
        let mut settings = Settings::default();
        let input = "y\nNubank\n0001\n123-4\nn\ny\nfulano@pix.com\nFulano\nInter\nn\n";
        let output = run(input, &mut settings);

        assert_eq!(settings.bank_accounts, vec![BankAccount::new("Nubank", "0001", "123-4")]);
        assert_eq!(settings.pix, vec![PixEntry::new("fulano@pix.com", "Fulano", "Inter")]);
        assert!(output.contains("Added as {CONTA_01}"));
        assert!(output.contains("Added as {PIX_01}"));
    }

    #[test]
    fn test_incomplete_entry_skipped() {
        let mut settings = Settings::default();
        let output = run("y\nNubank\n\n123\nn\nn\n", &mut settings);

        assert!(settings.bank_accounts.is_empty());
        assert!(output.contains("Incomplete bank account skipped."));
    }

    #[test]
    fn test_existing_entries_can_be_replaced() {
        let mut settings = Settings::default();
        settings.add_bank_account(BankAccount::new("Old", "1", "1"));
        settings.add_pix(PixEntry::new("k", "o", "b"));

        run("no\nn\n\nn\n", &mut settings);

        assert!(settings.bank_accounts.is_empty());
        assert_eq!(settings.pix.len(), 1);
    }
}
