//! Bank account CLI commands
//!
//! Bank accounts are addressed by their 1-based position, which is also the
//! number in their `{CONTA_NN}` token.

use clap::Subcommand;

use crate::display::format_bank_account_list;
use crate::error::NotaResult;
use crate::models::bank_account::BANK_ACCOUNT_TOKEN_PREFIX;
use crate::models::BankAccount;
use crate::services::SettingsService;
use crate::storage::KeyValueStore;
use crate::template::positional_token;

/// Bank account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Append a bank account
    Add {
        /// Institution name
        #[arg(short, long)]
        name: String,
        /// Branch (agência)
        #[arg(short, long)]
        agency: String,
        /// Account number
        #[arg(long)]
        number: String,
    },
    /// List bank accounts with their tokens
    List,
    /// Remove the bank account at a position
    Remove {
        /// Position as shown by `account list`
        position: usize,
    },
    /// Move a bank account to another position
    Move {
        /// Current position
        from: usize,
        /// New position
        to: usize,
    },
}

/// Handle a bank account command
pub fn handle_account_command<S: KeyValueStore>(
    service: &mut SettingsService<S>,
    cmd: AccountCommands,
) -> NotaResult<()> {
    match cmd {
        AccountCommands::Add {
            name,
            agency,
            number,
        } => {
            let position = service.add_bank_account(BankAccount::new(name, agency, number))?;
            println!(
                "Added bank account as {{{}}}",
                positional_token(BANK_ACCOUNT_TOKEN_PREFIX, position)
            );
        }

        AccountCommands::List => {
            let settings = service.load()?;
            print!("{}", format_bank_account_list(&settings.bank_accounts));
        }

        AccountCommands::Remove { position } => {
            let removed = service.remove_bank_account(position)?;
            println!("Removed bank account: {}", removed.name);
        }

        AccountCommands::Move { from, to } => {
            service.move_bank_account(from, to)?;
            println!(
                "Moved bank account to {{{}}}",
                positional_token(BANK_ACCOUNT_TOKEN_PREFIX, to)
            );
        }
    }

    Ok(())
}
