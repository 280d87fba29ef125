//! PIX CLI commands
//!
//! PIX entries are addressed by their 1-based position, which is also the
//! number in their `{PIX_NN}` token.

use clap::Subcommand;

use crate::display::format_pix_list;
use crate::error::NotaResult;
use crate::models::pix::PIX_TOKEN_PREFIX;
use crate::models::PixEntry;
use crate::services::SettingsService;
use crate::storage::KeyValueStore;
use crate::template::positional_token;

/// PIX subcommands
#[derive(Subcommand, Debug)]
pub enum PixCommands {
    /// Append a PIX key
    Add {
        /// PIX key (e-mail, phone, CPF/CNPJ or random key)
        #[arg(short, long)]
        key: String,
        /// Key owner
        #[arg(short, long)]
        owner: String,
        /// Institution name
        #[arg(short, long)]
        bank: String,
    },
    /// List PIX keys with their tokens
    List,
    /// Remove the PIX key at a position
    Remove {
        /// Position as shown by `pix list`
        position: usize,
    },
    /// Move a PIX key to another position
    Move {
        /// Current position
        from: usize,
        /// New position
        to: usize,
    },
}

/// Handle a PIX command
pub fn handle_pix_command<S: KeyValueStore>(
    service: &mut SettingsService<S>,
    cmd: PixCommands,
) -> NotaResult<()> {
    match cmd {
        PixCommands::Add { key, owner, bank } => {
            let position = service.add_pix(PixEntry::new(key, owner, bank))?;
            println!(
                "Added PIX key as {{{}}}",
                positional_token(PIX_TOKEN_PREFIX, position)
            );
        }

        PixCommands::List => {
            let settings = service.load()?;
            print!("{}", format_pix_list(&settings.pix));
        }

        PixCommands::Remove { position } => {
            let removed = service.remove_pix(position)?;
            println!("Removed PIX key: {}", removed.key);
        }

        PixCommands::Move { from, to } => {
            service.move_pix(from, to)?;
            println!(
                "Moved PIX key to {{{}}}",
                positional_token(PIX_TOKEN_PREFIX, to)
            );
        }
    }

    Ok(())
}
