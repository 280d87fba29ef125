use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use minha_nota::cli::{
    handle_account_command, handle_copy_command, handle_pix_command, handle_render_command,
    handle_settings_command, AccountCommands, CopyArgs, PixCommands, RenderArgs,
    SettingsCommands,
};
use minha_nota::clipboard::SystemClipboard;
use minha_nota::config::{NotaPaths, Preferences};
use minha_nota::logging::init_tracing;
use minha_nota::services::SettingsService;
use minha_nota::setup::{Prompter, SetupWizard};
use minha_nota::template::{today, Renderer};

#[derive(Parser)]
#[command(
    name = "minha-nota",
    version,
    about = "Monthly billing e-mails from a saved template",
    long_about = "minha-nota keeps the recipient, company, salary, bank accounts and PIX \
                  keys you bill with, and fills the month, year and amounts into your \
                  subject and body templates every month."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (defaults to the platform config directory)
    #[arg(long, env = "MINHA_NOTA_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render this month's message
    Render(RenderArgs),

    /// Copy one rendered field to the clipboard
    Copy(CopyArgs),

    /// Fill in the settings interactively
    #[command(alias = "init")]
    Setup,

    /// Settings management commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Bank account commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// PIX key commands
    #[command(subcommand)]
    Pix(PixCommands),

    /// Show current configuration and paths
    Config {
        /// Write the preferences file with its current values
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and preferences
    let paths = match cli.data_dir {
        Some(dir) => NotaPaths::with_base_dir(dir),
        None => NotaPaths::new()?,
    };
    let preferences = Preferences::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let renderer = Renderer::new().with_company_fallback(preferences.company_fallback.clone());
    let mut service = SettingsService::open(&paths, &preferences);

    match cli.command {
        Some(Commands::Render(args)) => {
            handle_render_command(&service, &renderer, args)?;
        }
        Some(Commands::Copy(args)) => {
            let mut clipboard = SystemClipboard::new();
            handle_copy_command(
                &service,
                &renderer,
                &mut clipboard,
                preferences.copy_feedback(),
                args,
            )?;
        }
        Some(Commands::Setup) => {
            let wizard = SetupWizard::new(renderer, today());
            let mut prompter = Prompter::stdio();
            wizard.run(&mut prompter, &mut service)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut service, cmd)?;
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&mut service, cmd)?;
        }
        Some(Commands::Pix(cmd)) => {
            handle_pix_command(&mut service, cmd)?;
        }
        Some(Commands::Config { write }) => {
            if write {
                preferences.save(&paths)?;
            }

            println!("minha-nota Configuration");
            println!("========================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Preferences file: {}", paths.preferences_file().display());
            println!("Storage file:     {}", paths.storage_file().display());
            println!();
            println!("Preferences:");
            println!("  Company fallback:  {}", preferences.company_fallback);
            println!(
                "  Copy feedback:     {} ms",
                preferences.copy_feedback().as_millis()
            );
            println!("  Storage key:       {}", preferences.storage_key);
            if !paths.preferences_file().exists() {
                println!();
                println!("Using defaults. Run 'minha-nota config --write' to create the file.");
            }
        }
        None => {
            println!("minha-nota - monthly billing e-mails from a saved template");
            println!();
            println!("Run 'minha-nota --help' for usage information.");
            println!("Run 'minha-nota setup' to fill in your settings.");
        }
    }

    Ok(())
}
