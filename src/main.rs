use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;

use expense_ledger::audit::AuditLogger;
use expense_ledger::cli::{
    handle_audit_command, handle_summary_command, run_menu, MenuOptions, SummaryArgs,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::models::Currency;
use expense_ledger::Ledger;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal expense tracker",
    long_about = "Track expenses from a text menu: add, edit and delete them, \
                  filter by category or date, total spending against a monthly \
                  budget, and move everything in and out of CSV files."
)]
struct Cli {
    /// Currency symbol, code or name for this session (e.g. "$", "EUR", "yen")
    #[arg(short, long, global = true)]
    currency: Option<String>,

    /// CSV file to load before the menu starts
    #[arg(short, long, global = true)]
    import: Option<PathBuf>,

    /// Don't clear the screen before showing the menu
    #[arg(long, global = true)]
    no_clear: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    Menu,

    /// Show current configuration and paths
    Config,

    /// Set the default currency
    Currency {
        /// Currency symbol, code or name
        #[arg(value_name = "CURRENCY")]
        choice: String,
    },

    /// Print a table and totals for an exported CSV file
    Summary(SummaryArgs),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let currency = cli
        .currency
        .as_deref()
        .map(Currency::from_input)
        .unwrap_or(settings.currency);

    match cli.command {
        None | Some(Commands::Menu) => {
            let mut ledger = Ledger::new(currency);
            if settings.audit_enabled {
                paths.ensure_directories()?;
                ledger = ledger.with_audit(AuditLogger::new(paths.audit_log()));
            }

            if let Some(file) = &cli.import {
                let count = ledger.import_csv(file)?;
                println!("Imported {} expenses from {}", count, file.display());
            }

            let mut stdout = io::stdout();
            if !cli.no_clear && stdout.is_tty() {
                execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
            }

            let options = MenuOptions {
                export_file: settings.export_file(&paths),
                date_format: settings.display_date_format.clone(),
            };
            run_menu(&mut ledger, &options, io::stdin().lock(), stdout.lock())?;
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Export file:    {}", settings.export_file(&paths).display());
            println!();
            println!("Settings:");
            println!("  Currency:      {}", settings.currency);
            println!("  Date format:   {}", settings.display_date_format);
            println!("  Audit enabled: {}", settings.audit_enabled);
        }
        Some(Commands::Currency { choice }) => {
            let Some(chosen) = Currency::lookup(&choice) else {
                anyhow::bail!(
                    "Unknown currency '{}'. Choose one of: {}",
                    choice,
                    Currency::ALL
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            };
            settings.currency = chosen;
            settings.save(&paths)?;
            println!("Default currency set to {}", chosen);
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(
                &args,
                currency,
                &settings.display_date_format,
                io::stdout().lock(),
            )?;
        }
        Some(Commands::Audit { limit }) => {
            let logger = AuditLogger::new(paths.audit_log());
            handle_audit_command(&logger, limit, io::stdout().lock())?;
        }
    }

    io::stdout().flush()?;
    Ok(())
}
