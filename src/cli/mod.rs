//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot subcommands,
//! bridging the clap argument parsing with the ledger.

pub mod audit;
pub mod menu;
pub mod prompt;
pub mod summary;

pub use audit::handle_audit_command;
pub use menu::{run_menu, MenuChoice, MenuOptions};
pub use prompt::Prompt;
pub use summary::{handle_summary_command, SummaryArgs};
