//! Expense Ledger - Terminal expense tracker
//!
//! This library provides the core of the `expense` command: an in-memory
//! ledger of dated expense records, a text codec for amounts, dates and CSV
//! rows, and the interactive menu that drives them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, currency, expense records, budget status)
//! - `codec`: Amount, date and CSV row conversion
//! - `ledger`: The expense collection and its reports
//! - `audit`: Audit logging of ledger changes
//! - `config`: Configuration and path management
//! - `display`: Text formatting for terminal output
//! - `cli`: Interactive menu and subcommand handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use expense_ledger::models::{Currency, Money, NewExpense};
//! use expense_ledger::Ledger;
//!
//! let mut ledger = Ledger::new(Currency::Dollar);
//! ledger.add(NewExpense::new("rent", "housing", Money::from_cents(120050), "")).unwrap();
//! assert_eq!(ledger.total_all(), Money::from_cents(120050));
//! ```

pub mod audit;
pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
