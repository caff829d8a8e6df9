//! Core data models for the expense ledger
//!
//! This module contains the data structures of the expense domain: records,
//! money amounts, currencies, date ranges and budget comparisons.

pub mod budget;
pub mod currency;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::BudgetStatus;
pub use currency::Currency;
pub use expense::{title_case, DateRange, EditExpense, ExpenseRecord, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
