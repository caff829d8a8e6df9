//! Display formatting for terminal output
//!
//! Turns records, totals and budget comparisons into the text the CLI prints.

pub mod expense;
pub mod report;

pub use expense::{format_expense_list, format_expense_row, format_expense_table, NO_EXPENSES};
pub use report::{format_budget_status, format_total, format_total_all};
