//! Expense display formatting
//!
//! Provides the numbered one-line listing used by the menu and a full table
//! view with every field.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::codec::{format_amount, format_date, format_date_with};
use crate::models::ExpenseRecord;

/// Shown instead of a listing when there is nothing to list
pub const NO_EXPENSES: &str = "No expenses recorded yet!";

/// Format a single record as `Name | Category | $amount`
pub fn format_expense_row(expense: &ExpenseRecord) -> String {
    format!(
        "{} | {} | {}",
        expense.name,
        expense.category,
        format_amount(expense.amount, expense.currency.symbol())
    )
}

/// Format records as a numbered list, numbering from 1
pub fn format_expense_list<'a, I>(expenses: I) -> String
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut output = String::new();

    for (i, expense) in expenses.into_iter().enumerate() {
        output.push_str(&format!("\t{}. {}\n", i + 1, format_expense_row(expense)));
    }

    if output.is_empty() {
        output.push_str(NO_EXPENSES);
        output.push('\n');
    }

    output
}

#[derive(Tabled)]
struct ExpenseTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format records as a table with every field
///
/// Dates use `date_format`, or `YYYY/M/D` when that format is unusable.
pub fn format_expense_table<'a, I>(expenses: I, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let rows: Vec<ExpenseTableRow> = expenses
        .into_iter()
        .enumerate()
        .map(|(i, e)| ExpenseTableRow {
            index: i + 1,
            date: format_date_with(e.date, date_format)
                .unwrap_or_else(|_| format_date(e.date)),
            name: e.name.clone(),
            category: e.category.clone(),
            amount: format_amount(e.amount, e.currency.symbol()),
            description: e.description.clone(),
        })
        .collect();

    if rows.is_empty() {
        return format!("{}\n", NO_EXPENSES);
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
