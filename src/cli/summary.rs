//! Non-interactive summary of a CSV file

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::codec::{format_amount, parse_amount, parse_date_range};
use crate::display::{format_budget_status, format_expense_table, format_total, format_total_all};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::Currency;

/// Arguments for `expense summary`
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// CSV file in export format
    pub file: PathBuf,

    /// Start of the date range (YYYY/MM/DD)
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// End of the date range (YYYY/MM/DD)
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Monthly budget to compare spending against
    #[arg(short, long)]
    pub budget: Option<String>,
}

/// Load `args.file` into a scratch ledger and print its table and totals
pub fn handle_summary_command<W: Write>(
    args: &SummaryArgs,
    currency: Currency,
    date_format: &str,
    mut out: W,
) -> LedgerResult<()> {
    let mut ledger = Ledger::new(currency);
    ledger.import_csv(&args.file)?;

    match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            let range = parse_date_range(from, to)?;
            let table = format_expense_table(ledger.filter_by_range(&range), date_format);
            out.write_all(table.as_bytes())?;
            writeln!(out, "{}", format_total(&range, ledger.total_in(&range), currency))?;
        }
        _ => {
            out.write_all(format_expense_table(ledger.list(), date_format).as_bytes())?;
            writeln!(out, "{}", format_total_all(ledger.total_all(), currency))?;
        }
    }

    if let Some(budget) = &args.budget {
        let budget = parse_amount(budget, currency.symbol())?;
        ledger.set_monthly_budget(budget)?;
        writeln!(out, "Monthly budget: {}", format_amount(budget, currency.symbol()))?;
        writeln!(out, "{}", format_budget_status(ledger.budget_status(), currency))?;
    }

    Ok(())
}
