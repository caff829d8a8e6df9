//! Interactive text menu
//!
//! Collects raw answers, converts them with the codec and calls into the
//! ledger. Ledger errors are printed and the menu is shown again; only
//! console failures end the loop early.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::codec::{format_amount, format_date, parse_amount, parse_date, parse_date_range};
use crate::display::{
    format_budget_status, format_expense_list, format_expense_table, format_total,
    format_total_all, NO_EXPENSES,
};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{title_case, EditExpense, NewExpense};

use super::prompt::Prompt;

const MENU: &str = "\nExpense Tracker Menu:\n\
                    1. Add Expense\n\
                    2. View Expenses\n\
                    3. Edit Expense\n\
                    4. Delete Expense\n\
                    5. Filter by Category\n\
                    6. Filter by Date Range\n\
                    7. Total Spending\n\
                    8. Monthly Budget\n\
                    9. Export Expenses\n\
                    10. Import Expenses\n\
                    11. Exit";

/// One entry of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Edit,
    Delete,
    FilterCategory,
    FilterDateRange,
    TotalSpending,
    MonthlyBudget,
    Export,
    Import,
    Exit,
}

impl MenuChoice {
    /// Accepts the menu number or a short name such as "add" or "export"
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().to_lowercase().as_str() {
            "1" | "add" => Self::Add,
            "2" | "view" | "list" => Self::View,
            "3" | "edit" | "update" => Self::Edit,
            "4" | "delete" | "remove" => Self::Delete,
            "5" | "category" | "filter-by-category" => Self::FilterCategory,
            "6" | "dates" | "filter-by-date-range" => Self::FilterDateRange,
            "7" | "total" | "total-spending" => Self::TotalSpending,
            "8" | "budget" | "set-budget" => Self::MonthlyBudget,
            "9" | "export" => Self::Export,
            "10" | "import" => Self::Import,
            "11" | "exit" | "quit" | "q" => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Settings the menu needs beyond the ledger itself
#[derive(Debug, Clone)]
pub struct MenuOptions {
    /// Suggested file for export and import
    pub export_file: PathBuf,
    /// strftime format for the table view
    pub date_format: String,
}

/// Run the menu until the user exits or input ends
pub fn run_menu<R, W>(
    ledger: &mut Ledger,
    options: &MenuOptions,
    input: R,
    output: W,
) -> LedgerResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut prompt = Prompt::new(input, output);

    loop {
        prompt.say(MENU)?;
        let answer = match prompt.ask("I pick: ") {
            Ok(answer) => answer,
            Err(_) if prompt.at_eof() => return Ok(()),
            Err(e) => return Err(e),
        };

        let Some(choice) = MenuChoice::parse(&answer) else {
            prompt.say("Invalid choice. Please enter a number from 1 to 11.")?;
            continue;
        };

        if choice == MenuChoice::Exit {
            prompt.say("Exiting Expense Tracker, Goodbye!")?;
            return Ok(());
        }

        match run_choice(choice, ledger, options, &mut prompt) {
            Ok(()) => {}
            Err(_) if prompt.at_eof() => return Ok(()),
            Err(e @ LedgerError::Terminal(_)) => return Err(e),
            Err(e) => prompt.say(format!("Error: {}", e))?,
        }
    }
}

fn run_choice<R: BufRead, W: Write>(
    choice: MenuChoice,
    ledger: &mut Ledger,
    options: &MenuOptions,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    match choice {
        MenuChoice::Add => add_expense(ledger, prompt),
        MenuChoice::View => view_expenses(ledger, options, prompt),
        MenuChoice::Edit => edit_expense(ledger, prompt),
        MenuChoice::Delete => delete_expense(ledger, prompt),
        MenuChoice::FilterCategory => filter_by_category(ledger, prompt),
        MenuChoice::FilterDateRange => filter_by_date_range(ledger, prompt),
        MenuChoice::TotalSpending => total_spending(ledger, prompt),
        MenuChoice::MonthlyBudget => monthly_budget(ledger, prompt),
        MenuChoice::Export => export_expenses(ledger, options, prompt),
        MenuChoice::Import => import_expenses(ledger, options, prompt),
        MenuChoice::Exit => Ok(()),
    }
}

fn add_expense<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    prompt.say("Tracking new expense:")?;
    let name = prompt.ask("\tEnter name: ")?;
    let category = prompt.ask("\tEnter the category: ")?;
    let amount = parse_amount(&prompt.ask("\tEnter the amount: ")?, ledger.currency().symbol())?;
    let description = prompt.ask("\tEnter a description: ")?;
    let date = prompt
        .ask_optional("\tEnter the date (YYYY/MM/DD, blank for today): ")?
        .map(|d| parse_date(&d))
        .transpose()?;

    let mut input = NewExpense::new(name, category, amount, description);
    input.date = date;
    ledger.add(input)?;

    prompt.say("Expense added successfully!")
}

fn view_expenses<R: BufRead, W: Write>(
    ledger: &Ledger,
    options: &MenuOptions,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    if ledger.is_empty() {
        return prompt.say(NO_EXPENSES);
    }
    prompt.say("Viewing Expenses")?;
    prompt.write(&format_expense_table(ledger.list(), &options.date_format))
}

fn ask_index<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, label: &str) -> LedgerResult<usize> {
    let answer = prompt.ask(label)?;
    answer
        .trim()
        .parse()
        .map_err(|_| LedgerError::Parse(format!("'{}' is not a number", answer.trim())))
}

fn edit_expense<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    if ledger.is_empty() {
        return prompt.say(NO_EXPENSES);
    }
    prompt.write(&format_expense_list(ledger.list()))?;

    let index = ask_index(prompt, "\nEnter number to edit: ")?;
    // Fail before asking for the new values
    ledger.get(index)?;

    prompt.say("Press `Enter` to keep the current value!")?;
    let mut changes = EditExpense::new();
    changes.name = prompt.ask_optional("\tEnter new name: ")?;
    changes.category = prompt.ask_optional("\tEnter the category: ")?;
    changes.amount = prompt
        .ask_optional("\tEnter the amount: ")?
        .map(|a| parse_amount(&a, ledger.currency().symbol()))
        .transpose()?;
    changes.description = prompt.ask_optional("\tEnter a description: ")?;

    ledger.edit(index, changes)?;
    prompt.say("Expense updated successfully!")
}

fn delete_expense<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    if ledger.is_empty() {
        return prompt.say(NO_EXPENSES);
    }
    prompt.write(&format_expense_list(ledger.list()))?;

    let index = ask_index(prompt, "Enter number to delete: ")?;
    let removed = ledger.delete(index)?;
    prompt.say(format!("Expense '{}' removed successfully!", removed.name))
}

fn filter_by_category<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    if ledger.is_empty() {
        return prompt.say(NO_EXPENSES);
    }
    prompt.say(format!("Category List: {}", ledger.categories().join(", ")))?;

    let category = prompt.ask("\tEnter category name to filter: ")?;
    let matches = ledger.filter_by_category(&category);

    prompt.say(format!("\nExpenses in {} Category", title_case(&category)))?;
    prompt.write(&format_expense_list(matches))
}

fn filter_by_date_range<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    let start = prompt.ask("Enter start date (YYYY/MM/DD): ")?;
    let end = prompt.ask("Enter end date (YYYY/MM/DD): ")?;
    let range = parse_date_range(&start, &end)?;

    prompt.say(format!(
        "\nExpenses between {} and {}",
        format_date(range.start()),
        format_date(range.end())
    ))?;
    prompt.write(&format_expense_list(ledger.filter_by_range(&range)))
}

fn total_spending<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    let start = prompt.ask("Enter start date (YYYY/MM/DD): ")?;
    let end = prompt.ask("Enter end date (YYYY/MM/DD): ")?;
    let range = parse_date_range(&start, &end)?;

    let total = ledger.total_in(&range);
    prompt.say(format_total(&range, total, ledger.currency()))
}

fn monthly_budget<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    let symbol = ledger.currency().symbol();

    if let Some(current) = ledger.monthly_budget() {
        let label = format!(
            "Monthly budget is {}. Replace it? (y/N): ",
            format_amount(current, symbol)
        );
        let replace = prompt.ask(&label)?;
        if replace.trim().eq_ignore_ascii_case("y") {
            ledger.reset_monthly_budget();
        }
    }

    if ledger.monthly_budget().is_none() {
        let budget = parse_amount(&prompt.ask("Enter monthly budget: ")?, symbol)?;
        ledger.set_monthly_budget(budget)?;
    }

    prompt.say(format_total_all(ledger.total_all(), ledger.currency()))?;
    prompt.say(format_budget_status(ledger.budget_status(), ledger.currency()))
}

fn ask_file<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    action: &str,
    default: &std::path::Path,
) -> LedgerResult<PathBuf> {
    let label = format!("{} file [{}]: ", action, default.display());
    Ok(prompt
        .ask_optional(&label)?
        .map(|p| PathBuf::from(p.trim()))
        .unwrap_or_else(|| default.to_path_buf()))
}

fn export_expenses<R: BufRead, W: Write>(
    ledger: &Ledger,
    options: &MenuOptions,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    let path = ask_file(prompt, "Export", &options.export_file)?;
    let count = ledger.export_csv(&path)?;
    prompt.say(format!("Exported {} expenses to {}", count, path.display()))
}

fn import_expenses<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    options: &MenuOptions,
    prompt: &mut Prompt<R, W>,
) -> LedgerResult<()> {
    let path = ask_file(prompt, "Import", &options.export_file)?;
    let count = ledger.import_csv(&path)?;
    prompt.say(format!("Imported {} expenses from {}", count, path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Money};
    use tempfile::TempDir;

    fn options(dir: &TempDir) -> MenuOptions {
        MenuOptions {
            export_file: dir.path().join("expenses.csv"),
            date_format: "%Y/%m/%d".to_string(),
        }
    }

    fn run(ledger: &mut Ledger, dir: &TempDir, script: &str) -> String {
        let mut out = Vec::new();
        run_menu(ledger, &options(dir), script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" Export "), Some(MenuChoice::Export));
        assert_eq!(MenuChoice::parse("11"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("12"), None);
    }

    #[test]
    fn test_add_and_view() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(Currency::Dollar);

        let out = run(
            &mut ledger,
            &dir,
            "1\nrent\nhousing\n1200.5\nJanuary\n2024/1/1\n2\n11\n",
        );

        assert!(out.contains("Expense added successfully!"));
        assert!(out.contains("$1,200.50"));
        assert!(out.contains("Exiting Expense Tracker, Goodbye!"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(1).unwrap().name, "Rent");
    }

    #[test]
    fn test_bad_amount_is_reported_and_menu_continues() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(Currency::Dollar);

        let out = run(&mut ledger, &dir, "1\nrent\nhousing\nlots\n2\n11\n");

        assert!(out.contains("Error: Parse error"));
        assert!(out.contains(NO_EXPENSES));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_edit_and_delete() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(Currency::Dollar);
        ledger
            .add(NewExpense::new("rent", "housing", Money::from_cents(1000), ""))
            .unwrap();
        ledger
            .add(NewExpense::new("gym", "health", Money::from_cents(3000), ""))
            .unwrap();

        let out = run(&mut ledger, &dir, "3\n2\n\n\n15\n\n4\n9\n11\n");
        assert!(out.contains("Expense updated successfully!"));
        assert!(out.contains("Error: No expense at position 9 (ledger has 2)"));
        assert_eq!(ledger.get(2).unwrap().amount.cents(), 1500);
        assert_eq!(ledger.get(2).unwrap().name, "Rent");
        assert_eq!(ledger.len(), 2);

        run(&mut ledger, &dir, "4\n1\n11\n");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_filter_and_total() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(Currency::Dollar);
        let jan = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let feb = chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        ledger
            .add(NewExpense::new("a", "food", Money::from_cents(1000), "").on(jan))
            .unwrap();
        ledger
            .add(NewExpense::new("b", "rent", Money::from_cents(2000), "").on(feb))
            .unwrap();

        let out = run(
            &mut ledger,
            &dir,
            "5\nfood\n7\n2024/1/1\n2024/1/31\n7\n2024/2/1\n2024/1/1\n11\n",
        );

        assert!(out.contains("Category List: Food, Rent"));
        assert!(out.contains("Expenses in Food Category"));
        assert!(out.contains("\t1. A | Food | $10.00"));
        assert!(out.contains("Total expenses between 2024/1/1 and 2024/1/31: $10.00"));
        assert!(out.contains("Error: Invalid date range"));
    }

    #[test]
    fn test_monthly_budget() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(Currency::Dollar);
        ledger
            .add(NewExpense::new("a", "x", Money::from_cents(12000), ""))
            .unwrap();

        let out = run(&mut ledger, &dir, "8\n100\n8\ny\n200\n11\n");

        assert!(out.contains("Monthly budget deficit: $20.00"));
        assert!(out.contains("Monthly budget is $100.00. Replace it?"));
        assert!(out.contains("Monthly budget surplus: $80.00"));
        assert_eq!(ledger.monthly_budget(), Some(Money::from_cents(20000)));
    }

    #[test]
    fn test_export_then_import() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(Currency::Dollar);
        ledger
            .add(NewExpense::new("rent", "housing", Money::from_cents(120050), ""))
            .unwrap();

        let out = run(&mut ledger, &dir, "9\n\n11\n");
        assert!(out.contains("Exported 1 expenses"));

        let mut fresh = Ledger::new(Currency::Dollar);
        let out = run(&mut fresh, &dir, "10\n\n11\n");
        assert!(out.contains("Imported 1 expenses"));
        assert!(fresh.get(1).unwrap().same_fields(ledger.get(1).unwrap()));
    }

    #[test]
    fn test_eof_ends_menu() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(Currency::Dollar);

        let out = run(&mut ledger, &dir, "1\nrent\n");
        assert!(!out.contains("Goodbye"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_choice() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(Currency::Dollar);

        let out = run(&mut ledger, &dir, "42\n11\n");
        assert!(out.contains("Invalid choice"));
    }
}
