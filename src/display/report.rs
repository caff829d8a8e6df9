//! Totals and budget status formatting

use crate::codec::{format_amount, format_date};
use crate::models::{BudgetStatus, Currency, DateRange, Money};

/// Format the total spent over a date range
pub fn format_total(range: &DateRange, total: Money, currency: Currency) -> String {
    format!(
        "Total expenses between {} and {}: {}",
        format_date(range.start()),
        format_date(range.end()),
        format_amount(total, currency.symbol())
    )
}

/// Format the all-time total
pub fn format_total_all(total: Money, currency: Currency) -> String {
    format!("Total expenses: {}", format_amount(total, currency.symbol()))
}

/// Format a budget comparison
pub fn format_budget_status(status: BudgetStatus, currency: Currency) -> String {
    match status {
        BudgetStatus::Deficit(amount) => format!(
            "Monthly budget deficit: {}",
            format_amount(amount, currency.symbol())
        ),
        BudgetStatus::Surplus(amount) => format!(
            "Monthly budget surplus: {}",
            format_amount(amount, currency.symbol())
        ),
        BudgetStatus::BreakEven => "Monthly budget has broken even!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_total() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();

        assert_eq!(
            format_total(&range, Money::from_cents(1000), Currency::Dollar),
            "Total expenses between 2024/1/1 and 2024/1/31: $10.00"
        );
    }

    #[test]
    fn test_format_total_all() {
        assert_eq!(
            format_total_all(Money::from_cents(123456), Currency::Pound),
            "Total expenses: £1,234.56"
        );
    }

    #[test]
    fn test_format_budget_status() {
        assert_eq!(
            format_budget_status(BudgetStatus::Deficit(Money::from_cents(2000)), Currency::Dollar),
            "Monthly budget deficit: $20.00"
        );
        assert_eq!(
            format_budget_status(BudgetStatus::Surplus(Money::from_cents(50)), Currency::Euro),
            "Monthly budget surplus: €0.50"
        );
        assert_eq!(
            format_budget_status(BudgetStatus::BreakEven, Currency::Dollar),
            "Monthly budget has broken even!"
        );
    }
}
