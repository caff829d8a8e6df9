//! Spending totals and budget comparison

use chrono::NaiveDate;

use super::Ledger;
use crate::audit::{AuditEntry, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetStatus, DateRange, Money};

const BUDGET_ENTITY_ID: &str = "monthly_budget";

impl Ledger {
    /// Sum of amounts dated within `[start, end]`
    pub fn total_spending(&self, start: NaiveDate, end: NaiveDate) -> LedgerResult<Money> {
        let records = self.filter_by_date_range(start, end)?;
        Ok(records.iter().map(|e| e.amount).sum())
    }

    /// Sum of amounts within an already validated range
    pub fn total_in(&self, range: &DateRange) -> Money {
        self.filter_by_range(range).iter().map(|e| e.amount).sum()
    }

    /// Sum of every amount in the ledger
    pub fn total_all(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// The budget set this session, if any
    pub fn monthly_budget(&self) -> Option<Money> {
        self.monthly_budget
    }

    /// Set the monthly budget
    ///
    /// A budget can be set once per session; call `reset_monthly_budget`
    /// before setting a different one.
    pub fn set_monthly_budget(&mut self, budget: Money) -> LedgerResult<()> {
        if let Some(existing) = self.monthly_budget {
            return Err(LedgerError::BudgetAlreadySet(existing));
        }
        if !budget.is_valid_amount() {
            return Err(LedgerError::Parse(format!(
                "Budget must be between 0.00 and {}: {}",
                Money::MAX,
                budget
            )));
        }

        self.log(|| {
            AuditEntry::update(
                EntityType::Ledger,
                BUDGET_ENTITY_ID,
                None,
                &None::<Money>,
                &Some(budget),
                Some(format!("monthly_budget: {}", budget)),
            )
        })?;
        self.monthly_budget = Some(budget);
        Ok(())
    }

    /// Clear the monthly budget, returning the previous value
    pub fn reset_monthly_budget(&mut self) -> Option<Money> {
        self.monthly_budget.take()
    }

    /// Compare the budget (zero when unset) with all-time spending
    pub fn budget_status(&self) -> BudgetStatus {
        BudgetStatus::compare(self.monthly_budget.unwrap_or_default(), self.total_all())
    }

    /// Compare the budget with spending inside one calendar month
    pub fn budget_status_for_month(&self, year: i32, month: u32) -> LedgerResult<BudgetStatus> {
        let range = DateRange::month(year, month)
            .ok_or_else(|| LedgerError::Parse(format!("Invalid month: {}-{}", year, month)))?;
        Ok(BudgetStatus::compare(
            self.monthly_budget.unwrap_or_default(),
            self.total_in(&range),
        ))
    }
}
