//! The expense ledger
//!
//! `Ledger` owns the session's expense records together with the configured
//! currency and monthly budget. Records are kept sorted by name (byte order)
//! after every mutation; positions handed to `edit` and `delete` are 1-based
//! indexes into that order, exactly as `list` presents it.
//!
//! The ledger is a plain value with no interior mutability. Sharing it between
//! callers requires wrapping it in a single mutex.
//!
//! Aggregation lives in `report`, file transfer in `transfer`.

mod report;
mod transfer;

use chrono::Local;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    title_case, Currency, DateRange, EditExpense, ExpenseId, ExpenseRecord, Money, NewExpense,
};

/// In-memory expense ledger for one session
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: Vec<ExpenseRecord>,
    currency: Currency,
    monthly_budget: Option<Money>,
    audit: Option<AuditLogger>,
}

impl Ledger {
    /// Create an empty ledger working in `currency`
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    /// Record add/edit/delete/transfer operations in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Change the currency for records stored from now on
    ///
    /// Existing records keep the currency they were stored with.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Add an expense and return its identifier
    pub fn add(&mut self, input: NewExpense) -> LedgerResult<ExpenseId> {
        ensure_valid_amount(input.amount)?;

        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let record = ExpenseRecord::new(
            date,
            &input.name,
            &input.category,
            input.amount,
            self.currency,
            &input.description,
        );
        let id = record.id;

        self.log(|| {
            AuditEntry::create(
                EntityType::Expense,
                record.id.to_string(),
                Some(record.name.clone()),
                &record,
            )
        })?;
        self.insert_sorted(record);

        Ok(id)
    }

    /// Iterate over the records in display order
    ///
    /// The iterator is `Clone`, so a view can be walked more than once.
    pub fn list(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.expenses.iter()
    }

    /// Get the record at a 1-based position
    pub fn get(&self, index: usize) -> LedgerResult<&ExpenseRecord> {
        let pos = self.position(index)?;
        Ok(&self.expenses[pos])
    }

    /// Find a record by its identifier
    pub fn find(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Edit the record at a 1-based position
    ///
    /// Blank or absent fields keep their current value. The record moves to
    /// its new sorted position if the name changed.
    pub fn edit(&mut self, index: usize, changes: EditExpense) -> LedgerResult<&ExpenseRecord> {
        let pos = self.position(index)?;
        if let Some(amount) = changes.amount {
            ensure_valid_amount(amount)?;
        }

        let mut record = self.expenses.remove(pos);
        let before = record.clone();
        let changed = changes.apply_to(&mut record);

        if !changed.is_empty() {
            let logged = self.log(|| {
                let diff = match (serde_json::to_value(&before), serde_json::to_value(&record)) {
                    (Ok(b), Ok(a)) => generate_diff(&b, &a),
                    _ => Some(changed.join(", ")),
                };
                AuditEntry::update(
                    EntityType::Expense,
                    record.id.to_string(),
                    Some(record.name.clone()),
                    &before,
                    &record,
                    diff,
                )
            });
            if let Err(e) = logged {
                self.expenses.insert(pos, before);
                return Err(e);
            }
        }

        let id = record.id;
        self.insert_sorted(record);
        self.find(id).ok_or_else(|| LedgerError::Index {
            index,
            len: self.len(),
        })
    }

    /// Remove the record at a 1-based position
    ///
    /// An out-of-range position is an `Index` error and leaves the ledger
    /// untouched.
    pub fn delete(&mut self, index: usize) -> LedgerResult<ExpenseRecord> {
        let pos = self.position(index)?;

        let record = &self.expenses[pos];
        self.log(|| {
            AuditEntry::delete(
                EntityType::Expense,
                record.id.to_string(),
                Some(record.name.clone()),
                record,
            )
        })?;

        Ok(self.expenses.remove(pos))
    }

    /// Records whose category matches, after title-casing the query
    pub fn filter_by_category(&self, category: &str) -> Vec<&ExpenseRecord> {
        let wanted = title_case(category);
        self.expenses
            .iter()
            .filter(|e| e.category == wanted)
            .collect()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for expense in &self.expenses {
            if !seen.contains(&expense.category.as_str()) {
                seen.push(&expense.category);
            }
        }
        seen
    }

    /// Records dated within `[start, end]`, inclusive
    pub fn filter_by_date_range(
        &self,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> LedgerResult<Vec<&ExpenseRecord>> {
        let range = DateRange::new(start, end).ok_or(LedgerError::Range { start, end })?;
        Ok(self.filter_by_range(&range))
    }

    /// Records dated within an already validated range
    pub fn filter_by_range(&self, range: &DateRange) -> Vec<&ExpenseRecord> {
        self.expenses.iter().filter(|e| e.is_within(range)).collect()
    }

    /// Convert a 1-based position into a vector index
    fn position(&self, index: usize) -> LedgerResult<usize> {
        if index == 0 || index > self.expenses.len() {
            return Err(LedgerError::Index {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(index - 1)
    }

    /// Insert after any records with an equal or smaller name
    fn insert_sorted(&mut self, record: ExpenseRecord) {
        let pos = self
            .expenses
            .partition_point(|e| e.name.as_str() <= record.name.as_str());
        self.expenses.insert(pos, record);
    }

    /// Write an audit entry if a logger is attached
    fn log<F>(&self, entry: F) -> LedgerResult<()>
    where
        F: FnOnce() -> AuditEntry,
    {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

fn ensure_valid_amount(amount: Money) -> LedgerResult<()> {
    if amount.is_negative() {
        return Err(LedgerError::Parse(format!(
            "Amount must not be negative: {}",
            amount
        )));
    }
    if !amount.is_valid_amount() {
        return Err(LedgerError::Parse(format!(
            "Amount must not exceed {}: {}",
            Money::MAX,
            amount
        )));
    }
    Ok(())
}
