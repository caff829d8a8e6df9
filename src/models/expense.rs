//! Expense record model
//!
//! An expense is one dated, named, categorized amount. Text fields are
//! normalized on the way in: names and categories are title-cased and
//! descriptions lower-cased, so lookups can compare them exactly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::ids::ExpenseId;
use super::money::Money;

/// A single tracked expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Day the expense happened
    pub date: NaiveDate,

    /// Display name, title-cased
    pub name: String,

    /// Category, title-cased
    pub category: String,

    /// Non-negative amount
    pub amount: Money,

    /// Currency in effect when the record was stored
    pub currency: Currency,

    /// Free text, lower-cased
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a record, normalizing the text fields
    pub fn new(
        date: NaiveDate,
        name: &str,
        category: &str,
        amount: Money,
        currency: Currency,
        description: &str,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            name: title_case(name),
            category: title_case(category),
            amount,
            currency,
            description: normalize_description(description),
        }
    }

    /// Check whether the record falls inside an inclusive date range
    pub fn is_within(&self, range: &DateRange) -> bool {
        range.contains(self.date)
    }

    /// Compare everything except the identity
    pub fn same_fields(&self, other: &ExpenseRecord) -> bool {
        self.date == other.date
            && self.name == other.name
            && self.category == other.category
            && self.amount == other.amount
            && self.currency == other.currency
            && self.description == other.description
    }
}

/// Input for adding an expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub name: String,
    pub category: String,
    pub amount: Money,
    pub description: String,
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
}

impl NewExpense {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount,
            description: description.into(),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Changes to apply to an existing expense
///
/// `None` and blank strings both mean "keep the current value".
#[derive(Debug, Clone, Default)]
pub struct EditExpense {
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EditExpense {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Apply the changes to a record, returning the names of changed fields
    pub fn apply_to(&self, record: &mut ExpenseRecord) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if let Some(name) = non_blank(&self.name) {
            record.name = title_case(name);
            changed.push("name");
        }
        if let Some(category) = non_blank(&self.category) {
            record.category = title_case(category);
            changed.push("category");
        }
        if let Some(amount) = self.amount.filter(|a| *a != record.amount) {
            record.amount = amount;
            changed.push("amount");
        }
        if let Some(description) = non_blank(&self.description) {
            record.description = normalize_description(description);
            changed.push("description");
        }
        if let Some(date) = self.date {
            record.date = date;
            changed.push("date");
        }

        changed
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// An inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Returns `None` when `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// A single-day range
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The calendar month containing (year, month)
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self {
            start,
            end: next.pred_opt()?,
        })
    }

    /// The calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        Self::month(date.year(), date.month()).unwrap_or_else(|| Self::day(date))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Title-case a string: a letter is upper-cased when it follows a non-letter
/// and lower-cased otherwise. Leading and trailing whitespace is removed.
///
/// When a letter upper-cases to several characters (`ß` to `SS`), only the
/// first stays upper-case, so applying this twice changes nothing.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.trim().chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                let mut upper = c.to_uppercase();
                out.extend(upper.next());
                out.extend(upper.flat_map(char::to_lowercase));
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

fn normalize_description(s: &str) -> String {
    s.trim().to_lowercase()
}
