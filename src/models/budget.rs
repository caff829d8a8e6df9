//! Budget comparison model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Outcome of comparing a budget against actual spending
///
/// The carried amount is always the non-negative distance between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Spending exceeded the budget
    Deficit(Money),
    /// Spending stayed below the budget
    Surplus(Money),
    /// Spending matched the budget exactly
    BreakEven,
}

impl BudgetStatus {
    /// Classify `budget - spent`
    pub fn compare(budget: Money, spent: Money) -> Self {
        let turnover = budget - spent;
        if turnover.is_negative() {
            Self::Deficit(turnover.abs())
        } else if turnover.is_positive() {
            Self::Surplus(turnover)
        } else {
            Self::BreakEven
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Deficit(amount) | Self::Surplus(amount) => *amount,
            Self::BreakEven => Money::zero(),
        }
    }

    pub fn is_deficit(&self) -> bool {
        matches!(self, Self::Deficit(_))
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deficit(amount) => write!(f, "Deficit of {}", amount),
            Self::Surplus(amount) => write!(f, "Surplus of {}", amount),
            Self::BreakEven => write!(f, "Break even"),
        }
    }
}
