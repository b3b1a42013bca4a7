//! Entry-form validation. Stores trust their input, so everything that reaches
//! them goes through here first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Budget, Category, NewTransaction, TransactionType, YearMonth};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("Please enter a valid amount greater than 0")]
    InvalidAmount,

    #[error("Please enter a description")]
    EmptyDescription,

    #[error("Please select a category")]
    MissingCategory,

    /// The category exists but belongs to the other transaction type.
    #[error("Category does not match the transaction type")]
    CategoryTypeMismatch,

    #[error("Please select a date")]
    MissingDate,

    #[error("Please select a valid month (YYYY-MM)")]
    InvalidMonth,
}

impl ValidationError {
    /// Form field the message belongs to.
    pub(crate) fn field(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "amount",
            Self::EmptyDescription => "description",
            Self::MissingCategory | Self::CategoryTypeMismatch => "category",
            Self::MissingDate => "date",
            Self::InvalidMonth => "month",
        }
    }
}

/// Every failing field of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormErrors(pub Vec<ValidationError>);

impl FormErrors {
    #[cfg(test)]
    pub(crate) fn contains(&self, err: &ValidationError) -> bool {
        self.0.contains(err)
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {e}", e.field()))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for FormErrors {}

/// Raw transaction form input, as typed by the user.
#[derive(Debug, Clone)]
pub(crate) struct TransactionForm {
    pub kind: TransactionType,
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: String,
}

impl TransactionForm {
    pub(crate) fn validate(&self) -> Result<NewTransaction, FormErrors> {
        let mut errors = Vec::new();

        let amount = parse_positive_amount(&self.amount);
        if amount.is_none() {
            errors.push(ValidationError::InvalidAmount);
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(ValidationError::EmptyDescription);
        }

        let category = self.category.trim();
        match Category::find_by_id(category) {
            None => errors.push(ValidationError::MissingCategory),
            Some(c) if c.kind != self.kind => errors.push(ValidationError::CategoryTypeMismatch),
            Some(_) => {}
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            errors.push(ValidationError::MissingDate);
        }

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => Ok(NewTransaction {
                kind: self.kind,
                amount,
                description: description.to_string(),
                date,
                category: category.to_string(),
            }),
            _ => Err(FormErrors(errors)),
        }
    }
}

/// Raw budget form input.
#[derive(Debug, Clone)]
pub(crate) struct BudgetForm {
    pub category_id: String,
    pub amount: String,
    pub month: String,
}

impl BudgetForm {
    /// Builds a budget with a fresh id. Zero and negative ceilings are rejected
    /// here so progress never divides by zero for stored budgets.
    pub(crate) fn validate(&self) -> Result<Budget, FormErrors> {
        let mut errors = Vec::new();

        let category_id = self.category_id.trim();
        match Category::find_by_id(category_id) {
            None => errors.push(ValidationError::MissingCategory),
            Some(c) if c.kind != TransactionType::Expense => {
                errors.push(ValidationError::CategoryTypeMismatch)
            }
            Some(_) => {}
        }

        let amount = parse_positive_amount(&self.amount);
        if amount.is_none() {
            errors.push(ValidationError::InvalidAmount);
        }

        let month = YearMonth::parse(&self.month);
        if month.is_none() {
            errors.push(ValidationError::InvalidMonth);
        }

        match (amount, month) {
            (Some(amount), Some(month)) if errors.is_empty() => {
                Ok(Budget::new(category_id.to_string(), month, amount))
            }
            _ => Err(FormErrors(errors)),
        }
    }
}

/// Largest amount a single entry may carry: 1,000,000,000,000,000 (1e15).
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Finest precision an amount may be entered with, in decimal places.
pub(crate) const MAX_AMOUNT_SCALE: u32 = 2;

/// Parses a user-entered amount, tolerating a currency symbol and thousands
/// separators. Amounts must be positive, at most [`MAX_AMOUNT`], and have no
/// more than two significant decimal places.
pub(crate) fn parse_positive_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | '₹' | ',' | ' '))
        .collect();
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|d| {
            *d > Decimal::ZERO && *d <= MAX_AMOUNT && d.normalize().scale() <= MAX_AMOUNT_SCALE
        })
}
