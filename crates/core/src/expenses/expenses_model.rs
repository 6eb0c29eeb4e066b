//! Expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_EXPENSE_AMOUNT, MIN_EXPENSE_AMOUNT};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a single expense
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    /// Logical reference; the category may have been deleted since.
    pub category_id: i64,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub payment_mode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub user_id: i64,
    pub category_id: i64,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub payment_mode: String,
}

/// Replacement values for an existing expense. Id and owner never change.
#[derive(Debug, Clone)]
pub struct ExpenseUpdate {
    pub id: i64,
    pub category_id: i64,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub payment_mode: String,
}

/// Request body for creating or updating an expense.
///
/// Every required field is optional here so that a missing field is reported
/// as a validation error rather than a body parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub category_id: Option<i64>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub payment_mode: Option<String>,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub category_id: i64,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub payment_mode: String,
}

impl ExpenseRequest {
    /// Checks the request against `today` and normalizes the amount to cents.
    pub fn validate(self, today: NaiveDate) -> Result<ExpenseInput> {
        let category_id = self
            .category_id
            .ok_or_else(|| missing("categoryId"))?;

        let amount = self.amount.ok_or_else(|| missing("amount"))?;
        let min_amount = Decimal::from_str(MIN_EXPENSE_AMOUNT)?;
        if amount < min_amount {
            return Err(Error::invalid_input("Amount must be greater than zero"));
        }
        if amount > Decimal::from_str(MAX_EXPENSE_AMOUNT)? {
            return Err(Error::invalid_input(format!(
                "Amount cannot exceed {MAX_EXPENSE_AMOUNT}"
            )));
        }

        let date = self.date.ok_or_else(|| missing("date"))?;
        if date > today {
            return Err(Error::invalid_input("Date cannot be in the future"));
        }

        let payment_mode = match self.payment_mode {
            Some(mode) if !mode.trim().is_empty() => mode,
            _ => return Err(missing("paymentMode")),
        };

        Ok(ExpenseInput {
            category_id,
            amount: amount.round_dp_with_strategy(
                DISPLAY_DECIMAL_PRECISION,
                RoundingStrategy::MidpointAwayFromZero,
            ),
            description: self.description,
            date,
            payment_mode,
        })
    }
}

fn missing(field: &str) -> Error {
    Error::Validation(ValidationError::MissingField(field.to_string()))
}

/// Expense as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub payment_mode: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            user_id: expense.user_id,
            category_id: expense.category_id,
            amount: expense.amount,
            description: expense.description,
            date: expense.date,
            payment_mode: expense.payment_mode,
        }
    }
}
