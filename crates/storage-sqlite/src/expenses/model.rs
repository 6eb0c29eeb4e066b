//! Database models for expenses.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use fintrack_core::expenses::{Expense, ExpenseUpdate, NewExpense};

/// Amounts are stored as text; a row that no longer parses is logged and read as zero.
fn parse_amount(value: &str, expense_id: i64) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse amount '{}' of expense {}: {}. Falling back to ZERO.",
            value,
            expense_id,
            e
        );
        Decimal::ZERO
    })
}

/// Database model for expenses
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: String,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub payment_mode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new expense
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub user_id: i64,
    pub category_id: i64,
    pub amount: String,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub payment_mode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Columns replaced by an update. `description` is written even when `None`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseChangesDB {
    pub category_id: i64,
    pub amount: String,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub payment_mode: String,
    pub updated_at: NaiveDateTime,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            amount: parse_amount(&db.amount, db.id),
            id: db.id,
            user_id: db.user_id,
            category_id: db.category_id,
            description: db.description,
            date: db.expense_date,
            payment_mode: db.payment_mode,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewExpense> for NewExpenseDB {
    fn from(domain: NewExpense) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            user_id: domain.user_id,
            category_id: domain.category_id,
            amount: domain.amount.to_string(),
            description: domain.description,
            expense_date: domain.date,
            payment_mode: domain.payment_mode,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ExpenseUpdate> for ExpenseChangesDB {
    fn from(domain: ExpenseUpdate) -> Self {
        Self {
            category_id: domain.category_id,
            amount: domain.amount.to_string(),
            description: domain.description,
            expense_date: domain.date,
            payment_mode: domain.payment_mode,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
