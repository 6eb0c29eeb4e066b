use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DATE_FORMAT, DISPLAY_DECIMAL_PRECISION};
use crate::expenses::Expense;

pub const REPORT_TITLE: &str = "Expense Report";

pub const REPORT_HEADERS: [&str; 5] = ["Date", "Category", "Amount", "Payment Mode", "Description"];

/// One rendered line of the expense report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub payment_mode: String,
    pub description: String,
}

impl ReportRow {
    pub fn from_expense(expense: &Expense, category: String) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            category,
            amount: format_amount(expense.amount),
            payment_mode: expense.payment_mode.clone(),
            description: expense.description.clone().unwrap_or_default(),
        }
    }

    pub fn cells(&self) -> [&str; 5] {
        [
            &self.date,
            &self.category,
            &self.amount,
            &self.payment_mode,
            &self.description,
        ]
    }
}

/// Format-independent projection of a user's expenses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn headers(&self) -> [&'static str; 5] {
        REPORT_HEADERS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);
    rounded.to_string()
}
