//! Pure aggregation functions behind the analytics service.
//!
//! Nothing here reads the clock or a repository, so every function can be
//! exercised with a fixed "today" and a hand-built list of expenses.

use chrono::{Datelike, NaiveDate};
use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, HashMap};

use super::analytics_model::{MonthlySummary, PredictedExpense, TrendPoint, YearlySummary};
use crate::constants::{
    DISPLAY_DECIMAL_PRECISION, MONTHLY_SUMMARY_MONTHS, RECENT_WINDOW_MONTHS,
    YEARLY_SUMMARY_YEARS,
};
use crate::errors::{Error, Result};
use crate::expenses::Expense;
use crate::utils::time_utils::{
    first_day_of_month_months_ago, first_day_of_year_years_ago, months_before,
};

/// Inclusive date range an analytics query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalyticsWindow {
    /// First day of the month twelve months back, through today.
    pub fn monthly(today: NaiveDate) -> Self {
        Self {
            start: first_day_of_month_months_ago(today, MONTHLY_SUMMARY_MONTHS),
            end: today,
        }
    }

    /// January 1st five years back, through today.
    pub fn yearly(today: NaiveDate) -> Self {
        Self {
            start: first_day_of_year_years_ago(today, YEARLY_SUMMARY_YEARS),
            end: today,
        }
    }

    /// Same day six months back, through today.
    pub fn recent(today: NaiveDate) -> Self {
        Self {
            start: months_before(today, RECENT_WINDOW_MONTHS),
            end: today,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

fn overflow() -> Error {
    Error::Unexpected("Expense totals are too large to aggregate".to_string())
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(overflow)
}

fn sub(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b).ok_or_else(overflow)
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(overflow)
}

fn div(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_div(b).ok_or_else(overflow)
}

pub fn monthly_totals(expenses: &[Expense]) -> Result<Vec<MonthlySummary>> {
    let mut totals: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
    for expense in expenses {
        let total = totals
            .entry((expense.date.year(), expense.date.month()))
            .or_insert_with(Decimal::zero);
        *total = add(*total, expense.amount)?;
    }
    Ok(totals
        .into_iter()
        .map(|((year, month), total)| MonthlySummary { year, month, total })
        .collect())
}

pub fn yearly_totals(expenses: &[Expense]) -> Result<Vec<YearlySummary>> {
    let mut totals: BTreeMap<i32, (Decimal, usize)> = BTreeMap::new();
    for expense in expenses {
        let entry = totals
            .entry(expense.date.year())
            .or_insert((Decimal::zero(), 0));
        entry.0 = add(entry.0, expense.amount)?;
        entry.1 += 1;
    }
    Ok(totals
        .into_iter()
        .map(|(year, (total, count))| YearlySummary { year, total, count })
        .collect())
}

/// Totals per category id, largest first. Equal totals are ordered by id.
pub fn category_totals(expenses: &[Expense]) -> Result<Vec<(i64, Decimal)>> {
    let mut totals: HashMap<i64, Decimal> = HashMap::new();
    for expense in expenses {
        let total = totals
            .entry(expense.category_id)
            .or_insert_with(Decimal::zero);
        *total = add(*total, expense.amount)?;
    }
    let mut sorted: Vec<(i64, Decimal)> = totals.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    Ok(sorted)
}

/// One point per date that has expenses, oldest first.
pub fn daily_totals(expenses: &[Expense]) -> Result<Vec<TrendPoint>> {
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for expense in expenses {
        let total = totals.entry(expense.date).or_insert_with(Decimal::zero);
        *total = add(*total, expense.amount)?;
    }
    Ok(totals
        .into_iter()
        .map(|(date, total)| TrendPoint { date, total })
        .collect())
}

/// Least-squares fit of `totals` against `x = 1..=n`, evaluated at `n + 1`.
///
/// Fewer than two points predict zero. Negative forecasts are clamped to zero.
/// Intermediate sums that leave the `Decimal` range are reported as an error.
pub fn predict_next_month(totals: &[Decimal]) -> Result<PredictedExpense> {
    let n = totals.len();
    if n < 2 {
        return Ok(PredictedExpense {
            predicted_amount: Decimal::zero(),
            months_considered: n,
        });
    }

    let count = Decimal::from(n as u64);
    let mut sum_x = Decimal::zero();
    let mut sum_y = Decimal::zero();
    let mut sum_xy = Decimal::zero();
    let mut sum_xx = Decimal::zero();
    for (i, y) in totals.iter().enumerate() {
        let x = Decimal::from(i as u64 + 1);
        sum_x = add(sum_x, x)?;
        sum_y = add(sum_y, *y)?;
        sum_xy = add(sum_xy, mul(x, *y)?)?;
        sum_xx = add(sum_xx, mul(x, x)?)?;
    }

    let denominator = sub(mul(count, sum_xx)?, mul(sum_x, sum_x)?)?;
    let slope = if denominator.is_zero() {
        Decimal::zero()
    } else {
        div(sub(mul(count, sum_xy)?, mul(sum_x, sum_y)?)?, denominator)?
    };
    let intercept = div(sub(sum_y, mul(slope, sum_x)?)?, count)?;
    let predicted = add(mul(slope, add(count, Decimal::ONE)?)?, intercept)?;

    Ok(PredictedExpense {
        predicted_amount: predicted.max(Decimal::zero()).round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        ),
        months_considered: n,
    })
}
