use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::analytics_calculator::{
    category_totals, daily_totals, monthly_totals, predict_next_month, yearly_totals,
    AnalyticsWindow,
};
use super::analytics_model::{
    CategorySummary, MonthlySummary, PredictedExpense, TrendPoint, YearlySummary,
};
use super::analytics_traits::AnalyticsServiceTrait;
use crate::categories::CategoryRepositoryTrait;
use crate::constants::UNKNOWN_CATEGORY_NAME;
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::users::User;
use crate::utils::time_utils::local_today;

pub struct AnalyticsService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    today: fn() -> NaiveDate,
}

impl AnalyticsService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        Self {
            expense_repository,
            category_repository,
            today: local_today,
        }
    }

    /// Pins "today" so that windows are reproducible.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn expenses_in(&self, user: &User, window: AnalyticsWindow) -> Result<Vec<Expense>> {
        let expenses =
            self.expense_repository
                .list_by_user_between(user.id, window.start, window.end)?;
        debug!(
            "Loaded {} expenses for user {} between {} and {}",
            expenses.len(),
            user.id,
            window.start,
            window.end
        );
        Ok(expenses)
    }

    fn category_name(&self, category_id: i64) -> Result<String> {
        Ok(self
            .category_repository
            .get_category_by_id(category_id)?
            .map(|category| category.name)
            .unwrap_or_else(|| UNKNOWN_CATEGORY_NAME.to_string()))
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_monthly_summary(&self, user: &User) -> Result<Vec<MonthlySummary>> {
        let expenses = self.expenses_in(user, AnalyticsWindow::monthly((self.today)()))?;
        monthly_totals(&expenses)
    }

    fn get_yearly_summary(&self, user: &User) -> Result<Vec<YearlySummary>> {
        let expenses = self.expenses_in(user, AnalyticsWindow::yearly((self.today)()))?;
        yearly_totals(&expenses)
    }

    fn get_category_summary(&self, user: &User) -> Result<Vec<CategorySummary>> {
        let expenses = self.expenses_in(user, AnalyticsWindow::recent((self.today)()))?;
        category_totals(&expenses)?
            .into_iter()
            .map(|(category_id, total)| {
                Ok(CategorySummary {
                    category_id,
                    category_name: self.category_name(category_id)?,
                    total,
                })
            })
            .collect()
    }

    fn get_trend_points(&self, user: &User) -> Result<Vec<TrendPoint>> {
        let expenses = self.expenses_in(user, AnalyticsWindow::recent((self.today)()))?;
        daily_totals(&expenses)
    }

    fn get_predicted_expense(&self, user: &User) -> Result<PredictedExpense> {
        let monthly: Vec<_> = self
            .get_monthly_summary(user)?
            .into_iter()
            .map(|summary| summary.total)
            .collect();
        predict_next_month(&monthly)
    }
}
