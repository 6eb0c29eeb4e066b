use super::analytics_model::{
    CategorySummary, MonthlySummary, PredictedExpense, TrendPoint, YearlySummary,
};
use crate::errors::Result;
use crate::users::User;

/// Trait for analytics service operations
pub trait AnalyticsServiceTrait: Send + Sync {
    fn get_monthly_summary(&self, user: &User) -> Result<Vec<MonthlySummary>>;
    fn get_yearly_summary(&self, user: &User) -> Result<Vec<YearlySummary>>;
    fn get_category_summary(&self, user: &User) -> Result<Vec<CategorySummary>>;
    fn get_trend_points(&self, user: &User) -> Result<Vec<TrendPoint>>;
    fn get_predicted_expense(&self, user: &User) -> Result<PredictedExpense>;
}
