//! Analytics module - per-user spending summaries and a linear trend forecast.

mod analytics_calculator;
mod analytics_model;
mod analytics_service;
mod analytics_traits;


pub use analytics_calculator::{
    category_totals, daily_totals, monthly_totals, predict_next_month, yearly_totals,
    AnalyticsWindow,
};
pub use analytics_model::{
    CategorySummary, MonthlySummary, PredictedExpense, TrendPoint, YearlySummary,
};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
