use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use fintrack_core::analytics::{
    CategorySummary, MonthlySummary, PredictedExpense, TrendPoint, YearlySummary,
};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn monthly_summary(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<MonthlySummary>>> {
    Ok(Json(state.analytics_service.get_monthly_summary(&user)?))
}

async fn yearly_summary(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<YearlySummary>>> {
    Ok(Json(state.analytics_service.get_yearly_summary(&user)?))
}

async fn by_category(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<CategorySummary>>> {
    Ok(Json(state.analytics_service.get_category_summary(&user)?))
}

async fn trends(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<TrendPoint>>> {
    Ok(Json(state.analytics_service.get_trend_points(&user)?))
}

async fn predicted_expense(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<PredictedExpense>> {
    Ok(Json(state.analytics_service.get_predicted_expense(&user)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/monthly-summary", get(monthly_summary))
        .route("/analytics/yearly-summary", get(yearly_summary))
        .route("/analytics/by-category", get(by_category))
        .route("/analytics/trends", get(trends))
        .route("/analytics/predicted-expense", get(predicted_expense))
}
