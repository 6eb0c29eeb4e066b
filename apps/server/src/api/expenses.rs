use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fintrack_core::expenses::{ExpenseRequest, ExpenseResponse};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<ExpenseResponse>>> {
    let expenses = state.expense_service.get_expenses(&user)?;
    Ok(Json(expenses))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ExpenseRequest>,
) -> ApiResult<(StatusCode, Json<ExpenseResponse>)> {
    let expense = state.expense_service.create_expense(&user, request).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn get_expense(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<ExpenseResponse>> {
    let expense = state.expense_service.get_expense(&user, id)?;
    Ok(Json(expense))
}

async fn update_expense(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ExpenseRequest>,
) -> ApiResult<Json<ExpenseResponse>> {
    let expense = state
        .expense_service
        .update_expense(&user, id, request)
        .await?;
    Ok(Json(expense))
}

async fn delete_expense(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
