use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use fintrack_core::categories::{CategoryRequest, CategoryResponse};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_categories(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let categories = state.category_service.get_categories(&user)?;
    Ok(Json(categories))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CategoryRequest>,
) -> ApiResult<(StatusCode, Json<CategoryResponse>)> {
    let category = state
        .category_service
        .create_category(&user, request)
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn delete_category(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<StatusCode> {
    state.category_service.delete_category(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
}
