use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

fn attachment(content_type: &'static str, filename: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response()
}

async fn export_csv(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Response> {
    let bytes = state.report_service.export_csv(&user)?;
    Ok(attachment("text/csv", "expenses.csv", bytes))
}

async fn export_pdf(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Response> {
    let bytes = state.report_service.export_pdf(&user)?;
    Ok(attachment("application/pdf", "expenses.pdf", bytes))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reports/export/csv", get(export_csv))
        .route("/reports/export/pdf", get(export_pdf))
}
