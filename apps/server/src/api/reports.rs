use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use budgetbook_core::reports::MonthlyReport;
use serde::Deserialize;

use crate::{
    api::ensure_user,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct MonthlyReportQuery {
    month: Option<u32>,
    year: Option<i32>,
}

async fn monthly_report(
    Path(user_id): Path<i64>,
    Query(query): Query<MonthlyReportQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MonthlyReport>> {
    let (Some(month), Some(year)) = (query.month, query.year) else {
        return Err(ApiError::BadRequest(
            "query parameters 'month' and 'year' are required".to_string(),
        ));
    };
    ensure_user(&state, user_id)?;
    let report = state.report_service.monthly_report(user_id, month, year)?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users/{user_id}/reports/monthly", get(monthly_report))
}
