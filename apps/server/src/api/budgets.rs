use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use budgetbook_core::budgets::{Budget, BudgetInput};
use budgetbook_core::reports::BudgetStatus;

use crate::{api::ensure_user, error::ApiResult, main_lib::AppState};

async fn list_budgets(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Budget>>> {
    ensure_user(&state, user_id)?;
    let budgets = state.budget_service.list_budgets(user_id)?;
    Ok(Json(budgets))
}

async fn set_budget(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<BudgetInput>,
) -> ApiResult<Json<Budget>> {
    ensure_user(&state, user_id)?;
    let budget = state.budget_service.set_budget(user_id, input).await?;
    Ok(Json(budget))
}

async fn check_budgets(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BudgetStatus>>> {
    ensure_user(&state, user_id)?;
    let statuses = state.report_service.check_budgets(user_id)?;
    Ok(Json(statuses))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/budgets",
            get(list_budgets).put(set_budget),
        )
        .route("/users/{user_id}/budgets/status", get(check_budgets))
}
