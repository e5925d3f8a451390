use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use budgetbook_core::transactions::{NewTransactionInput, Transaction};

use crate::{api::ensure_user, error::ApiResult, main_lib::AppState};

async fn list_transactions(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    ensure_user(&state, user_id)?;
    let transactions = state.transaction_service.list_transactions(user_id)?;
    Ok(Json(transactions))
}

async fn add_transaction(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewTransactionInput>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    ensure_user(&state, user_id)?;
    let transaction = state
        .transaction_service
        .add_transaction(user_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

// Deleting an unknown id still answers 204.
async fn delete_transaction(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.transaction_service.delete_transaction(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/transactions",
            get(list_transactions).post(add_transaction),
        )
        .route("/transactions/{id}", delete(delete_transaction))
}
