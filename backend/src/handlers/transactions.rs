use axum::{extract::{Query, State}, response::Json};

use super::{AddressParams, ApiResponse, AppState};
use crate::{error::AppError, models::TransactionSummary, services::transactions};

/// `GET /transactions?address`: aggregate statistics plus the 10 newest transactions
pub async fn get_transactions(
    Query(params): Query<AddressParams>,
    State(client): State<AppState>,
) -> Result<Json<ApiResponse<TransactionSummary>>, AppError> {
    let summary = transactions::get_transactions(&client, params.address()).await?;
    Ok(Json(ApiResponse::ok(summary)))
}
