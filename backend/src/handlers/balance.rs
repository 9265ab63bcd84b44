use axum::{extract::{Query, State}, response::Json};

use super::{AddressParams, ApiResponse, AppState};
use crate::{error::AppError, services::balance};

/// `GET /balance?address&network`: raw wei balance as reported upstream
pub async fn get_balance(
    Query(params): Query<AddressParams>,
    State(client): State<AppState>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let raw = balance::get_balance(&client, params.address(), params.network()).await?;
    Ok(Json(ApiResponse::ok(raw)))
}
