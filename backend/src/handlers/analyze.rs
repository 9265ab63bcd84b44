use axum::{extract::{Query, State}, response::Json};

use super::{AddressParams, ApiResponse, AppState};
use crate::{
    error::AppError,
    models::{AddressQuery, AnalysisReport},
    services::AddressAnalyzer,
};

/// `GET /analyze?address&network`: the whole lookup, scored
pub async fn analyze_address(
    Query(params): Query<AddressParams>,
    State(client): State<AppState>,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    let query = AddressQuery::new(params.address(), params.network());
    let report = AddressAnalyzer::new(client).analyze(&query).await?;
    Ok(Json(ApiResponse::ok(report)))
}
