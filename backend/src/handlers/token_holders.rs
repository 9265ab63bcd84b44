use axum::{extract::{Query, State}, response::Json};

use super::{AddressParams, ApiResponse, AppState};
use crate::{error::AppError, models::NftActivity, services::nft};

/// `GET /token-holders?address`: NFT transfers and per-collection stats.
/// Upstream trouble yields an empty result, never an error.
pub async fn get_token_holders(
    Query(params): Query<AddressParams>,
    State(client): State<AppState>,
) -> Result<Json<ApiResponse<NftActivity>>, AppError> {
    let activity = nft::get_nft_transactions(&client, params.address()).await?;
    Ok(Json(ApiResponse::bare(activity)))
}
