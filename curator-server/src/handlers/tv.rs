use axum::{
    Json,
    extract::{Path, State},
};
use curator_core::enforce_rating;
use curator_model::{MediaKind, TvSummary};
use tracing::info;

use crate::{AppState, errors::AppResult, extract::RequestUser};

pub async fn tv_details(
    State(state): State<AppState>,
    user: RequestUser,
    Path(tmdb_id): Path<u64>,
) -> AppResult<Json<TvSummary>> {
    info!(tmdb_id, "tv details requested");

    let limits = state.limits.limits_for(user.0);
    let series = state.provider.tv_details(tmdb_id).await?;

    enforce_rating(
        state.resolver.as_ref(),
        &limits,
        MediaKind::Tv,
        tmdb_id,
        series.adult,
    )
    .await?;

    Ok(Json(series))
}
