use axum::{
    Json,
    extract::{Path, State},
};
use curator_core::enforce_rating;
use curator_model::{MediaKind, MovieSummary, Page};
use tracing::info;

use super::filter_page;
use crate::{AppState, errors::AppResult, extract::RequestUser};

pub async fn movie_details(
    State(state): State<AppState>,
    user: RequestUser,
    Path(tmdb_id): Path<u64>,
) -> AppResult<Json<MovieSummary>> {
    info!(tmdb_id, "movie details requested");

    let limits = state.limits.limits_for(user.0);
    let movie = state.provider.movie_details(tmdb_id).await?;

    enforce_rating(
        state.resolver.as_ref(),
        &limits,
        MediaKind::Movie,
        tmdb_id,
        movie.adult,
    )
    .await?;

    Ok(Json(movie))
}

pub async fn movie_recommendations(
    State(state): State<AppState>,
    user: RequestUser,
    Path(tmdb_id): Path<u64>,
) -> AppResult<Json<Page<MovieSummary>>> {
    let limits = state.limits.limits_for(user.0);
    let page = state.provider.movie_recommendations(tmdb_id).await?;
    Ok(Json(
        filter_page(&state, &limits, page, "movies/recommendations").await,
    ))
}

pub async fn movie_similar(
    State(state): State<AppState>,
    user: RequestUser,
    Path(tmdb_id): Path<u64>,
) -> AppResult<Json<Page<MovieSummary>>> {
    let limits = state.limits.limits_for(user.0);
    let page = state.provider.movie_similar(tmdb_id).await?;
    Ok(Json(
        filter_page(&state, &limits, page, "movies/similar").await,
    ))
}
