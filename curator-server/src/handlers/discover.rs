use axum::{
    Json,
    extract::{Query, State},
};
use curator_model::{MovieSummary, Page, TvSummary};
use serde::Deserialize;

use super::filter_page;
use crate::{AppState, errors::AppResult, extract::RequestUser};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub year: Option<u16>,
}

pub async fn discover_movies(
    State(state): State<AppState>,
    user: RequestUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Page<MovieSummary>>> {
    let limits = state.limits.limits_for(user.0);
    let page = state.provider.popular_movies(query.page).await?;
    Ok(Json(
        filter_page(&state, &limits, page, "discover/movies").await,
    ))
}

pub async fn discover_tv(
    State(state): State<AppState>,
    user: RequestUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Page<TvSummary>>> {
    let limits = state.limits.limits_for(user.0);
    let page = state.provider.popular_tv(query.page).await?;
    Ok(Json(filter_page(&state, &limits, page, "discover/tv").await))
}

pub async fn search_movies(
    State(state): State<AppState>,
    user: RequestUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Page<MovieSummary>>> {
    let limits = state.limits.limits_for(user.0);
    let page = state
        .provider
        .movie_search(&query.query, query.year)
        .await?;
    Ok(Json(
        filter_page(&state, &limits, page, "search/movies").await,
    ))
}

pub async fn search_tv(
    State(state): State<AppState>,
    user: RequestUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Page<TvSummary>>> {
    let limits = state.limits.limits_for(user.0);
    let page = state.provider.tv_search(&query.query, query.year).await?;
    Ok(Json(filter_page(&state, &limits, page, "search/tv").await))
}
