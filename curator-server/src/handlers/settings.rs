use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use curator_core::ratings::hierarchy::rating_index;
use curator_model::{ContentRatingLimits, MediaKind, UserRatingOverrides};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{AppState, errors::{AppError, AppResult}};

pub async fn get_default_limits(
    State(state): State<AppState>,
) -> Json<ContentRatingLimits> {
    Json(state.limits.defaults())
}

pub async fn put_default_limits(
    State(state): State<AppState>,
    Json(limits): Json<ContentRatingLimits>,
) -> Json<ContentRatingLimits> {
    warn_on_unknown_ceiling(MediaKind::Movie, limits.max_movie_rating.as_deref());
    warn_on_unknown_ceiling(MediaKind::Tv, limits.max_tv_rating.as_deref());

    info!(?limits, "updating default rating limits");
    state.limits.set_defaults(limits.clone());
    Json(limits)
}

pub async fn get_user_overrides(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<UserRatingOverrides>> {
    state
        .limits
        .overrides_for(user_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("No overrides for this user"))
}

pub async fn put_user_overrides(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(overrides): Json<UserRatingOverrides>,
) -> Json<UserRatingOverrides> {
    warn_on_unknown_ceiling(
        MediaKind::Movie,
        overrides.max_movie_rating.as_deref(),
    );
    warn_on_unknown_ceiling(MediaKind::Tv, overrides.max_tv_rating.as_deref());

    info!(%user_id, "updating user rating overrides");
    state.limits.set_overrides(user_id, overrides.clone());
    Json(overrides)
}

pub async fn delete_user_overrides(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if state.limits.clear_overrides(user_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("No overrides for this user"))
    }
}

// Stored ceilings the hierarchy does not know fail open at classify
// time, so accept them but make the misconfiguration visible.
fn warn_on_unknown_ceiling(kind: MediaKind, ceiling: Option<&str>) {
    if let Some(value) = ceiling
        && rating_index(kind, value).is_none()
    {
        warn!(%kind, ceiling = value, "ceiling is not a known rating; it will not restrict anything");
    }
}
