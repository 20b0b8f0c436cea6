use axum::{
    Json,
    extract::{Path, State},
};
use curator_core::filter_candidates;
use curator_model::CreditEntry;
use tracing::debug;

use crate::{AppState, errors::AppResult, extract::RequestUser};

/// A person's combined filmography. Movie and TV entries dispatch to
/// their own hierarchy; unrecognized media types pass through.
pub async fn person_credits(
    State(state): State<AppState>,
    user: RequestUser,
    Path(person_id): Path<u64>,
) -> AppResult<Json<Vec<CreditEntry>>> {
    let limits = state.limits.limits_for(user.0);
    let credits = state.provider.person_credits(person_id).await?;

    let fetched = credits.len();
    let entries =
        filter_candidates(state.resolver.as_ref(), &limits, credits).await;
    debug!(
        person_id,
        fetched,
        kept = entries.len(),
        "filmography filtered by rating limits"
    );

    Ok(Json(entries))
}
