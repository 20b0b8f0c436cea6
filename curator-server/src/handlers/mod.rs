//! HTTP request handlers.

pub mod discover;
pub mod movies;
pub mod person;
pub mod settings;
pub mod tv;

use curator_core::{RatedCandidate, filter_candidates};
use curator_model::{ContentRatingLimits, Page};
use tracing::debug;

use crate::AppState;

/// Run one page of catalog results through the rating filter, keeping
/// the upstream pagination counts.
async fn filter_page<T: RatedCandidate>(
    state: &AppState,
    limits: &ContentRatingLimits,
    mut page: Page<T>,
    endpoint: &'static str,
) -> Page<T> {
    let items = std::mem::take(&mut page.results);
    let fetched = items.len();
    let results =
        filter_candidates(state.resolver.as_ref(), limits, items).await;
    debug!(
        endpoint,
        fetched,
        kept = results.len(),
        "list filtered by rating limits"
    );
    page.with_results(results)
}
