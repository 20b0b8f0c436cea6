//! List filtering and the detail-page guard.
//!
//! The adult flag is free and handled first; certification lookups only
//! happen when a rating comparison is actually required. Lookups for a
//! list run concurrently and all settle before a result is produced.
//! A failed lookup is fail-closed: the item is dropped (list) or the
//! request denied (detail), never leaked through.

use curator_model::{ContentRatingLimits, CreditEntry, MediaKind, MovieSummary, TvSummary};
use futures::future::join_all;
use tracing::warn;

use super::classifier::should_block;
use super::resolver::CertificationResolver;

/// A catalog item the list filter can classify. Items reporting no media
/// kind (unrecognized credit types) pass through unblocked.
pub trait RatedCandidate {
    fn tmdb_id(&self) -> u64;
    fn media_kind(&self) -> Option<MediaKind>;
    fn is_adult(&self) -> bool;
}

impl RatedCandidate for MovieSummary {
    fn tmdb_id(&self) -> u64 {
        self.tmdb_id
    }

    fn media_kind(&self) -> Option<MediaKind> {
        Some(MediaKind::Movie)
    }

    fn is_adult(&self) -> bool {
        self.adult
    }
}

impl RatedCandidate for TvSummary {
    fn tmdb_id(&self) -> u64 {
        self.tmdb_id
    }

    fn media_kind(&self) -> Option<MediaKind> {
        Some(MediaKind::Tv)
    }

    fn is_adult(&self) -> bool {
        self.adult
    }
}

impl RatedCandidate for CreditEntry {
    fn tmdb_id(&self) -> u64 {
        match self {
            CreditEntry::Movie(credit) => credit.tmdb_id,
            CreditEntry::Tv(credit) => credit.tmdb_id,
            CreditEntry::Other(credit) => credit.tmdb_id,
        }
    }

    fn media_kind(&self) -> Option<MediaKind> {
        match self {
            CreditEntry::Movie(_) => Some(MediaKind::Movie),
            CreditEntry::Tv(_) => Some(MediaKind::Tv),
            CreditEntry::Other(_) => None,
        }
    }

    fn is_adult(&self) -> bool {
        match self {
            CreditEntry::Movie(credit) => credit.adult,
            CreditEntry::Tv(credit) => credit.adult,
            CreditEntry::Other(_) => false,
        }
    }
}

/// Access denied by the requester's content-rating limits.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("content restricted by parental controls")]
pub struct RatingDenied;

/// Filter a list of candidates down to what the requester may see.
///
/// Output preserves input order. All certification lookups settle before
/// the result is produced; no failure cancels the others.
pub async fn filter_candidates<T: RatedCandidate>(
    resolver: &dyn CertificationResolver,
    limits: &ContentRatingLimits,
    items: Vec<T>,
) -> Vec<T> {
    if !limits.is_active() {
        return items;
    }

    let mut items = items;
    if limits.block_adult {
        items.retain(|item| !item.is_adult());
    }

    if !limits.rating_checks_active() {
        return items;
    }

    let decisions = join_all(
        items.iter().map(|item| keep_item(resolver, limits, item)),
    )
    .await;

    items
        .into_iter()
        .zip(decisions)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

async fn keep_item<T: RatedCandidate>(
    resolver: &dyn CertificationResolver,
    limits: &ContentRatingLimits,
    item: &T,
) -> bool {
    let Some(kind) = item.media_kind() else {
        return true;
    };

    let ceiling = limits.ceiling_for(kind);
    // Neither a ceiling for this kind nor the unrated flag: the
    // classifier cannot block, so skip the lookup entirely.
    if ceiling.is_none() && !limits.block_unrated {
        return true;
    }

    match resolve(resolver, kind, item.tmdb_id()).await {
        Ok(certification) => !should_block(
            kind,
            certification.as_deref(),
            ceiling,
            limits.block_unrated,
        ),
        Err(err) => {
            warn!(
                tmdb_id = item.tmdb_id(),
                kind = %kind,
                ceiling = ?ceiling,
                error = %err,
                "certification lookup failed; dropping item from results"
            );
            false
        }
    }
}

/// Gate a single detail request. Resolver failure denies access.
pub async fn enforce_rating(
    resolver: &dyn CertificationResolver,
    limits: &ContentRatingLimits,
    kind: MediaKind,
    tmdb_id: u64,
    adult: bool,
) -> Result<(), RatingDenied> {
    if !limits.is_active() {
        return Ok(());
    }

    if limits.block_adult && adult {
        return Err(RatingDenied);
    }

    let ceiling = limits.ceiling_for(kind);
    if ceiling.is_none() && !limits.block_unrated {
        return Ok(());
    }

    match resolve(resolver, kind, tmdb_id).await {
        Ok(certification) => {
            if should_block(
                kind,
                certification.as_deref(),
                ceiling,
                limits.block_unrated,
            ) {
                Err(RatingDenied)
            } else {
                Ok(())
            }
        }
        Err(err) => {
            warn!(
                tmdb_id,
                kind = %kind,
                ceiling = ?ceiling,
                error = %err,
                "certification lookup failed; denying access"
            );
            Err(RatingDenied)
        }
    }
}

async fn resolve(
    resolver: &dyn CertificationResolver,
    kind: MediaKind,
    tmdb_id: u64,
) -> Result<Option<String>, crate::providers::ProviderError> {
    match kind {
        MediaKind::Movie => resolver.movie_certification(tmdb_id).await,
        MediaKind::Tv => resolver.tv_certification(tmdb_id).await,
    }
}
