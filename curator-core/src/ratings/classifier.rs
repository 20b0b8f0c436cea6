//! Single-item block/allow decision.
//!
//! Pure and synchronous; the caller supplies the already-resolved
//! certification. Unrecognized item ratings follow the unrated policy,
//! while an unrecognized ceiling fails open so a misconfigured limit
//! cannot black out the whole catalog.

use curator_model::MediaKind;

use super::hierarchy::{is_unrated, rating_index};

/// Decide whether one item must be blocked.
///
/// `rating` is the item's resolved certification (if any), `ceiling` the
/// requester's maximum allowed rating for this category, `block_unrated`
/// whether explicitly-unrated content is blocked. Returns `true` to
/// block.
pub fn should_block(
    kind: MediaKind,
    rating: Option<&str>,
    ceiling: Option<&str>,
    block_unrated: bool,
) -> bool {
    // No restrictions active at all.
    if ceiling.is_none() && !block_unrated {
        return false;
    }

    // Absent or explicitly-unrated certification is governed solely by
    // the unrated flag.
    let Some(rating) = rating.filter(|value| !is_unrated(value)) else {
        return block_unrated;
    };

    // Rated content with no ceiling configured: the unrated-only
    // restriction does not apply.
    let Some(ceiling) = ceiling else {
        return false;
    };

    // A rating the hierarchy does not know is treated like unrated.
    let Some(rating_idx) = rating_index(kind, rating) else {
        return block_unrated;
    };

    // An unrecognized ceiling fails open, unlike an unrecognized rating.
    let Some(ceiling_idx) = rating_index(kind, ceiling) else {
        return false;
    };

    rating_idx > ceiling_idx
}

/// Movie-hierarchy variant of [`should_block`].
pub fn should_block_movie(
    rating: Option<&str>,
    ceiling: Option<&str>,
    block_unrated: bool,
) -> bool {
    should_block(MediaKind::Movie, rating, ceiling, block_unrated)
}

/// TV-hierarchy variant of [`should_block`].
pub fn should_block_tv(
    rating: Option<&str>,
    ceiling: Option<&str>,
    block_unrated: bool,
) -> bool {
    should_block(MediaKind::Tv, rating, ceiling, block_unrated)
}
