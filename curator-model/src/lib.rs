//! Core data model definitions shared across Curator crates.
#![allow(missing_docs)]

pub mod credits;
pub mod kind;
pub mod limits;
pub mod page;
pub mod summaries;

// Intentionally curated re-exports for downstream consumers.
pub use credits::{CreditEntry, CreditRole, MovieCredit, OtherCredit, TvCredit};
pub use kind::MediaKind;
pub use limits::{ContentRatingLimits, UserRatingOverrides};
pub use page::Page;
pub use summaries::{MovieSummary, TvSummary};
