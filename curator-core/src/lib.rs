//! Core library for the Curator discovery service.
//!
//! Hosts the content-rating engine (hierarchy tables, single-item
//! classifier, list/detail filters, certification resolution), the TMDB
//! provider client, and the in-memory user-limits store.
#![allow(missing_docs)]

pub mod providers;
pub mod ratings;
pub mod users;

pub use providers::{CatalogProvider, ProviderError, TmdbApiProvider};
pub use ratings::classifier::{should_block, should_block_movie, should_block_tv};
pub use ratings::filter::{RatedCandidate, RatingDenied, enforce_rating, filter_candidates};
pub use ratings::resolver::{CertificationResolver, TmdbCertificationResolver};
pub use users::limits::LimitsStore;
