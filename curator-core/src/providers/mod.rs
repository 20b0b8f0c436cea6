//! Upstream catalog providers.

pub mod catalog;
pub mod map;
pub mod tmdb_api_provider;

pub use catalog::CatalogProvider;
pub use tmdb_api_provider::{
    PersonCombinedCredits, ProviderError, TmdbApiProvider,
};
