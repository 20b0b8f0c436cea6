//! Catalog access seam.

use async_trait::async_trait;
use curator_model::{CreditEntry, MovieSummary, Page, TvSummary};

use super::map;
use super::tmdb_api_provider::{ProviderError, TmdbApiProvider};

/// Upstream catalog operations the HTTP layer depends on, expressed in
/// the shared model types. Implemented by [`TmdbApiProvider`]; tests
/// substitute fixed-response stubs.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn popular_movies(
        &self,
        page: Option<u32>,
    ) -> Result<Page<MovieSummary>, ProviderError>;

    async fn popular_tv(
        &self,
        page: Option<u32>,
    ) -> Result<Page<TvSummary>, ProviderError>;

    async fn movie_search(
        &self,
        query: &str,
        year: Option<u16>,
    ) -> Result<Page<MovieSummary>, ProviderError>;

    async fn tv_search(
        &self,
        query: &str,
        year: Option<u16>,
    ) -> Result<Page<TvSummary>, ProviderError>;

    async fn movie_details(
        &self,
        tmdb_id: u64,
    ) -> Result<MovieSummary, ProviderError>;

    async fn movie_recommendations(
        &self,
        tmdb_id: u64,
    ) -> Result<Page<MovieSummary>, ProviderError>;

    async fn movie_similar(
        &self,
        tmdb_id: u64,
    ) -> Result<Page<MovieSummary>, ProviderError>;

    async fn tv_details(&self, tmdb_id: u64)
    -> Result<TvSummary, ProviderError>;

    async fn person_credits(
        &self,
        person_id: u64,
    ) -> Result<Vec<CreditEntry>, ProviderError>;
}

#[async_trait]
impl CatalogProvider for TmdbApiProvider {
    async fn popular_movies(
        &self,
        page: Option<u32>,
    ) -> Result<Page<MovieSummary>, ProviderError> {
        Ok(map::movie_page(self.list_popular_movies(page).await?))
    }

    async fn popular_tv(
        &self,
        page: Option<u32>,
    ) -> Result<Page<TvSummary>, ProviderError> {
        Ok(map::tv_page(self.list_popular_tvshows(page).await?))
    }

    async fn movie_search(
        &self,
        query: &str,
        year: Option<u16>,
    ) -> Result<Page<MovieSummary>, ProviderError> {
        Ok(map::movie_page(self.search_movies(query, year).await?))
    }

    async fn tv_search(
        &self,
        query: &str,
        year: Option<u16>,
    ) -> Result<Page<TvSummary>, ProviderError> {
        Ok(map::tv_page(self.search_tvshows(query, year).await?))
    }

    async fn movie_details(
        &self,
        tmdb_id: u64,
    ) -> Result<MovieSummary, ProviderError> {
        let movie = self.get_movie(tmdb_id).await?;
        Ok(map::movie_summary(&movie.inner))
    }

    async fn movie_recommendations(
        &self,
        tmdb_id: u64,
    ) -> Result<Page<MovieSummary>, ProviderError> {
        Ok(map::movie_page(
            self.get_movie_recommendations(tmdb_id).await?,
        ))
    }

    async fn movie_similar(
        &self,
        tmdb_id: u64,
    ) -> Result<Page<MovieSummary>, ProviderError> {
        Ok(map::movie_page(self.get_movie_similar(tmdb_id).await?))
    }

    async fn tv_details(
        &self,
        tmdb_id: u64,
    ) -> Result<TvSummary, ProviderError> {
        let series = self.get_series(tmdb_id).await?;
        Ok(map::tv_summary(&series.inner))
    }

    async fn person_credits(
        &self,
        person_id: u64,
    ) -> Result<Vec<CreditEntry>, ProviderError> {
        Ok(self
            .get_person_combined_credits(person_id)
            .await?
            .into_entries())
    }
}
