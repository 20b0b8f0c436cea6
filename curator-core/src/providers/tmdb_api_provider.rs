use std::fmt;

use chrono::NaiveDate;
use curator_model::{
    CreditEntry, CreditRole, MovieCredit, OtherCredit, TvCredit,
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

use tmdb_api::{
    client::{Client, reqwest::ReqwestExecutor},
    movie::{
        details::MovieDetails,
        popular::MoviePopular,
        recommendations::MovieRecommendations,
        release_dates::{MovieReleaseDates, MovieReleaseDatesResult},
        search::MovieSearch,
        similar::GetSimilarMovies,
    },
    prelude::Command,
    tvshow::{
        content_rating::{
            ContentRatingResult as TvContentRatingResult, TVShowContentRating,
        },
        details::TVShowDetails,
        popular::TVShowPopular,
        search::TVShowSearch,
    },
};

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// Typed wrapper around the TMDB REST API.
///
/// Most endpoints go through the `tmdb-api` crate; person combined
/// credits is not covered by it and is fetched with a plain `reqwest`
/// call against the same API key.
pub struct TmdbApiProvider {
    client: Client<ReqwestExecutor>,
    http: reqwest::Client,
    api_key: String,
}

impl fmt::Debug for TmdbApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbApiProvider")
            .field("client", &"tmdb_api::Client<ReqwestExecutor>")
            .finish()
    }
}

impl TmdbApiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let client = Client::new(api_key.clone());
        Self {
            client,
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Fetch a page of popular movies
    pub async fn list_popular_movies(
        &self,
        page: Option<u32>,
    ) -> Result<
        tmdb_api::common::PaginatedResult<tmdb_api::movie::MovieShort>,
        ProviderError,
    > {
        MoviePopular::default()
            .with_page(page)
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Fetch a page of popular TV shows
    pub async fn list_popular_tvshows(
        &self,
        page: Option<u32>,
    ) -> Result<
        tmdb_api::common::PaginatedResult<tmdb_api::tvshow::TVShowShort>,
        ProviderError,
    > {
        TVShowPopular::default()
            .with_page(page)
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Search for movies
    pub async fn search_movies(
        &self,
        query: &str,
        year: Option<u16>,
    ) -> Result<
        tmdb_api::common::PaginatedResult<tmdb_api::movie::MovieShort>,
        ProviderError,
    > {
        let movie_search = MovieSearch::new(query.to_string());
        let search_cmd = MovieSearch::with_year(movie_search, year);
        search_cmd
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Search for TV series
    pub async fn search_tvshows(
        &self,
        query: &str,
        year: Option<u16>,
    ) -> Result<
        tmdb_api::common::PaginatedResult<tmdb_api::tvshow::TVShowShort>,
        ProviderError,
    > {
        let mut search_cmd = TVShowSearch::new(query.to_string());
        if year.is_some() {
            search_cmd = search_cmd.with_first_air_date_year(year);
        }
        search_cmd
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Get full movie details - returns TMDB type directly
    pub async fn get_movie(
        &self,
        id: u64,
    ) -> Result<tmdb_api::movie::Movie, ProviderError> {
        MovieDetails::new(id)
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Get regional release dates for a movie (contains certifications)
    pub async fn get_movie_release_dates(
        &self,
        id: u64,
    ) -> Result<MovieReleaseDatesResult, ProviderError> {
        MovieReleaseDates::new(id)
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Get movie recommendations (first page)
    pub async fn get_movie_recommendations(
        &self,
        id: u64,
    ) -> Result<
        tmdb_api::common::PaginatedResult<tmdb_api::movie::MovieShort>,
        ProviderError,
    > {
        MovieRecommendations::new(id)
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Get similar movies (first page)
    pub async fn get_movie_similar(
        &self,
        id: u64,
    ) -> Result<
        tmdb_api::common::PaginatedResult<tmdb_api::movie::MovieShort>,
        ProviderError,
    > {
        GetSimilarMovies::new(id)
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Get full TV series details - returns TMDB type directly
    pub async fn get_series(
        &self,
        id: u64,
    ) -> Result<tmdb_api::tvshow::TVShow, ProviderError> {
        TVShowDetails::new(id)
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Get TV content ratings (per region)
    pub async fn get_tv_content_ratings(
        &self,
        id: u64,
    ) -> Result<TvContentRatingResult, ProviderError> {
        TVShowContentRating::new(id)
            .execute(&self.client)
            .await
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    /// Get a person's combined movie/TV filmography. The tmdb-api crate
    /// has no command for this endpoint, so it is fetched directly.
    pub async fn get_person_combined_credits(
        &self,
        id: u64,
    ) -> Result<PersonCombinedCredits, ProviderError> {
        let url = format!("{TMDB_API_BASE}/person/{id}/combined_credits");
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }
        let response = response.error_for_status()?;

        response
            .json::<PersonCombinedCredits>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

/// Raw combined-credits payload from TMDB.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCombinedCredits {
    pub id: u64,
    #[serde(default)]
    pub cast: Vec<PersonCreditDto>,
    #[serde(default)]
    pub crew: Vec<PersonCreditDto>,
}

/// One raw credit. Movie entries carry `title`/`release_date`, TV entries
/// `name`/`first_air_date`; `media_type` is the discriminant.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCreditDto {
    pub id: u64,
    #[serde(default)]
    pub media_type: String,
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub adult: bool,
    pub character: Option<String>,
    pub job: Option<String>,
}

impl PersonCreditDto {
    /// Convert into the typed credit union. TMDB sends empty-string
    /// dates for unreleased entries; those parse to `None`.
    pub fn into_credit_entry(self, role: CreditRole) -> CreditEntry {
        let parse_date = |value: Option<String>| {
            value
                .as_deref()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        };

        match self.media_type.as_str() {
            "movie" => CreditEntry::Movie(MovieCredit {
                tmdb_id: self.id,
                title: self.title.unwrap_or_default(),
                release_date: parse_date(self.release_date),
                poster_path: self.poster_path,
                adult: self.adult,
                role,
                character: self.character,
                job: self.job,
            }),
            "tv" => CreditEntry::Tv(TvCredit {
                tmdb_id: self.id,
                name: self.name.unwrap_or_default(),
                first_air_date: parse_date(self.first_air_date),
                poster_path: self.poster_path,
                adult: self.adult,
                role,
                character: self.character,
                job: self.job,
            }),
            other => CreditEntry::Other(OtherCredit {
                tmdb_id: self.id,
                media_type: other.to_string(),
                role,
            }),
        }
    }
}

impl PersonCombinedCredits {
    /// Flatten cast + crew into one list, cast first, upstream order kept.
    pub fn into_entries(self) -> Vec<CreditEntry> {
        let mut entries = Vec::with_capacity(self.cast.len() + self.crew.len());
        entries.extend(
            self.cast
                .into_iter()
                .map(|dto| dto.into_credit_entry(CreditRole::Cast)),
        );
        entries.extend(
            self.crew
                .into_iter()
                .map(|dto| dto.into_credit_entry(CreditRole::Crew)),
        );
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_dto_dispatches_on_media_type() {
        let dto = PersonCreditDto {
            id: 603,
            media_type: "movie".to_string(),
            title: Some("The Matrix".to_string()),
            name: None,
            release_date: Some("1999-03-31".to_string()),
            first_air_date: None,
            poster_path: None,
            adult: false,
            character: Some("Neo".to_string()),
            job: None,
        };

        match dto.into_credit_entry(CreditRole::Cast) {
            CreditEntry::Movie(credit) => {
                assert_eq!(credit.tmdb_id, 603);
                assert_eq!(
                    credit.release_date,
                    NaiveDate::from_ymd_opt(1999, 3, 31)
                );
            }
            other => panic!("expected movie credit, got {other:?}"),
        }
    }

    #[test]
    fn unknown_media_type_becomes_other() {
        let dto = PersonCreditDto {
            id: 7,
            media_type: "collection".to_string(),
            title: None,
            name: None,
            release_date: None,
            first_air_date: None,
            poster_path: None,
            adult: false,
            character: None,
            job: None,
        };

        match dto.into_credit_entry(CreditRole::Crew) {
            CreditEntry::Other(credit) => {
                assert_eq!(credit.media_type, "collection");
            }
            other => panic!("expected other credit, got {other:?}"),
        }
    }

    #[test]
    fn empty_release_date_parses_to_none() {
        let dto = PersonCreditDto {
            id: 1,
            media_type: "movie".to_string(),
            title: Some("Unreleased".to_string()),
            name: None,
            release_date: Some(String::new()),
            first_air_date: None,
            poster_path: None,
            adult: false,
            character: None,
            job: None,
        };

        match dto.into_credit_entry(CreditRole::Cast) {
            CreditEntry::Movie(credit) => assert!(credit.release_date.is_none()),
            other => panic!("expected movie credit, got {other:?}"),
        }
    }
}
