use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lightweight movie entry as it appears in discover, search, and
/// recommendation pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub tmdb_id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub release_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

/// Lightweight TV series entry for list pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvSummary {
    pub tmdb_id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub first_air_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}
