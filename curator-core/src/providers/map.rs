//! Conversions from upstream TMDB payloads to the shared model types.

use curator_model::{MovieSummary, Page, TvSummary};
use tmdb_api::common::PaginatedResult;
use tmdb_api::movie::{MovieBase, MovieShort};
use tmdb_api::tvshow::{TVShowBase, TVShowShort};

pub fn movie_summary(base: &MovieBase) -> MovieSummary {
    MovieSummary {
        tmdb_id: base.id,
        title: base.title.clone(),
        overview: base.overview.clone(),
        release_date: base.release_date,
        poster_path: base.poster_path.clone(),
        backdrop_path: base.backdrop_path.clone(),
        adult: base.adult,
        popularity: base.popularity,
        vote_average: base.vote_average,
        vote_count: base.vote_count,
    }
}

pub fn tv_summary(base: &TVShowBase) -> TvSummary {
    TvSummary {
        tmdb_id: base.id,
        name: base.name.clone(),
        overview: base.overview.clone().unwrap_or_default(),
        first_air_date: base.first_air_date,
        poster_path: base.poster_path.clone(),
        backdrop_path: base.backdrop_path.clone(),
        adult: base.adult,
        popularity: base.popularity,
        vote_average: base.vote_average,
        vote_count: base.vote_count,
    }
}

pub fn movie_page(result: PaginatedResult<MovieShort>) -> Page<MovieSummary> {
    Page {
        page: result.page,
        total_pages: result.total_pages,
        total_results: result.total_results,
        results: result
            .results
            .iter()
            .map(|short| movie_summary(&short.inner))
            .collect(),
    }
}

pub fn tv_page(result: PaginatedResult<TVShowShort>) -> Page<TvSummary> {
    Page {
        page: result.page,
        total_pages: result.total_pages,
        total_results: result.total_results,
        results: result
            .results
            .iter()
            .map(|short| tv_summary(&short.inner))
            .collect(),
    }
}
