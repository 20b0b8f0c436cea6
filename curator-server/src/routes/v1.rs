use axum::{
    Router,
    routing::{get, put},
};

use crate::{
    AppState,
    handlers::{discover, movies, person, settings, tv},
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        // Catalog browsing (list-filtered)
        .route("/discover/movies", get(discover::discover_movies))
        .route("/discover/tv", get(discover::discover_tv))
        .route("/search/movies", get(discover::search_movies))
        .route("/search/tv", get(discover::search_tv))
        // Detail pages (rating-guarded)
        .route("/movies/{tmdb_id}", get(movies::movie_details))
        .route(
            "/movies/{tmdb_id}/recommendations",
            get(movies::movie_recommendations),
        )
        .route("/movies/{tmdb_id}/similar", get(movies::movie_similar))
        .route("/tv/{tmdb_id}", get(tv::tv_details))
        // Filmographies
        .route("/person/{person_id}/credits", get(person::person_credits))
        // Limits administration
        .route(
            "/settings/ratings",
            get(settings::get_default_limits)
                .put(settings::put_default_limits),
        )
        .route(
            "/users/{user_id}/ratings",
            put(settings::put_user_overrides)
                .get(settings::get_user_overrides)
                .delete(settings::delete_user_overrides),
        )
}
