//! # Curator Server
//!
//! HTTP service for the Curator discovery platform.
//!
//! ## Overview
//!
//! Curator proxies movie/TV catalog browsing against TMDB and enforces
//! per-user content-rating limits on every response:
//!
//! - **Discovery**: popular/search pages for movies and TV
//! - **Details**: single-item pages guarded by parental controls
//! - **Filmographies**: person combined credits with per-entry dispatch
//! - **Limits administration**: admin defaults and per-user overrides
//!
//! Authentication lives upstream; requests carry an optional
//! `x-user-id` header set by the fronting proxy.

pub mod config;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::CuratorConfig;
pub use errors::{AppError, AppResult};
pub use state::AppState;
