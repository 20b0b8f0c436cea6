//! Content-rating engine: hierarchy tables, the single-item classifier,
//! certification resolution, and the list/detail filters.

pub mod classifier;
pub mod filter;
pub mod hierarchy;
pub mod resolver;
