use serde::{Deserialize, Serialize};

/// One page of catalog results.
///
/// The pagination metadata mirrors what the upstream catalog reported.
/// Content filtering can shrink `results` without adjusting
/// `total_results` or `total_pages`; correcting them would require
/// resolving every remaining page upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u64,
    pub total_pages: u64,
    pub total_results: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Replace the page contents, keeping the upstream pagination counts.
    pub fn with_results<U>(&self, results: Vec<U>) -> Page<U> {
        Page {
            page: self.page,
            total_pages: self.total_pages,
            total_results: self.total_results,
            results,
        }
    }
}
