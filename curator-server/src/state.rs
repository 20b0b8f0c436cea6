use std::sync::Arc;

use curator_core::{
    CatalogProvider, CertificationResolver, LimitsStore, TmdbApiProvider,
    TmdbCertificationResolver,
};

use crate::config::CuratorConfig;

/// Shared application state. Both upstream dependencies sit behind
/// traits so router tests can swap in fixed-response stubs.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub resolver: Arc<dyn CertificationResolver>,
    pub limits: Arc<LimitsStore>,
}

impl AppState {
    pub fn new(config: &CuratorConfig) -> Self {
        let provider = Arc::new(TmdbApiProvider::new(&config.tmdb.api_key));
        let resolver =
            Arc::new(TmdbCertificationResolver::new(provider.clone()));
        Self {
            provider,
            resolver,
            limits: Arc::new(LimitsStore::new(config.ratings.clone())),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
