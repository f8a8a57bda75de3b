use crate::config::Config;
use crate::store::FileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: FileStore,
    #[allow(dead_code)]
    pub config: Config,
}
