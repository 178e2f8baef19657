use crate::config::Config;
use crate::content::generator::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the one completion client, constructed in `main` and injected here.
    pub generator: ContentGenerator,
    pub config: Config,
}
