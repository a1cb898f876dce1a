use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document-text extractor. Default: extension-dispatching
    /// `DocumentExtractor`; tests swap in a canned one.
    pub extractor: Arc<dyn TextExtractor>,
}
