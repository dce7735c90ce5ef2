use std::sync::Arc;

use crate::assistant::resume::TextExtractor;
use crate::auth::TokenVerifier;
use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::pipeline::catalog::JobCatalog;
use crate::profiles::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Collaborators are trait objects so tests can substitute doubles.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub completion: Arc<dyn CompletionClient>,
    /// Pulls plain text out of an uploaded resume file.
    pub extractor: Arc<dyn TextExtractor>,
    pub catalog: Arc<JobCatalog>,
    pub verifier: Arc<TokenVerifier>,
    pub config: Config,
}
