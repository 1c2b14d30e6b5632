use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::lexicon::SynonymLexicon;
use crate::nlp::NlpPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
/// Backends are built once in `main` and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub nlp: Arc<dyn NlpPipeline>,
    /// WordNet when `WORDNET_DIR` is set, builtin table otherwise.
    pub lexicon: Arc<dyn SynonymLexicon>,
    pub extractor: Arc<dyn TextExtractor>,
}
