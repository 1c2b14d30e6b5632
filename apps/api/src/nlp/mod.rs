//! NLP pipeline: tokenization, part-of-speech tagging and entity recognition.
//!
//! The pipeline is built once at startup and carried in `AppState` as
//! `Arc<dyn NlpPipeline>`. Handlers never construct one per request.
//! `NLP_BACKEND` picks the `rust_bert` models (with the `bert` feature) or the
//! rule-based tagger and gazetteer.

#[cfg(feature = "bert")]
pub mod bert;
pub mod entities;
pub mod pipeline;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Result};

#[cfg(feature = "bert")]
pub use bert::BertPipeline;
pub use pipeline::RuleBasedPipeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NlpBackend {
    #[default]
    RuleBased,
    RustBert,
}

impl FromStr for NlpBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rule-based" | "rules" => Ok(NlpBackend::RuleBased),
            "rust-bert" | "bert" => Ok(NlpBackend::RustBert),
            other => bail!("unknown NLP backend '{other}'"),
        }
    }
}

/// Builds the configured pipeline. `extra_terms` extends the gazetteer either way.
pub async fn load_pipeline(
    backend: NlpBackend,
    extra_terms: Option<&Path>,
) -> Result<Arc<dyn NlpPipeline>> {
    match backend {
        NlpBackend::RuleBased => Ok(Arc::new(RuleBasedPipeline::load(extra_terms)?)),
        NlpBackend::RustBert => load_bert(extra_terms).await,
    }
}

#[cfg(feature = "bert")]
async fn load_bert(extra_terms: Option<&Path>) -> Result<Arc<dyn NlpPipeline>> {
    use anyhow::Context;

    let extra_terms = extra_terms.map(Path::to_path_buf);
    // model weights are fetched with a blocking client
    let pipeline = tokio::task::spawn_blocking(move || BertPipeline::load(extra_terms.as_deref()))
        .await
        .context("NLP model loader failed")??;
    Ok(Arc::new(pipeline))
}

#[cfg(not(feature = "bert"))]
async fn load_bert(_extra_terms: Option<&Path>) -> Result<Arc<dyn NlpPipeline>> {
    bail!("NLP_BACKEND=rust-bert needs a build with the `bert` feature")
}

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Aux,
    Adjective,
    Adverb,
    Adposition,
    Determiner,
    Pronoun,
    CoordConj,
    SubordConj,
    Particle,
    Numeral,
    Punctuation,
    /// No evidence for any other tag.
    Other,
}

impl PartOfSpeech {
    pub fn is_nominal(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

/// Entity labels produced by the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Skill,
    Org,
    Product,
    Person,
    Location,
    Other,
}

impl EntityLabel {
    /// Parses a gazetteer label. Unknown labels map to `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "SKILL" => EntityLabel::Skill,
            "ORG" => EntityLabel::Org,
            "PRODUCT" => EntityLabel::Product,
            "PERSON" => EntityLabel::Person,
            "GPE" | "LOC" | "LOCATION" => EntityLabel::Location,
            _ => EntityLabel::Other,
        }
    }
}

/// A tagged token. Offsets are byte offsets into the analyzed text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub pos: PartOfSpeech,
    pub is_alpha: bool,
    pub is_stop: bool,
    /// Label of the entity this token belongs to, if any.
    pub ent_type: Option<EntityLabel>,
}

/// A recognized entity span. `start_token..end_token` indexes `Doc::tokens`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start_token: usize,
    pub end_token: usize,
}

/// The analyzed form of a text.
#[derive(Debug, Clone, Default)]
pub struct Doc {
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
}

/// An NLP backend. Implementations must be read-only after construction.
pub trait NlpPipeline: Send + Sync {
    fn analyze(&self, text: &str) -> Doc;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
