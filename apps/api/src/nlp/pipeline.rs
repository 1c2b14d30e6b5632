use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::nlp::entities::Gazetteer;
use crate::nlp::stopwords::is_stop_word;
use crate::nlp::tagger::tag;
use crate::nlp::tokenizer::{is_alpha, tokenize};
use crate::nlp::{Doc, NlpPipeline, Token};

/// Tokenizer + rule-based tagger + gazetteer recognizer.
pub struct RuleBasedPipeline {
    gazetteer: Gazetteer,
}

impl RuleBasedPipeline {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Builtin gazetteer, extended with `extra_terms` when given.
    pub fn load(extra_terms: Option<&Path>) -> Result<Self> {
        let mut gazetteer = Gazetteer::builtin();
        if let Some(path) = extra_terms {
            let added = gazetteer.extend_from_file(path)?;
            info!("Loaded {added} gazetteer terms from {}", path.display());
        }
        info!("Gazetteer holds {} terms", gazetteer.len());
        Ok(Self::new(gazetteer))
    }
}

impl NlpPipeline for RuleBasedPipeline {
    fn analyze(&self, text: &str) -> Doc {
        let raw = tokenize(text);
        let tags = tag(&raw);
        let entities = self.gazetteer.recognize(text, &raw);

        let mut tokens: Vec<Token> = raw
            .iter()
            .zip(tags)
            .map(|(t, pos)| Token {
                text: t.text.to_string(),
                start: t.start,
                end: t.end,
                pos,
                is_alpha: is_alpha(t.text),
                is_stop: is_stop_word(t.text),
                ent_type: None,
            })
            .collect();

        for entity in &entities {
            for token in &mut tokens[entity.start_token..entity.end_token] {
                token.ent_type = Some(entity.label);
            }
        }

        Doc { tokens, entities }
    }

    fn backend(&self) -> &'static str {
        "rule-based"
    }
}
