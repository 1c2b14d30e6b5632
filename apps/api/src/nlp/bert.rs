//! `rust_bert` backend: part-of-speech tags from `POSModel`, entities from `NERModel`.
//!
//! Tokens still come from the word tokenizer, so offsets and the stop-word and
//! alphabetic flags match the rule-based backend. Model words are aligned to
//! tokens by text. A token the model does not cover keeps its rule-based tag,
//! and gazetteer entities fill spans the NER model leaves unlabelled.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use rust_bert::pipelines::ner::NERModel;
use rust_bert::pipelines::pos_tagging::{POSConfig, POSModel};
use tracing::info;

use crate::nlp::{Doc, Entity, EntityLabel, NlpPipeline, PartOfSpeech, RuleBasedPipeline, Token};

/// How far ahead of the cursor a token may find its model word.
const ALIGN_WINDOW: usize = 4;

pub struct BertPipeline {
    pos_model: Mutex<POSModel>,
    ner_model: Mutex<NERModel>,
    fallback: RuleBasedPipeline,
}

impl BertPipeline {
    /// Loads both models (downloading weights into the local cache on first use)
    /// and the gazetteer. Blocks; run it on a blocking thread.
    pub fn load(extra_terms: Option<&Path>) -> Result<Self> {
        let pos_model = POSModel::new(POSConfig::default()).context("Failed to load POS model")?;
        info!("POS model loaded");
        let ner_model = NERModel::new(Default::default()).context("Failed to load NER model")?;
        info!("NER model loaded");

        Ok(Self {
            pos_model: Mutex::new(pos_model),
            ner_model: Mutex::new(ner_model),
            fallback: RuleBasedPipeline::load(extra_terms)?,
        })
    }
}

impl NlpPipeline for BertPipeline {
    fn analyze(&self, text: &str) -> Doc {
        let mut doc = self.fallback.analyze(text);
        if text.trim().is_empty() {
            return doc;
        }

        let input = [text];
        let tagged: Vec<(String, String)> = {
            let model = self.pos_model.lock().unwrap_or_else(PoisonError::into_inner);
            model
                .predict(&input)
                .into_iter()
                .flatten()
                .map(|t| (t.word, t.label))
                .collect()
        };
        apply_pos_tags(&mut doc.tokens, &tagged);

        let spans: Vec<(EntityLabel, usize, usize)> = {
            let model = self.ner_model.lock().unwrap_or_else(PoisonError::into_inner);
            model
                .predict_full_entities(&input)
                .into_iter()
                .flatten()
                .filter_map(|e| {
                    let (start, end) =
                        char_span_to_bytes(text, e.offset.begin as usize, e.offset.end as usize)?;
                    Some((ner_label(&e.label), start, end))
                })
                .collect()
        };
        let model_entities = spans
            .into_iter()
            .filter_map(|(label, start, end)| entity_for_span(text, &doc.tokens, label, start, end))
            .collect();

        let gazetteer_entities = std::mem::take(&mut doc.entities);
        doc.entities = merge_entities(model_entities, gazetteer_entities);
        for token in &mut doc.tokens {
            token.ent_type = None;
        }
        for entity in &doc.entities {
            for token in &mut doc.tokens[entity.start_token..entity.end_token] {
                token.ent_type = Some(entity.label);
            }
        }

        doc
    }

    fn backend(&self) -> &'static str {
        "rust-bert"
    }
}

/// Penn Treebank tag → universal tag. `None` for tags with no counterpart here
/// (`FW`, `LS`, `SYM`, `UH`, ...).
fn penn_to_pos(tag: &str) -> Option<PartOfSpeech> {
    let pos = match tag {
        "NN" | "NNS" => PartOfSpeech::Noun,
        "NNP" | "NNPS" => PartOfSpeech::ProperNoun,
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => PartOfSpeech::Verb,
        "MD" => PartOfSpeech::Aux,
        "JJ" | "JJR" | "JJS" => PartOfSpeech::Adjective,
        "RB" | "RBR" | "RBS" | "WRB" => PartOfSpeech::Adverb,
        "IN" => PartOfSpeech::Adposition,
        "DT" | "PDT" | "WDT" => PartOfSpeech::Determiner,
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => PartOfSpeech::Pronoun,
        "CC" => PartOfSpeech::CoordConj,
        "RP" | "TO" | "POS" => PartOfSpeech::Particle,
        "CD" => PartOfSpeech::Numeral,
        "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "(" | ")" | "#" | "$" | "HYPH" => {
            PartOfSpeech::Punctuation
        }
        _ => return None,
    };
    Some(pos)
}

/// CoNLL-03 label → entity label. `MISC` covers products and technologies.
fn ner_label(label: &str) -> EntityLabel {
    let label = label
        .strip_prefix("B-")
        .or_else(|| label.strip_prefix("I-"))
        .unwrap_or(label);
    match label {
        "ORG" => EntityLabel::Org,
        "MISC" => EntityLabel::Product,
        "PER" => EntityLabel::Person,
        "LOC" => EntityLabel::Location,
        _ => EntityLabel::Other,
    }
}

/// Overwrites `pos` on tokens whose text matches the next model words.
fn apply_pos_tags(tokens: &mut [Token], tagged: &[(String, String)]) {
    let mut cursor = 0;
    for token in tokens.iter_mut() {
        let window_end = (cursor + ALIGN_WINDOW).min(tagged.len());
        let found = tagged[cursor..window_end]
            .iter()
            .position(|(word, _)| word.eq_ignore_ascii_case(&token.text));
        if let Some(offset) = found {
            if let Some(pos) = penn_to_pos(&tagged[cursor + offset].1) {
                token.pos = pos;
            }
            cursor += offset + 1;
        }
    }
}

/// Model offsets count characters; tokens use byte offsets.
fn char_span_to_bytes(text: &str, begin: usize, end: usize) -> Option<(usize, usize)> {
    let byte_at = |n: usize| {
        text.char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .nth(n)
    };
    let (start, end) = (byte_at(begin)?, byte_at(end)?);
    (start < end).then_some((start, end))
}

/// The entity covering every token that overlaps `start..end`.
fn entity_for_span(
    text: &str,
    tokens: &[Token],
    label: EntityLabel,
    start: usize,
    end: usize,
) -> Option<Entity> {
    let first = tokens.iter().position(|t| t.start < end && t.end > start)?;
    let last = tokens.iter().rposition(|t| t.start < end && t.end > start)?;
    Some(Entity {
        text: text[tokens[first].start..tokens[last].end].to_string(),
        label,
        start_token: first,
        end_token: last + 1,
    })
}

/// Model entities, plus gazetteer entities that overlap none of them, in token order.
fn merge_entities(model: Vec<Entity>, gazetteer: Vec<Entity>) -> Vec<Entity> {
    let mut merged: Vec<Entity> = Vec::with_capacity(model.len() + gazetteer.len());
    for entity in model {
        let overlaps = merged
            .iter()
            .any(|m| m.start_token < entity.end_token && entity.start_token < m.end_token);
        if !overlaps {
            merged.push(entity);
        }
    }
    let model_count = merged.len();
    for entity in gazetteer {
        let overlaps = merged[..model_count]
            .iter()
            .any(|m| m.start_token < entity.end_token && entity.start_token < m.end_token);
        if !overlaps {
            merged.push(entity);
        }
    }
    merged.sort_by_key(|e| e.start_token);
    merged
}
