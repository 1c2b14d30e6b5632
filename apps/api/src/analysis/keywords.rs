//! Job keyword extraction.

use std::collections::HashSet;

use crate::nlp::{EntityLabel, NlpPipeline, Token};

/// Entity labels whose tokens count as keywords regardless of part of speech.
pub const ENTITY_ALLOW_LIST: &[EntityLabel] =
    &[EntityLabel::Skill, EntityLabel::Org, EntityLabel::Product];

/// Deduplicated, lower-cased keywords in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobKeywordSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl JobKeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a lower-cased copy of `keyword`. Returns false for duplicates.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || self.members.contains(&keyword) {
            return false;
        }
        self.members.insert(keyword.clone());
        self.ordered.push(keyword);
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.members.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for JobKeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}

/// Noun, proper noun, or allow-listed entity; alphabetic and not a stop word.
pub fn is_keyword_candidate(token: &Token) -> bool {
    let of_interest = token.pos.is_nominal()
        || token
            .ent_type
            .is_some_and(|label| ENTITY_ALLOW_LIST.contains(&label));
    of_interest && !token.is_stop && token.is_alpha
}

/// Extracts keywords from a job description. The text is lower-cased before analysis.
pub fn extract_job_keywords(text: &str, nlp: &dyn NlpPipeline) -> JobKeywordSet {
    let doc = nlp.analyze(&text.to_lowercase());
    let mut keywords = JobKeywordSet::new();
    for token in doc.tokens.iter().filter(|t| is_keyword_candidate(t)) {
        keywords.insert(&token.text);
    }
    keywords
}
