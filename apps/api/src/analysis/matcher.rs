//! Keyword matcher: resume skills vs job keywords, with synonym fallback.
//!
//! Algorithm:
//! 1. Lower-case the resume text and run it through the NLP pipeline.
//! 2. Every allow-listed entity becomes a resume skill.
//! 3. Every token that literally equals a job keyword becomes a resume skill.
//! 4. A job keyword matches if it is a resume skill, or any of its synonyms is.
//! 5. percentage = 100 × matched / keywords, or 0 when there are no keywords.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::analysis::keywords::{JobKeywordSet, ENTITY_ALLOW_LIST};
use crate::lexicon::SynonymLexicon;
use crate::nlp::NlpPipeline;

/// Lower-cased skills found in a resume.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeSkillSet(HashSet<String>);

impl ResumeSkillSet {
    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn insert(&mut self, skill: &str) {
        self.0.insert(skill.to_lowercase());
    }

    /// Sorted copy for display.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// In job keyword order.
    pub matched_keywords: Vec<String>,
    /// 0–100, unrounded.
    pub percentage: f64,
}

pub fn extract_resume_skills(
    resume_text: &str,
    job_keywords: &JobKeywordSet,
    nlp: &dyn NlpPipeline,
) -> ResumeSkillSet {
    let resume_text = resume_text.to_lowercase();
    let doc = nlp.analyze(&resume_text);
    let mut skills = ResumeSkillSet::default();

    for entity in &doc.entities {
        if ENTITY_ALLOW_LIST.contains(&entity.label) {
            skills.insert(&entity.text);
        }
    }

    for token in &doc.tokens {
        let lower = token.text.to_lowercase();
        if job_keywords.contains(&lower) {
            skills.insert(&lower);
        }
    }

    skills
}

pub fn match_keywords(
    resume_skills: &ResumeSkillSet,
    job_keywords: &JobKeywordSet,
    lexicon: &dyn SynonymLexicon,
) -> MatchResult {
    let matched_keywords: Vec<String> = job_keywords
        .iter()
        .filter(|keyword| {
            resume_skills.contains(keyword)
                || lexicon
                    .synonyms(keyword)
                    .iter()
                    .any(|synonym| resume_skills.contains(synonym))
        })
        .map(str::to_string)
        .collect();

    let percentage = if job_keywords.is_empty() {
        0.0
    } else {
        matched_keywords.len() as f64 / job_keywords.len() as f64 * 100.0
    };

    MatchResult {
        matched_keywords,
        percentage,
    }
}
