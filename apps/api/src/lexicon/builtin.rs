//! Builtin synonym table for hiring vocabulary.

use std::collections::BTreeSet;

use crate::lexicon::SynonymLexicon;

/// Synonym groups. Every word in a group is a synonym of every other.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    // Roles
    &[
        "developer",
        "programmer",
        "coder",
        "engineer",
        "software engineer",
        "software developer",
    ],
    &["manager", "supervisor", "lead", "head"],
    &["analyst", "researcher"],
    &["designer", "architect"],
    &["intern", "trainee", "apprentice"],
    // Experience and ability
    &["experience", "expertise", "background", "proficiency", "know-how"],
    &["skill", "ability", "competence", "capability"],
    &["leadership", "management", "direction"],
    &["communication", "communications", "interpersonal"],
    &["teamwork", "collaboration", "cooperation"],
    // Technology
    &["database", "db", "datastore"],
    &["javascript", "js", "ecmascript"],
    &["kubernetes", "k8s"],
    &["postgresql", "postgres"],
    &["machine learning", "ml"],
    &["artificial intelligence", "ai"],
    &["frontend", "front-end", "client-side"],
    &["backend", "back-end", "server-side"],
    &["testing", "qa", "quality assurance"],
    &["documentation", "docs"],
    &["cloud", "aws", "azure", "gcp"],
    // Education and business
    &["degree", "diploma", "qualification"],
    &["university", "college"],
    &["customer", "client"],
    &["salary", "compensation", "pay"],
    &["startup", "start-up"],
];

pub struct BuiltinLexicon {
    groups: &'static [&'static [&'static str]],
}

impl BuiltinLexicon {
    pub fn new() -> Self {
        Self {
            groups: SYNONYM_GROUPS,
        }
    }
}

impl Default for BuiltinLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SynonymLexicon for BuiltinLexicon {
    fn synonyms(&self, word: &str) -> BTreeSet<String> {
        let word = super::normalize_lemma(word.trim());
        self.groups
            .iter()
            .filter(|group| group.contains(&word.as_str()))
            .flat_map(|group| group.iter().map(|w| w.to_string()))
            .collect()
    }

    fn backend(&self) -> &'static str {
        "builtin"
    }
}
