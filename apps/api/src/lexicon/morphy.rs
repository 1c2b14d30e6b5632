//! Base-form reduction for WordNet lookups.
//!
//! Exception lists are tried first. Otherwise suffix-detachment rules are
//! applied repeatedly until some candidate is a known lemma.

use std::collections::HashMap;

use crate::lexicon::wordnet::WordNetPos;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules_for(pos: WordNetPos) -> &'static [(&'static str, &'static str)] {
    match pos {
        WordNetPos::Noun => NOUN_RULES,
        WordNetPos::Verb => VERB_RULES,
        WordNetPos::Adjective => ADJECTIVE_RULES,
        WordNetPos::Adverb => &[],
    }
}

fn apply_rules(forms: &[String], pos: WordNetPos) -> Vec<String> {
    let mut out = Vec::new();
    for form in forms {
        for (suffix, replacement) in rules_for(pos) {
            if let Some(stem) = form.strip_suffix(suffix) {
                out.push(format!("{stem}{replacement}"));
            }
        }
    }
    out
}

fn keep_known(forms: Vec<String>, is_known: &impl Fn(&str) -> bool) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for form in forms {
        if is_known(&form) && !kept.contains(&form) {
            kept.push(form);
        }
    }
    kept
}

/// Known base forms of `word` for one part of speech. `word` must already be normalised.
pub fn base_forms(
    word: &str,
    pos: WordNetPos,
    exceptions: &HashMap<String, Vec<String>>,
    is_known: impl Fn(&str) -> bool,
) -> Vec<String> {
    if let Some(bases) = exceptions.get(word) {
        let mut forms = vec![word.to_string()];
        forms.extend(bases.iter().cloned());
        return keep_known(forms, &is_known);
    }

    let mut forms = apply_rules(&[word.to_string()], pos);
    let mut first = vec![word.to_string()];
    first.extend(forms.iter().cloned());
    let found = keep_known(first, &is_known);
    if !found.is_empty() {
        return found;
    }

    // every rule except men -> man shortens the form, and no rule matches a -man form
    while !forms.is_empty() {
        forms = apply_rules(&forms, pos);
        let found = keep_known(forms.clone(), &is_known);
        if !found.is_empty() {
            return found;
        }
    }

    Vec::new()
}
