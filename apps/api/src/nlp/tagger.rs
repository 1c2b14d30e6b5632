//! Rule-based part-of-speech tagger.
//!
//! Rules apply in order: punctuation and numbers, closed-class lexicon,
//! adjective lexicon, verb context, suffixes, capitalization, then noun
//! evidence (nominal suffix, plural, or a determiner/adjective/adposition
//! before it). A word with no evidence either way is tagged `Other`, and
//! becomes NOUN only when it modifies a following noun.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::nlp::tokenizer::{is_numeric, is_punctuation, RawToken};
use crate::nlp::PartOfSpeech;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "she", "her", "hers", "it", "its", "we", "us", "our", "ours", "they", "them", "their",
    "theirs", "who", "whom", "whose", "what", "which", "someone", "anyone", "everyone",
    "something", "anything", "everything", "nothing",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "over", "under", "within", "without", "across", "among", "via", "per", "including", "like",
    "than", "toward", "towards", "upon", "throughout", "around", "behind", "beyond", "near",
];

const COORD_CONJ: &[&str] = &["and", "or", "but", "nor", "yet", "plus", "&"];

const SUBORD_CONJ: &[&str] = &[
    "if", "because", "while", "although", "though", "since", "unless", "whether", "as", "once",
    "until", "so", "whereas",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

const PARTICLES: &[&str] = &["not", "n't", "'s"];

const ADVERBS: &[&str] = &[
    "very", "also", "too", "just", "only", "well", "really", "quite", "often", "always", "never",
    "sometimes", "already", "still", "even", "here", "there", "now", "then", "again", "ever",
    "soon", "rather", "almost", "how", "when", "where", "why",
];

const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they", "he", "she"];

/// Words that read as verbs after a subject, modal or `to`, and as nouns elsewhere.
const COMMON_VERBS: &[&str] = &[
    "build", "develop", "design", "manage", "lead", "work", "use", "create", "write",
    "maintain", "implement", "deploy", "test", "support", "help", "join", "seek", "need",
    "want", "require", "make", "drive", "own", "ensure", "collaborate", "deliver", "improve",
    "apply", "know", "get", "take", "bring", "grow", "learn", "understand", "communicate",
    "mentor", "analyze", "optimize", "scale", "ship", "launch", "run", "solve", "contribute",
    "thrive", "love", "enjoy", "hire", "offer", "provide", "look", "partner",
];

const ADJECTIVES: &[&str] = &[
    "strong", "good", "great", "excellent", "outstanding", "exceptional", "senior", "junior",
    "remote", "hybrid", "motivated", "friendly", "new", "large", "small", "big", "high", "low",
    "solid", "proven", "deep", "fast", "quick", "best", "better", "key", "main", "major",
    "minor", "full", "mature", "various", "multiple", "several", "many", "other", "same",
    "different", "modern", "complex", "simple", "secure", "robust", "reliable", "clear",
    "effective", "hard", "open", "flexible", "competitive", "dynamic", "passionate", "eager",
    "keen", "oriented", "familiar", "comfortable", "relevant", "preferred", "nice",
    "ideal", "successful", "talented", "skilled", "experienced", "independent", "efficient",
];

/// `-ing` words that read as nouns even after a preposition.
const ING_NOUNS: &[&str] = &[
    "engineering", "marketing", "accounting", "computing", "networking", "programming",
    "banking", "manufacturing", "consulting", "budgeting", "auditing",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism", "ist", "eer", "er",
    "or", "ure", "ogy", "ics", "ware", "dom", "hood", "ery", "age",
];

const POSSESSIVES: &[&str] = &["my", "your", "our", "their", "his", "her", "its"];

/// `-ly` words that are not adverbs.
const LY_NOUNS: &[&str] = &["family", "supply", "assembly", "reply", "anomaly", "italy", "july"];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical"];

static CLOSED_CLASS: Lazy<HashMap<&'static str, PartOfSpeech>> = Lazy::new(|| {
    let groups: [(&[&str], PartOfSpeech); 8] = [
        (DETERMINERS, PartOfSpeech::Determiner),
        (PRONOUNS, PartOfSpeech::Pronoun),
        (ADPOSITIONS, PartOfSpeech::Adposition),
        (COORD_CONJ, PartOfSpeech::CoordConj),
        (SUBORD_CONJ, PartOfSpeech::SubordConj),
        (AUXILIARIES, PartOfSpeech::Aux),
        (PARTICLES, PartOfSpeech::Particle),
        (ADVERBS, PartOfSpeech::Adverb),
    ];
    let mut map = HashMap::new();
    for (words, pos) in groups {
        for word in words {
            // first group wins for words listed twice
            map.entry(*word).or_insert(pos);
        }
    }
    map
});

/// Tags every token. The result has the same length as `tokens`.
pub fn tag(tokens: &[RawToken<'_>]) -> Vec<PartOfSpeech> {
    let mut tags: Vec<PartOfSpeech> = Vec::with_capacity(tokens.len());
    let mut prev_lower: Option<String> = None;

    for token in tokens {
        let lower = token.text.to_lowercase();
        let prev_tag = tags.last().copied();
        let pos = tag_one(token, &lower, prev_tag, prev_lower.as_deref());
        tags.push(pos);
        prev_lower = Some(lower);
    }

    // noun modifiers: "backend services", "data pipelines"
    for i in (0..tags.len().saturating_sub(1)).rev() {
        if tags[i] == PartOfSpeech::Other && tags[i + 1].is_nominal() {
            tags[i] = PartOfSpeech::Noun;
        }
    }

    tags
}

fn tag_one(
    token: &RawToken<'_>,
    lower: &str,
    prev_tag: Option<PartOfSpeech>,
    prev_lower: Option<&str>,
) -> PartOfSpeech {
    if is_punctuation(token.text) && !COORD_CONJ.contains(&lower) {
        return PartOfSpeech::Punctuation;
    }
    if is_numeric(token.text) {
        return PartOfSpeech::Numeral;
    }
    if let Some(pos) = CLOSED_CLASS.get(lower) {
        return *pos;
    }
    if ADJECTIVES.contains(&lower) {
        return PartOfSpeech::Adjective;
    }

    let after_possessive = prev_lower.is_some_and(|p| POSSESSIVES.contains(&p));
    let verb_context = (token.sentence_start && prev_tag.is_none())
        || prev_lower.is_some_and(|p| p == "to" || MODALS.contains(&p) || SUBJECT_PRONOUNS.contains(&p))
        || prev_tag == Some(PartOfSpeech::Adverb);
    let modifier_context = after_possessive
        || matches!(
            prev_tag,
            Some(PartOfSpeech::Determiner) | Some(PartOfSpeech::Adjective)
        );
    let nominal_context = modifier_context
        || matches!(
            prev_tag,
            Some(PartOfSpeech::Adposition) | Some(PartOfSpeech::Numeral)
        );

    if COMMON_VERBS.contains(&lower) {
        return if verb_context {
            PartOfSpeech::Verb
        } else {
            PartOfSpeech::Noun
        };
    }

    if lower.len() > 4 && lower.ends_with("ly") && !LY_NOUNS.contains(&lower) {
        return PartOfSpeech::Adverb;
    }
    if lower.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PartOfSpeech::Adjective;
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return if modifier_context || ING_NOUNS.contains(&lower) {
            PartOfSpeech::Noun
        } else {
            PartOfSpeech::Verb
        };
    }
    if lower.len() > 4 && lower.ends_with("ed") {
        return if modifier_context {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Verb
        };
    }

    let capitalized = token.text.chars().next().is_some_and(char::is_uppercase);
    if capitalized && !token.sentence_start {
        return PartOfSpeech::ProperNoun;
    }

    if has_noun_suffix(lower) || is_plural(lower) || nominal_context {
        return PartOfSpeech::Noun;
    }

    PartOfSpeech::Other
}

fn has_noun_suffix(lower: &str) -> bool {
    NOUN_SUFFIXES
        .iter()
        .any(|s| lower.len() > s.len() + 2 && lower.ends_with(s))
}

fn is_plural(lower: &str) -> bool {
    lower.len() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::tokenize;

    fn tags_of(text: &str) -> Vec<(String, PartOfSpeech)> {
        let tokens = tokenize(text);
        let tags = tag(&tokens);
        tokens
            .iter()
            .zip(tags)
            .map(|(t, p)| (t.text.to_string(), p))
            .collect()
    }

    fn tag_for(text: &str, word: &str) -> PartOfSpeech {
        tags_of(text)
            .into_iter()
            .find(|(t, _)| t == word)
            .map(|(_, p)| p)
            .unwrap()
    }

    #[test]
    fn test_job_description_nouns() {
        let text = "looking for a python developer with sql experience";
        assert_eq!(tag_for(text, "looking"), PartOfSpeech::Verb);
        assert_eq!(tag_for(text, "for"), PartOfSpeech::Adposition);
        assert_eq!(tag_for(text, "a"), PartOfSpeech::Determiner);
        assert_eq!(tag_for(text, "python"), PartOfSpeech::Noun);
        assert_eq!(tag_for(text, "developer"), PartOfSpeech::Noun);
        assert_eq!(tag_for(text, "sql"), PartOfSpeech::Noun);
        assert_eq!(tag_for(text, "experience"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_numbers_and_punctuation() {
        let text = "5 years, 3.5 months.";
        assert_eq!(tag_for(text, "5"), PartOfSpeech::Numeral);
        assert_eq!(tag_for(text, "3.5"), PartOfSpeech::Numeral);
        assert_eq!(tag_for(text, ","), PartOfSpeech::Punctuation);
    }

    #[test]
    fn test_common_verb_after_modal_is_verb() {
        assert_eq!(tag_for("you will design systems", "design"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_common_verb_after_adjective_is_noun() {
        assert_eq!(
            tag_for("strong system design skills", "design"),
            PartOfSpeech::Noun
        );
    }

    #[test]
    fn test_gerund_after_preposition_is_verb() {
        assert_eq!(
            tag_for("responsible for designing scalable services", "designing"),
            PartOfSpeech::Verb
        );
    }

    #[test]
    fn test_gerund_after_determiner_is_noun() {
        assert_eq!(tag_for("the testing of services", "testing"), PartOfSpeech::Noun);
        assert_eq!(tag_for("degree in engineering", "engineering"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_adjective_lexicon() {
        let text = "a strong and senior engineer, remote";
        assert_eq!(tag_for(text, "strong"), PartOfSpeech::Adjective);
        assert_eq!(tag_for(text, "senior"), PartOfSpeech::Adjective);
        assert_eq!(tag_for(text, "remote"), PartOfSpeech::Adjective);
        assert_eq!(tag_for(text, "engineer"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_unknown_word_without_evidence_is_other() {
        assert_eq!(tag_for("please respond quickly", "respond"), PartOfSpeech::Other);
    }

    #[test]
    fn test_unknown_word_before_noun_is_noun() {
        assert_eq!(tag_for("scalable backend services", "backend"), PartOfSpeech::Noun);
        assert_eq!(tag_for("backend services", "backend"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag_for("we quickly shipped", "quickly"), PartOfSpeech::Adverb);
        assert_eq!(tag_for("a creative person", "creative"), PartOfSpeech::Adjective);
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper_noun() {
        assert_eq!(tag_for("I worked at Stripe", "Stripe"), PartOfSpeech::ProperNoun);
    }

    #[test]
    fn test_capitalized_sentence_start_is_not_proper_noun() {
        assert_eq!(tag_for("Engineers wanted", "Engineers"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_output_length_matches_input() {
        let tokens = tokenize("a b c, d.");
        assert_eq!(tag(&tokens).len(), tokens.len());
    }
}
