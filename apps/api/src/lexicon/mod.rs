//! Synonym lexicon: pluggable backends behind `SynonymLexicon`.
//!
//! `WordNetLexicon` reads a WordNet dict directory; `BuiltinLexicon` is the
//! fallback when none is configured. Selected once at startup.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

pub mod builtin;
pub mod morphy;
pub mod wordnet;

pub use builtin::BuiltinLexicon;
pub use wordnet::WordNetLexicon;

/// Synonym lookup. Returned strings are lower-cased with underscores replaced by spaces.
pub trait SynonymLexicon: Send + Sync {
    fn synonyms(&self, word: &str) -> BTreeSet<String>;

    /// Short backend name for logs and reports.
    fn backend(&self) -> &'static str;
}

/// Opens WordNet from `wordnet_dir` when given, otherwise the builtin table.
pub fn load_lexicon(wordnet_dir: Option<&Path>) -> Result<Arc<dyn SynonymLexicon>> {
    match wordnet_dir {
        Some(dir) => Ok(Arc::new(WordNetLexicon::open(dir)?)),
        None => Ok(Arc::new(BuiltinLexicon::new())),
    }
}

/// Lemma name → display form: lower-case, `_` → space.
pub(crate) fn normalize_lemma(name: &str) -> String {
    name.to_lowercase().replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_lexicon_without_dir_is_builtin() {
        let lexicon = load_lexicon(None).unwrap();
        assert_eq!(lexicon.backend(), "builtin");
    }

    #[test]
    fn test_load_lexicon_with_missing_dir_fails() {
        assert!(load_lexicon(Some(Path::new("/nonexistent/wordnet"))).is_err());
    }

    #[test]
    fn test_normalize_lemma() {
        assert_eq!(normalize_lemma("Software_Engineer"), "software engineer");
    }
}
