//! WordNet dict-directory reader.
//!
//! Loads `index.{noun,verb,adj,adv}`, `data.{noun,verb,adj,adv}` and the
//! optional `{noun,verb,adj,adv}.exc` exception lists fully into memory.
//! Synsets are keyed by the offset field written on each data line.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;

use crate::lexicon::morphy::base_forms;
use crate::lexicon::{normalize_lemma, SynonymLexicon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordNetPos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordNetPos {
    pub const ALL: [WordNetPos; 4] = [
        WordNetPos::Noun,
        WordNetPos::Verb,
        WordNetPos::Adjective,
        WordNetPos::Adverb,
    ];

    fn file_suffix(self) -> &'static str {
        match self {
            WordNetPos::Noun => "noun",
            WordNetPos::Verb => "verb",
            WordNetPos::Adjective => "adj",
            WordNetPos::Adverb => "adv",
        }
    }
}

#[derive(Debug, Default)]
struct PartIndex {
    lemmas: HashMap<String, Vec<u64>>,
    synsets: HashMap<u64, Vec<String>>,
    exceptions: HashMap<String, Vec<String>>,
}

pub struct WordNetLexicon {
    parts: Vec<(WordNetPos, PartIndex)>,
}

impl WordNetLexicon {
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("WordNet directory '{}' does not exist", dir.display());
        }

        let mut parts = Vec::with_capacity(WordNetPos::ALL.len());
        for pos in WordNetPos::ALL {
            let suffix = pos.file_suffix();
            let index = read_file(&dir.join(format!("index.{suffix}")))?;
            let data = read_file(&dir.join(format!("data.{suffix}")))?;
            let exc_path = dir.join(format!("{suffix}.exc"));
            let exceptions = if exc_path.is_file() {
                parse_exceptions(&read_file(&exc_path)?)
            } else {
                HashMap::new()
            };

            parts.push((
                pos,
                PartIndex {
                    lemmas: parse_index(&index).with_context(|| format!("index.{suffix}"))?,
                    synsets: parse_data(&data).with_context(|| format!("data.{suffix}"))?,
                    exceptions,
                },
            ));
        }

        let lexicon = Self { parts };
        info!(
            "WordNet loaded from {} ({} synsets)",
            dir.display(),
            lexicon.synset_count()
        );
        Ok(lexicon)
    }

    pub fn synset_count(&self) -> usize {
        self.parts.iter().map(|(_, p)| p.synsets.len()).sum()
    }
}

impl SynonymLexicon for WordNetLexicon {
    fn synonyms(&self, word: &str) -> BTreeSet<String> {
        let word = word.trim().to_lowercase().replace(' ', "_");
        let mut synonyms = BTreeSet::new();

        for (pos, part) in &self.parts {
            let forms = base_forms(&word, *pos, &part.exceptions, |f| {
                part.lemmas.contains_key(f)
            });
            for form in forms {
                let offsets = part.lemmas.get(&form).map(Vec::as_slice).unwrap_or_default();
                for offset in offsets {
                    if let Some(names) = part.synsets.get(offset) {
                        synonyms.extend(names.iter().map(|n| normalize_lemma(n)));
                    }
                }
            }
        }

        synonyms
    }

    fn backend(&self) -> &'static str {
        "wordnet"
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read WordNet file '{}'", path.display()))
}

/// License header lines in WordNet files start with a space.
fn is_header(line: &str) -> bool {
    line.starts_with(' ') || line.trim().is_empty()
}

/// `lemma pos synset_cnt p_cnt [ptr...] sense_cnt tagsense_cnt offset...`
fn parse_index(contents: &str) -> Result<HashMap<String, Vec<u64>>> {
    let mut lemmas = HashMap::new();
    for (line_no, line) in contents.lines().enumerate() {
        if is_header(line) {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let malformed = || anyhow!("line {}: malformed index entry", line_no + 1);
        let synset_cnt: usize = fields
            .get(2)
            .and_then(|f| f.parse().ok())
            .ok_or_else(malformed)?;
        if synset_cnt == 0 || fields.len() < 4 + synset_cnt {
            return Err(malformed());
        }
        let offsets = fields[fields.len() - synset_cnt..]
            .iter()
            .map(|f| f.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;
        lemmas.insert(fields[0].to_lowercase(), offsets);
    }
    Ok(lemmas)
}

/// `offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] ... | gloss`
fn parse_data(contents: &str) -> Result<HashMap<u64, Vec<String>>> {
    let mut synsets = HashMap::new();
    for (line_no, line) in contents.lines().enumerate() {
        if is_header(line) {
            continue;
        }
        let head = line.split('|').next().unwrap_or_default();
        let fields: Vec<&str> = head.split_whitespace().collect();
        let malformed = || anyhow!("line {}: malformed data entry", line_no + 1);

        let offset: u64 = fields
            .first()
            .and_then(|f| f.parse().ok())
            .ok_or_else(malformed)?;
        let w_cnt = fields
            .get(3)
            .and_then(|f| usize::from_str_radix(f, 16).ok())
            .ok_or_else(malformed)?;
        if fields.len() < 4 + 2 * w_cnt {
            return Err(malformed());
        }

        let words = (0..w_cnt)
            .map(|i| strip_syntactic_marker(fields[4 + 2 * i]).to_string())
            .collect();
        synsets.insert(offset, words);
    }
    Ok(synsets)
}

/// `inflected base [base...]`
fn parse_exceptions(contents: &str) -> HashMap<String, Vec<String>> {
    contents
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let inflected = fields.next()?;
            let bases: Vec<String> = fields.map(str::to_string).collect();
            (!bases.is_empty()).then(|| (inflected.to_string(), bases))
        })
        .collect()
}

/// Adjective lemmas may carry `(a)`, `(p)` or `(ip)`.
fn strip_syntactic_marker(word: &str) -> &str {
    match word.find('(') {
        Some(idx) => &word[..idx],
        None => word,
    }
}
