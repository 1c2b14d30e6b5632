//! Gazetteer entity recognizer.
//!
//! Terms are stored as lower-cased token sequences. Recognition scans left to
//! right taking the longest term that starts at each position; spans never overlap.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::nlp::tokenizer::{tokenize, RawToken};
use crate::nlp::{Entity, EntityLabel};

const BUILTIN_SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "rust", "golang", "c++", "c#", "ruby", "php",
    "scala", "kotlin", "swift", "sql", "nosql", "html", "css", "matlab", "perl", "bash",
    "graphql", "machine learning", "deep learning", "data science", "data analysis",
    "natural language processing", "nlp", "computer vision", "devops", "ci/cd", "agile",
    "scrum", "microservices", "cloud computing", "statistics", "etl", "data engineering",
];

const BUILTIN_PRODUCTS: &[&str] = &[
    "docker", "kubernetes", "terraform", "ansible", "jenkins", "git", "github", "gitlab", "jira",
    "linux", "react", "angular", "vue", "django", "flask", "spring boot", "node.js", "pandas",
    "numpy", "tensorflow", "pytorch", "scikit-learn", "postgresql", "mysql", "mongodb", "redis",
    "kafka", "spark", "hadoop", "elasticsearch", "excel", "tableau", "power bi", "salesforce",
    "azure", "gcp", "snowflake", "airflow", "aws",
];

const BUILTIN_ORGS: &[&str] = &[
    "google", "microsoft", "amazon", "amazon web services", "apple", "meta", "facebook", "ibm",
    "oracle", "netflix", "uber", "airbnb", "intel", "nvidia", "deloitte", "accenture",
    "mckinsey",
];

const BUILTIN_LOCATIONS: &[&str] = &[
    "new york", "london", "san francisco", "seattle", "berlin", "bangalore", "toronto",
];

#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    terms: HashMap<Vec<String>, EntityLabel>,
    max_len: usize,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gazetteer pre-filled with common technology, product, organization and place names.
    pub fn builtin() -> Self {
        let mut gazetteer = Self::new();
        let groups: [(&[&str], EntityLabel); 4] = [
            (BUILTIN_SKILLS, EntityLabel::Skill),
            (BUILTIN_PRODUCTS, EntityLabel::Product),
            (BUILTIN_ORGS, EntityLabel::Org),
            (BUILTIN_LOCATIONS, EntityLabel::Location),
        ];
        for (terms, label) in groups {
            for term in terms {
                gazetteer.insert(term, label);
            }
        }
        gazetteer
    }

    /// Adds a term. Returns false if the term has no tokens.
    pub fn insert(&mut self, term: &str, label: EntityLabel) -> bool {
        let key: Vec<String> = tokenize(term)
            .into_iter()
            .map(|t| t.text.to_lowercase())
            .collect();
        if key.is_empty() {
            return false;
        }
        self.max_len = self.max_len.max(key.len());
        self.terms.insert(key, label);
        true
    }

    /// Parses `LABEL<TAB>term` lines. Blank lines and `#` comments are skipped.
    /// Returns the number of terms added.
    pub fn extend_from_str(&mut self, contents: &str) -> Result<usize> {
        let mut added = 0;
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((label, term)) = line.split_once('\t') else {
                bail!("gazetteer line {}: expected LABEL<TAB>term", line_no + 1);
            };
            if self.insert(term.trim(), EntityLabel::parse(label)) {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read gazetteer file '{}'", path.display()))?;
        self.extend_from_str(&contents)
            .with_context(|| format!("Invalid gazetteer file '{}'", path.display()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Finds entity spans in `tokens`. `text` must be the string the tokens were cut from.
    pub fn recognize(&self, text: &str, tokens: &[RawToken<'_>]) -> Vec<Entity> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let longest = self.max_len.min(tokens.len() - i);
            let found = (1..=longest)
                .rev()
                .find_map(|len| self.terms.get(&lowered[i..i + len]).map(|label| (len, *label)));

            match found {
                Some((len, label)) => {
                    let end = i + len;
                    entities.push(Entity {
                        text: text[tokens[i].start..tokens[end - 1].end].to_string(),
                        label,
                        start_token: i,
                        end_token: end,
                    });
                    i = end;
                }
                None => i += 1,
            }
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(gazetteer: &Gazetteer, text: &str) -> Vec<(String, EntityLabel)> {
        let tokens = tokenize(text);
        gazetteer
            .recognize(text, &tokens)
            .into_iter()
            .map(|e| (e.text, e.label))
            .collect()
    }

    #[test]
    fn test_builtin_recognizes_skills_case_insensitively() {
        let g = Gazetteer::builtin();
        let found = recognize(&g, "Expert in Python and SQL");
        assert_eq!(
            found,
            vec![
                ("Python".to_string(), EntityLabel::Skill),
                ("SQL".to_string(), EntityLabel::Skill)
            ]
        );
    }

    #[test]
    fn test_longest_match_wins() {
        let g = Gazetteer::builtin();
        let found = recognize(&g, "worked at amazon web services");
        assert_eq!(
            found,
            vec![("amazon web services".to_string(), EntityLabel::Org)]
        );
    }

    #[test]
    fn test_multi_token_terms_with_punctuation() {
        let g = Gazetteer::builtin();
        let found = recognize(&g, "built ci/cd pipelines with node.js");
        assert_eq!(
            found,
            vec![
                ("ci/cd".to_string(), EntityLabel::Skill),
                ("node.js".to_string(), EntityLabel::Product)
            ]
        );
    }

    #[test]
    fn test_entity_token_span() {
        let g = Gazetteer::builtin();
        let text = "i know machine learning well";
        let tokens = tokenize(text);
        let entities = g.recognize(text, &tokens);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].start_token, 2);
        assert_eq!(entities[0].end_token, 4);
    }

    #[test]
    fn test_extend_from_str_parses_labels_and_skips_comments() {
        let mut g = Gazetteer::new();
        let added = g
            .extend_from_str("# custom terms\n\nSKILL\tsolidity\nORG\tAcme Corp\n")
            .unwrap();
        assert_eq!(added, 2);
        let found = recognize(&g, "solidity at acme corp");
        assert_eq!(
            found,
            vec![
                ("solidity".to_string(), EntityLabel::Skill),
                ("acme corp".to_string(), EntityLabel::Org)
            ]
        );
    }

    #[test]
    fn test_extend_from_str_rejects_malformed_line() {
        let mut g = Gazetteer::new();
        let err = g.extend_from_str("SKILL solidity").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_extend_from_file_reads_terms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.tsv");
        std::fs::write(&path, "PRODUCT\tFigma\n").unwrap();
        let mut g = Gazetteer::new();
        assert_eq!(g.extend_from_file(&path).unwrap(), 1);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_empty_gazetteer_finds_nothing() {
        let g = Gazetteer::new();
        assert_eq!(g.len(), 0);
        assert!(recognize(&g, "python").is_empty());
    }
}
