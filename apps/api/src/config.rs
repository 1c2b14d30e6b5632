use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::nlp::NlpBackend;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub nlp_backend: NlpBackend,
    /// WordNet dict directory. `None` selects the builtin synonym table.
    pub wordnet_dir: Option<PathBuf>,
    /// Extra gazetteer terms (`LABEL<TAB>term` per line).
    pub gazetteer_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 5000,
            rust_log: "info".to_string(),
            nlp_backend: NlpBackend::RuleBased,
            wordnet_dir: None,
            gazetteer_path: None,
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: match non_empty("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: non_empty("RUST_LOG").unwrap_or(defaults.rust_log),
            nlp_backend: match non_empty("NLP_BACKEND") {
                Some(v) => v
                    .parse::<NlpBackend>()
                    .context("NLP_BACKEND must be rule-based or rust-bert")?,
                None => defaults.nlp_backend,
            },
            wordnet_dir: non_empty("WORDNET_DIR").map(PathBuf::from),
            gazetteer_path: non_empty("GAZETTEER_PATH").map(PathBuf::from),
            max_upload_bytes: match non_empty("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => defaults.max_upload_bytes,
            },
        })
    }
}
