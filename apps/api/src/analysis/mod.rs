// Resume analysis: job keyword extraction and resume matching.
// Backends (NLP, lexicon, PDF) come in through trait objects; nothing here loads models.

pub mod keywords;
pub mod matcher;

use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::analysis::keywords::JobKeywordSet;
use crate::analysis::matcher::{extract_resume_skills, match_keywords};
use crate::extract::{ExtractError, TextExtractor};
use crate::lexicon::SynonymLexicon;
use crate::nlp::NlpPipeline;

const RESUME_PREVIEW_CHARS: usize = 500;

/// Everything the result page and the JSON endpoint report.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub job_keywords: Vec<String>,
    /// Sorted.
    pub resume_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
    /// Job keywords not matched, in keyword order.
    pub missing_keywords: Vec<String>,
    pub percentage: f64,
    pub lexicon_backend: String,
}

/// Matches already-extracted resume text against job keywords.
pub fn analyze_text(
    resume_text: &str,
    job_keywords: &JobKeywordSet,
    nlp: &dyn NlpPipeline,
    lexicon: &dyn SynonymLexicon,
) -> AnalysisReport {
    let preview: String = resume_text.chars().take(RESUME_PREVIEW_CHARS).collect();
    debug!(preview = %preview.to_lowercase(), "Resume text");

    let skills = extract_resume_skills(resume_text, job_keywords, nlp);
    debug!(skills = ?skills.to_sorted_vec(), "Extracted resume skills");

    let result = match_keywords(&skills, job_keywords, lexicon);
    debug!(
        matched = ?result.matched_keywords,
        percentage = result.percentage,
        "Keyword match complete"
    );

    let missing_keywords = job_keywords
        .iter()
        .filter(|k| !result.matched_keywords.iter().any(|m| m.as_str() == *k))
        .map(str::to_string)
        .collect();

    AnalysisReport {
        job_keywords: job_keywords.as_slice().to_vec(),
        resume_skills: skills.to_sorted_vec(),
        matched_keywords: result.matched_keywords,
        missing_keywords,
        percentage: result.percentage,
        lexicon_backend: lexicon.backend().to_string(),
    }
}

/// Extracts the resume text from `pdf` and matches it.
pub async fn analyze_resume(
    pdf: Bytes,
    job_keywords: &JobKeywordSet,
    extractor: &dyn TextExtractor,
    nlp: &dyn NlpPipeline,
    lexicon: &dyn SynonymLexicon,
) -> Result<AnalysisReport, ExtractError> {
    let resume_text = extractor.extract_text(pdf).await?;
    Ok(analyze_text(&resume_text, job_keywords, nlp, lexicon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::lexicon::BuiltinLexicon;
    use crate::nlp::entities::Gazetteer;
    use crate::nlp::RuleBasedPipeline;

    struct FixedText(&'static str);

    #[async_trait]
    impl TextExtractor for FixedText {
        async fn extract_text(&self, _bytes: Bytes) -> Result<String, ExtractError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl TextExtractor for Failing {
        async fn extract_text(&self, _bytes: Bytes) -> Result<String, ExtractError> {
            Err(ExtractError::Pdf("invalid file header".to_string()))
        }
    }

    #[test]
    fn test_report_partitions_keywords() {
        let nlp = RuleBasedPipeline::new(Gazetteer::builtin());
        let job: JobKeywordSet = ["python", "kafka", "sql"].into_iter().collect();
        let report = analyze_text("Python and SQL", &job, &nlp, &BuiltinLexicon::new());
        assert_eq!(report.matched_keywords, vec!["python", "sql"]);
        assert_eq!(report.missing_keywords, vec!["kafka"]);
        assert_eq!(report.job_keywords, vec!["python", "kafka", "sql"]);
        assert_eq!(report.lexicon_backend, "builtin");
    }

    #[tokio::test]
    async fn test_analyze_resume_uses_extractor() {
        let nlp = RuleBasedPipeline::new(Gazetteer::builtin());
        let job: JobKeywordSet = ["docker"].into_iter().collect();
        let report = analyze_resume(
            Bytes::new(),
            &job,
            &FixedText("Shipped services on Docker"),
            &nlp,
            &BuiltinLexicon::new(),
        )
        .await
        .unwrap();
        assert_eq!(report.percentage, 100.0);
    }

    #[tokio::test]
    async fn test_analyze_resume_propagates_extract_errors() {
        let nlp = RuleBasedPipeline::new(Gazetteer::builtin());
        let err = analyze_resume(
            Bytes::new(),
            &JobKeywordSet::new(),
            &Failing,
            &nlp,
            &BuiltinLexicon::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid file header");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let nlp = RuleBasedPipeline::new(Gazetteer::builtin());
        let job: JobKeywordSet = ["rust"].into_iter().collect();
        let report = analyze_text("rust", &job, &nlp, &BuiltinLexicon::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["matched_keywords"][0], "rust");
        assert_eq!(json["percentage"], 100.0);
    }
}
