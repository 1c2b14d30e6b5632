//! Axum route handlers for the upload form and resume analysis.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use bytes::Bytes;
use tracing::{debug, info};

use crate::analysis::keywords::extract_job_keywords;
use crate::analysis::{analyze_resume, AnalysisReport};
use crate::errors::AppError;
use crate::extract::has_pdf_extension;
use crate::render::{render_index, render_result};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

// ────────────────────────────────────────────────────────────────────────────
// Form parsing
// ────────────────────────────────────────────────────────────────────────────

struct ResumeUpload {
    file_name: String,
    bytes: Bytes,
}

#[derive(Default)]
struct AnalyzeForm {
    resume: Option<ResumeUpload>,
    job_description: Option<String>,
}

impl AnalyzeForm {
    /// Reads every part. The first occurrence of a field wins; a `resume`
    /// part without a filename is a plain form field, not an upload.
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = AnalyzeForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid form data: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                RESUME_FIELD if form.resume.is_none() => {
                    let Some(file_name) = field.file_name().map(str::to_string) else {
                        continue;
                    };
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid form data: {e}")))?;
                    form.resume = Some(ResumeUpload { file_name, bytes });
                }
                JOB_DESCRIPTION_FIELD if form.job_description.is_none() => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid form data: {e}")))?;
                    form.job_description = Some(text);
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(render_index())
}

/// POST /analyze
///
/// Multipart `resume` (PDF) + `job_description`; responds with the HTML result page.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let report = analyze_upload(&state, multipart).await?;
    Ok(Html(render_result(&report)))
}

/// POST /api/v1/analyze
///
/// Same input and error contract as `/analyze`; responds with the report as JSON.
pub async fn handle_analyze_json(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = analyze_upload(&state, multipart).await?;
    Ok(Json(report))
}

/// Check order: resume present → job description present → keywords →
/// `.pdf` filename → extraction and matching.
async fn analyze_upload(state: &AppState, multipart: Multipart) -> Result<AnalysisReport, AppError> {
    let form = AnalyzeForm::read(multipart).await?;

    let resume = form.resume.ok_or(AppError::MissingUpload)?;
    let job_text = form.job_description.ok_or_else(|| {
        AppError::Validation(format!("Missing '{JOB_DESCRIPTION_FIELD}' field"))
    })?;
    debug!(job_description = %job_text, "Job description received");

    let job_keywords = extract_job_keywords(&job_text, state.nlp.as_ref());
    debug!(keywords = ?job_keywords.as_slice(), "Extracted job keywords");

    if resume.file_name.is_empty() || !has_pdf_extension(&resume.file_name) {
        return Err(AppError::NotPdf);
    }

    info!(
        "Analyzing resume '{}' ({} bytes) against {} keywords",
        resume.file_name,
        resume.bytes.len(),
        job_keywords.len()
    );

    let report = analyze_resume(
        resume.bytes,
        &job_keywords,
        state.extractor.as_ref(),
        state.nlp.as_ref(),
        state.lexicon.as_ref(),
    )
    .await?;

    info!(
        "Matched {}/{} keywords ({:.1}%)",
        report.matched_keywords.len(),
        report.job_keywords.len(),
        report.percentage
    );

    Ok(report)
}
