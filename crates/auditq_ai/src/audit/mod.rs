//! Investigate/validate pipeline over the question corpus.
//!
//! Each question goes through two model passes: an investigation prompt built from the question,
//! then (only when the investigation reports a finding) a validation prompt built from that
//! report. Results are persisted per question so long runs can be resumed.

use auditq_core::corpus::{self, Question};
use auditq_core::domain::{OutcomeRecord, OutcomeStatus, RunManifest, RunSummary, Verdict};
use auditq_core::error::AppError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::guardrails::classify_response;
use crate::llm::Llm;
use crate::prompts::{question_format, validation_format};
use crate::store::RunStore;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditOptions {
    pub model: String,
    pub max_attempts: u32,
}

impl AuditOptions {
    pub fn new(model: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            model: model.into(),
            max_attempts,
        }
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Investigation {
    pub prompt_sha256: String,
    pub verdict: Verdict,
    pub response: String,
}

pub fn now_rfc3339_utc() -> Result<String, AppError> {
    OffsetDateTime::now_utc().format(&Rfc3339).map_err(|e| {
        AppError::new("RUN_TIME_FAILED", "Failed to format time").with_details(e.to_string())
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Call the model, retrying only errors marked retryable.
pub fn generate_with_retry(
    llm: &dyn Llm,
    opts: &AuditOptions,
    prompt: &str,
) -> Result<String, AppError> {
    let attempts = opts.attempts();
    let mut attempt = 1;
    loop {
        match llm.generate(&opts.model, prompt) {
            Ok(text) => return Ok(text),
            Err(e) if e.retryable && attempt < attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    code = %e.code,
                    "model call failed; retrying"
                );
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn investigate(
    llm: &dyn Llm,
    opts: &AuditOptions,
    question: &Question,
) -> Result<Investigation, AppError> {
    let prompt = question_format(question.text);
    tracing::debug!(index = question.index, prompt_len = prompt.len(), "investigation prompt built");
    let response = generate_with_retry(llm, opts, &prompt)?;
    let verdict = classify_response(&response)?;
    Ok(Investigation {
        prompt_sha256: sha256_hex(prompt.as_bytes()),
        verdict,
        response,
    })
}

/// Ask the model to judge `report`. Returns the model's raw answer with its verdict.
pub fn validate_report(
    llm: &dyn Llm,
    opts: &AuditOptions,
    report: &str,
) -> Result<(Verdict, String), AppError> {
    let prompt = validation_format(report);
    tracing::debug!(prompt_len = prompt.len(), "validation prompt built");
    let response = generate_with_retry(llm, opts, &prompt)?;
    let verdict = classify_response(&response)?;
    Ok((verdict, response))
}

pub fn audit_question(
    llm: &dyn Llm,
    opts: &AuditOptions,
    question: &Question,
    created_at: String,
) -> Result<OutcomeRecord, AppError> {
    let inv = investigate(llm, opts, question)?;

    let (status, validation_response) = match inv.verdict {
        Verdict::NoVulnerability => (OutcomeStatus::NoVulnerability, None),
        Verdict::Finding => {
            let (verdict, response) = validate_report(llm, opts, &inv.response)?;
            let status = match verdict {
                Verdict::Finding => OutcomeStatus::Confirmed,
                Verdict::NoVulnerability => OutcomeStatus::Rejected,
            };
            (status, Some(response))
        }
    };

    Ok(OutcomeRecord {
        question_index: question.index,
        question_id: question.id.clone(),
        question: question.text.to_string(),
        model: opts.model.clone(),
        status,
        prompt_sha256: inv.prompt_sha256,
        investigation_response: Some(inv.response),
        validation_response,
        error: None,
        created_at,
    })
}

fn errored_outcome(
    opts: &AuditOptions,
    question: &Question,
    err: &AppError,
    created_at: String,
) -> OutcomeRecord {
    OutcomeRecord {
        question_index: question.index,
        question_id: question.id.clone(),
        question: question.text.to_string(),
        model: opts.model.clone(),
        status: OutcomeStatus::Errored,
        prompt_sha256: sha256_hex(question_format(question.text).as_bytes()),
        investigation_response: None,
        validation_response: None,
        error: Some(err.render()),
        created_at,
    }
}

/// Run the pipeline over `questions` in order, persisting every outcome to `store`.
///
/// A failing question is stored as `Errored` and the run moves on; only store and clock failures
/// abort. With `resume`, questions that already have a stored non-errored outcome are skipped;
/// errored ones are attempted again and their record is overwritten.
pub fn run_audit<C>(
    llm: &dyn Llm,
    opts: &AuditOptions,
    store: &RunStore,
    questions: &[Question],
    resume: bool,
    clock: C,
) -> Result<RunSummary, AppError>
where
    C: Fn() -> Result<String, AppError>,
{
    let fingerprint = corpus::fingerprint();
    store.check_fingerprint(&fingerprint)?;
    if store.read_manifest()?.is_none() {
        store.write_manifest(&RunManifest {
            corpus_fingerprint: fingerprint,
            question_count: corpus::len(),
            model: opts.model.clone(),
            created_at: clock()?,
        })?;
    }

    let mut summary = RunSummary::default();
    for q in questions {
        if resume && store.has_final_outcome(&q.id)? {
            tracing::debug!(index = q.index, id = %q.id, "already answered; skipping");
            summary.skipped += 1;
            continue;
        }

        let outcome = match audit_question(llm, opts, q, clock()?) {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!(index = q.index, id = %q.id, error = %e, "question failed");
                errored_outcome(opts, q, &e, clock()?)
            }
        };
        tracing::info!(index = q.index, id = %q.id, status = outcome.status.as_str(), "question done");
        store.put_outcome(&outcome)?;
        summary.record(outcome.status);
    }
    Ok(summary)
}
