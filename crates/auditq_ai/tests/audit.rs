use std::cell::RefCell;
use std::collections::VecDeque;

use auditq_ai::audit::{audit_question, generate_with_retry, investigate, run_audit, AuditOptions};
use auditq_ai::llm::Llm;
use auditq_ai::prompts::NO_VULNERABILITY_MARKER;
use auditq_ai::store::RunStore;
use auditq_core::corpus;
use auditq_core::domain::{OutcomeStatus, Verdict};
use auditq_core::error::AppError;

/// Replays scripted results in order and records every prompt it was given.
struct ScriptedLlm {
    script: RefCell<VecDeque<Result<String, AppError>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedLlm {
    fn new(script: Vec<Result<String, AppError>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl Llm for ScriptedLlm {
    fn generate(&self, _model: &str, prompt: &str) -> Result<String, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::new("MOCK_EXHAUSTED", "no scripted response left")))
    }
}

const FINDING: &str = "## Title\nNetting bypass\n\n## Summary\nZero-sum check skipped.";

fn opts() -> AuditOptions {
    AuditOptions::new("mock", 2)
}

fn fixed_clock() -> Result<String, AppError> {
    Ok("2026-10-16T00:00:00Z".to_string())
}

fn transient() -> AppError {
    AppError::new("AI_GENERATE_FAILED", "connection reset").with_retryable(true)
}

#[test]
fn investigation_prompt_carries_the_question() {
    let q = corpus::get(3).expect("q");
    let llm = ScriptedLlm::new(vec![Ok(NO_VULNERABILITY_MARKER.to_string())]);
    let inv = investigate(&llm, &opts(), &q).expect("investigate");
    assert_eq!(inv.verdict, Verdict::NoVulnerability);
    assert_eq!(inv.prompt_sha256.len(), 64);
    assert!(llm.prompts.borrow()[0].contains(q.text));
}

#[test]
fn no_vulnerability_skips_validation() {
    let q = corpus::get(0).expect("q");
    let llm = ScriptedLlm::new(vec![Ok(NO_VULNERABILITY_MARKER.to_string())]);
    let rec = audit_question(&llm, &opts(), &q, "t".to_string()).expect("audit");
    assert_eq!(rec.status, OutcomeStatus::NoVulnerability);
    assert_eq!(rec.validation_response, None);
    assert_eq!(llm.calls(), 1);
}

#[test]
fn finding_is_validated_with_its_own_report() {
    let q = corpus::get(1).expect("q");
    let llm = ScriptedLlm::new(vec![Ok(FINDING.to_string()), Ok(FINDING.to_string())]);
    let rec = audit_question(&llm, &opts(), &q, "t".to_string()).expect("audit");
    assert_eq!(rec.status, OutcomeStatus::Confirmed);
    assert_eq!(llm.calls(), 2);
    let second = llm.prompts.borrow()[1].clone();
    assert!(second.contains("**SECURITY CLAIM TO VALIDATE:**\n## Title\nNetting bypass"));
}

#[test]
fn finding_rejected_by_validation() {
    let q = corpus::get(1).expect("q");
    let llm = ScriptedLlm::new(vec![
        Ok(FINDING.to_string()),
        Ok(format!("`{NO_VULNERABILITY_MARKER} `")),
    ]);
    let rec = audit_question(&llm, &opts(), &q, "t".to_string()).expect("audit");
    assert_eq!(rec.status, OutcomeStatus::Rejected);
    assert_eq!(rec.investigation_response.as_deref(), Some(FINDING));
    assert!(rec.validation_response.is_some());
}

#[test]
fn retries_only_retryable_errors() {
    let llm = ScriptedLlm::new(vec![Err(transient()), Ok("ok".to_string())]);
    assert_eq!(generate_with_retry(&llm, &opts(), "p").expect("retry"), "ok");
    assert_eq!(llm.calls(), 2);

    let llm = ScriptedLlm::new(vec![
        Err(AppError::new("AI_GENERATE_FAILED", "bad request")),
        Ok("never".to_string()),
    ]);
    let err = generate_with_retry(&llm, &opts(), "p").expect_err("fatal");
    assert_eq!(err.message, "bad request");
    assert_eq!(llm.calls(), 1);
}

#[test]
fn retry_budget_is_bounded() {
    let llm = ScriptedLlm::new(vec![Err(transient()), Err(transient()), Ok("late".to_string())]);
    let err = generate_with_retry(&llm, &opts(), "p").expect_err("exhausted");
    assert!(err.retryable);
    assert_eq!(llm.calls(), 2);

    // Zero attempts still means one call.
    let llm = ScriptedLlm::new(vec![Ok("once".to_string())]);
    let zero = AuditOptions::new("mock", 0);
    assert_eq!(generate_with_retry(&llm, &zero, "p").expect("once"), "once");
}

#[test]
fn run_records_every_question_and_continues_after_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().to_path_buf());
    let qs = corpus::select(0, Some(3)).expect("select");

    let llm = ScriptedLlm::new(vec![
        Ok(NO_VULNERABILITY_MARKER.to_string()),
        Ok("rambling without structure".to_string()),
        Ok(FINDING.to_string()),
        Ok(FINDING.to_string()),
    ]);
    let summary = run_audit(&llm, &opts(), &store, &qs, false, fixed_clock).expect("run");
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.no_vulnerability, 1);
    assert_eq!(summary.errored, 1);
    assert_eq!(summary.confirmed, 1);

    let stored = store.list_outcomes().expect("list");
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[1].status, OutcomeStatus::Errored);
    assert!(stored[1]
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("AI_RESPONSE_UNSTRUCTURED"));

    let manifest = store.read_manifest().expect("read").expect("manifest");
    assert_eq!(manifest.corpus_fingerprint, corpus::fingerprint());
    assert_eq!(manifest.question_count, corpus::len());
}

#[test]
fn resume_skips_answered_questions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().to_path_buf());
    let qs = corpus::select(10, Some(12)).expect("select");

    let first = ScriptedLlm::new(vec![Ok(NO_VULNERABILITY_MARKER.to_string())]);
    run_audit(&first, &opts(), &store, &qs[..1], false, fixed_clock).expect("first");

    let second = ScriptedLlm::new(vec![Ok(NO_VULNERABILITY_MARKER.to_string())]);
    let summary = run_audit(&second, &opts(), &store, &qs, true, fixed_clock).expect("resume");
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.processed, 1);
    assert_eq!(second.calls(), 1);
    assert!(second.prompts.borrow()[0].contains(qs[1].text));
}

#[test]
fn run_refuses_store_from_another_corpus() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().to_path_buf());
    store
        .write_manifest(&auditq_core::domain::RunManifest {
            corpus_fingerprint: "deadbeef".to_string(),
            question_count: 1,
            model: "mock".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        })
        .expect("manifest");

    let llm = ScriptedLlm::new(vec![]);
    let qs = corpus::select(0, Some(1)).expect("select");
    let err = run_audit(&llm, &opts(), &store, &qs, true, fixed_clock).expect_err("stale");
    assert_eq!(err.code, "RUN_STORE_STALE");
    assert_eq!(llm.calls(), 0);
}

#[test]
fn resume_retries_errored_questions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().to_path_buf());
    let qs = corpus::select(20, Some(21)).expect("select");

    // Server goes away: both attempts fail and the question is stored as errored.
    let down = ScriptedLlm::new(vec![Err(transient()), Err(transient())]);
    let summary = run_audit(&down, &opts(), &store, &qs, false, fixed_clock).expect("first");
    assert_eq!(summary.errored, 1);
    assert_eq!(store.get_outcome(&qs[0].id).expect("get").status, OutcomeStatus::Errored);
    assert!(!store.has_final_outcome(&qs[0].id).expect("final"));

    let back = ScriptedLlm::new(vec![Ok(NO_VULNERABILITY_MARKER.to_string())]);
    let summary = run_audit(&back, &opts(), &store, &qs, true, fixed_clock).expect("resume");
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.processed, 1);
    assert_eq!(back.calls(), 1);

    let stored = store.get_outcome(&qs[0].id).expect("get");
    assert_eq!(stored.status, OutcomeStatus::NoVulnerability);
    assert_eq!(stored.error, None);
    assert!(store.has_final_outcome(&qs[0].id).expect("final"));
}
