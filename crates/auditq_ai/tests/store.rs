use auditq_ai::store::RunStore;
use auditq_core::domain::{OutcomeRecord, OutcomeStatus};

fn record(index: usize, id: &str) -> OutcomeRecord {
    OutcomeRecord {
        question_index: index,
        question_id: id.to_string(),
        question: format!("question {index}"),
        model: "mock".to_string(),
        status: OutcomeStatus::NoVulnerability,
        prompt_sha256: "ab".repeat(32),
        investigation_response: Some("#NoVulnerability found for this question.".to_string()),
        validation_response: None,
        error: None,
        created_at: "2026-10-16T00:00:00Z".to_string(),
    }
}

#[test]
fn outcome_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().join("run"));
    let rec = record(4, "aaaa");
    assert!(!store.has_outcome("aaaa"));
    store.put_outcome(&rec).expect("put");
    assert!(store.has_outcome("aaaa"));
    assert_eq!(store.get_outcome("aaaa").expect("get"), rec);
    assert!(!dir.path().join("run/outcomes/aaaa.tmp").exists());
}

#[test]
fn missing_outcome_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().to_path_buf());
    let err = store.get_outcome("nope").expect_err("missing");
    assert_eq!(err.code, "RUN_STORE_NOT_FOUND");
}

#[test]
fn list_is_sorted_by_index_and_ignores_stray_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().to_path_buf());
    store.put_outcome(&record(9, "cccc")).expect("put");
    store.put_outcome(&record(2, "bbbb")).expect("put");
    store.put_outcome(&record(5, "aaaa")).expect("put");
    std::fs::write(dir.path().join("outcomes/notes.txt"), "x").expect("stray");

    let idx: Vec<usize> = store
        .list_outcomes()
        .expect("list")
        .iter()
        .map(|o| o.question_index)
        .collect();
    assert_eq!(idx, vec![2, 5, 9]);
}

#[test]
fn empty_store_has_no_manifest_or_outcomes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().join("fresh"));
    assert_eq!(store.read_manifest().expect("read"), None);
    assert!(store.list_outcomes().expect("list").is_empty());
    store.check_fingerprint("anything").expect("no manifest is fine");
}

#[test]
fn corrupt_outcome_surfaces_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RunStore::open(dir.path().to_path_buf());
    store.ensure_dirs().expect("dirs");
    std::fs::write(dir.path().join("outcomes/bad.json"), "{not json").expect("write");
    let err = store.get_outcome("bad").expect_err("corrupt");
    assert_eq!(err.code, "RUN_STORE_FAILED");
}
