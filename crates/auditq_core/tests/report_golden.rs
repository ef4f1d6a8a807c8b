use auditq_core::domain::{OutcomeRecord, OutcomeStatus, RunManifest};
use auditq_core::report::generate_run_markdown;
use pretty_assertions::assert_eq;

fn outcome(index: usize, status: OutcomeStatus, response: Option<&str>) -> OutcomeRecord {
    OutcomeRecord {
        question_index: index,
        question_id: format!("{index:016x}"),
        question: format!("Question {index} | does it break?"),
        model: "mock".to_string(),
        status,
        prompt_sha256: "00".repeat(32),
        investigation_response: response.map(str::to_string),
        validation_response: None,
        error: None,
        created_at: "2026-10-16T00:00:00Z".to_string(),
    }
}

#[test]
fn run_markdown_is_deterministic_and_ordered() {
    let manifest = RunManifest {
        corpus_fingerprint: "abc".to_string(),
        question_count: 505,
        model: "mock".to_string(),
        created_at: "2026-10-16T00:00:00Z".to_string(),
    };
    // Deliberately out of order.
    let outcomes = vec![
        outcome(7, OutcomeStatus::Confirmed, Some("## Title\nUnit mixing\n")),
        outcome(2, OutcomeStatus::NoVulnerability, Some("#NoVulnerability found for this question.")),
        outcome(5, OutcomeStatus::Rejected, Some("## Title\nweak")),
    ];

    let md = generate_run_markdown(Some(&manifest), &outcomes);
    let expected = "\
# SukukFi WERC7575 Audit Run

- Model: `mock`
- Started: 2026-10-16T00:00:00Z
- Corpus fingerprint: `abc`
- Questions answered: **3** of 505

## Summary

| Status | Count |
|---|---:|
| confirmed | 1 |
| rejected | 1 |
| no_vulnerability | 1 |
| errored | 0 |

## Outcomes

| # | Id | Status | Model | Question |
|---:|---|---|---|---|
| 2 | `0000000000000002` | no_vulnerability | `mock` | Question 2 \\| does it break? |
| 5 | `0000000000000005` | rejected | `mock` | Question 5 \\| does it break? |
| 7 | `0000000000000007` | confirmed | `mock` | Question 7 \\| does it break? |

## Confirmed findings

### Question 7 (`0000000000000007`)

> Question 7 | does it break?

## Title
Unit mixing

";
    assert_eq!(md, expected);

    let mut reversed = outcomes.clone();
    reversed.reverse();
    assert_eq!(generate_run_markdown(Some(&manifest), &reversed), md);
}

#[test]
fn run_markdown_without_manifest_or_outcomes() {
    let md = generate_run_markdown(None, &[]);
    assert!(md.contains("- Run manifest: UNKNOWN\n"));
    assert!(md.contains("_No outcomes recorded._"));
    assert!(md.ends_with("## Confirmed findings\n\n_None._\n"));
}

#[test]
fn confirmed_finding_prints_the_validated_report() {
    let mut rec = outcome(3, OutcomeStatus::Confirmed, Some("## Title\nDraft wording\n"));
    rec.validation_response = Some("## Audit Report\n\n### Title\nUpheld wording\n".to_string());

    let md = generate_run_markdown(None, &[rec]);
    assert!(md.ends_with("> Question 3 | does it break?\n\n## Audit Report\n\n### Title\nUpheld wording\n\n"));
    assert!(!md.contains("Draft wording"));
}

#[test]
fn outcome_table_shows_model_per_row() {
    let mut later = outcome(4, OutcomeStatus::Rejected, Some("## Title\nx"));
    later.model = "qwen2.5".to_string();
    let md = generate_run_markdown(None, &[outcome(1, OutcomeStatus::NoVulnerability, None), later]);
    assert!(md.contains("| 1 | `0000000000000001` | no_vulnerability | `mock` | Question 1"));
    assert!(md.contains("| 4 | `0000000000000004` | rejected | `qwen2.5` | Question 4"));
}
