use auditq_ai::guardrails::classify_response;
use auditq_core::domain::Verdict;

#[test]
fn report_heading_is_a_finding() {
    let report = "## Title\nUnit Mixing in Reserved Asset Calculation\n\n## Summary\n...";
    assert_eq!(classify_response(report).expect("classify"), Verdict::Finding);

    let judged = "## Audit Report\n\n### Title\nStill valid";
    assert_eq!(classify_response(judged).expect("classify"), Verdict::Finding);
}

#[test]
fn report_wins_over_quoted_marker() {
    let mixed = "## Title\nX\n\n(If invalid the answer would be #NoVulnerability found for this question.)";
    assert_eq!(classify_response(mixed).expect("classify"), Verdict::Finding);
}

#[test]
fn marker_is_no_vulnerability() {
    let out = "After tracing batchTransfers the netting is correct.\n\n#NoVulnerability found for this question.";
    assert_eq!(classify_response(out).expect("classify"), Verdict::NoVulnerability);
}

#[test]
fn empty_response_is_an_error() {
    let err = classify_response("  \n\t").expect_err("empty");
    assert_eq!(err.code, "AI_RESPONSE_EMPTY");
}

#[test]
fn freeform_response_is_unstructured() {
    let err = classify_response("I think it is probably fine.").expect_err("unstructured");
    assert_eq!(err.code, "AI_RESPONSE_UNSTRUCTURED");
    assert!(!err.retryable);
}
