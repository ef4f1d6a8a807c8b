use auditq_ai::prompts::{question_format, validation_format, NO_VULNERABILITY_MARKER};
use auditq_core::corpus;
use pretty_assertions::assert_eq;

fn split_at_insertion(rendered: &str, empty: &str, input: &str) -> (String, String) {
    // Locate the insertion point as the first byte where the two renderings diverge.
    let at = empty
        .bytes()
        .zip(rendered.bytes())
        .position(|(a, b)| a != b)
        .unwrap_or(empty.len());
    let head = rendered[..at].to_string();
    let tail = rendered[at + input.len()..].to_string();
    (head, tail)
}

#[test]
fn question_format_inserts_verbatim_at_scope_line() {
    let empty = question_format("");
    let out = question_format("TEST_Q");
    assert_eq!(out.len(), empty.len() + "TEST_Q".len());
    assert!(out.contains("**Security Question (scope for this run):** TEST_Q\n"));

    let (head, tail) = split_at_insertion(&out, &empty, "TEST_Q");
    assert_eq!(format!("{head}{tail}"), empty);
    assert!(head.ends_with("**Security Question (scope for this run):** "));
    assert_eq!(&out[head.len()..head.len() + 6], "TEST_Q");
}

#[test]
fn validation_format_inserts_verbatim_after_claim_header() {
    let empty = validation_format("");
    let out = validation_format("TEST_R");
    assert_eq!(out.len(), empty.len() + "TEST_R".len());
    assert!(out.contains("**SECURITY CLAIM TO VALIDATE:**\nTEST_R\n"));

    let (head, tail) = split_at_insertion(&out, &empty, "TEST_R");
    assert_eq!(format!("{head}{tail}"), empty);
}

#[test]
fn templates_start_with_newline_and_end_with_instruction() {
    let q = question_format("x");
    assert!(q.starts_with("\nYou are an Elite Web3 Security Auditor"));
    assert!(q.ends_with("Now investigate the security question thoroughly and produce your finding.\n"));

    let v = validation_format("x");
    assert!(v.starts_with("\nYou are an **Elite Web3 Security Judge**"));
    assert!(v.ends_with("**Be ruthlessly skeptical.  The bar for validity is EXTREMELY high.**\n"));
}

#[test]
fn builders_are_deterministic() {
    let q = corpus::get(0).expect("q").text;
    assert_eq!(question_format(q), question_format(q));
    assert_eq!(validation_format(q), validation_format(q));
}

#[test]
fn awkward_inputs_are_not_escaped() {
    let nasty = "{question} {{report}} \"quoted\" \\ ünïcödé → ≤\n\n";
    assert!(question_format(nasty).contains(nasty));
    assert!(validation_format(nasty).contains(nasty));

    // A whole template fed back in is just more text.
    let nested = question_format("inner");
    let outer = validation_format(&nested);
    assert!(outer.contains(&nested));
    assert_eq!(outer.len(), validation_format("").len() + nested.len());
}

#[test]
fn marker_is_a_valid_validation_input() {
    let out = validation_format(NO_VULNERABILITY_MARKER);
    assert!(out.contains(&format!("VALIDATE:**\n{NO_VULNERABILITY_MARKER}\n")));
}

#[test]
fn every_corpus_question_renders() {
    let base = question_format("").len();
    for q in corpus::iter() {
        let out = question_format(q.text);
        assert_eq!(out.len(), base + q.text.len(), "question {}", q.index);
        assert!(out.contains(q.text));
    }
}
