use auditq_core::corpus;

#[test]
fn corpus_keeps_count_and_order() {
    let qs = corpus::questions();
    assert_eq!(qs.len(), 505);
    assert_eq!(corpus::len(), qs.len());
    assert!(!corpus::is_empty());
    assert!(qs[0].starts_with("In WERC7575ShareToken. batchTransfers(), after computing net amounts"));
    assert!(qs[1].starts_with("WERC7575ShareToken. batchTransfers() skips transfers where debtor == creditor"));
    // The final entry is truncated in the source and kept as-is.
    assert_eq!(
        qs[qs.len() - 1],
        "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), SafeToken"
    );
}

#[test]
fn iter_matches_raw_slice() {
    let raw = corpus::questions();
    for q in corpus::iter() {
        assert_eq!(q.text, raw[q.index]);
        assert_eq!(q.id, corpus::question_id(q.text));
    }
}

#[test]
fn get_and_find_agree() {
    let q = corpus::get(42).expect("get");
    assert_eq!(q.index, 42);
    let by_id = corpus::find(&q.id).expect("find");
    assert_eq!(by_id, q);
    let padded = corpus::find(&format!("  {}\n", q.id)).expect("find trims");
    assert_eq!(padded.index, 42);
}

#[test]
fn get_out_of_range_is_structured_error() {
    let err = corpus::get(corpus::len()).expect_err("out of range");
    assert_eq!(err.code, "CORPUS_INDEX_OUT_OF_RANGE");
    assert!(err.details.unwrap_or_default().contains("len=505"));
}

#[test]
fn find_unknown_id_errors() {
    let err = corpus::find("0000000000000000").expect_err("unknown");
    assert_eq!(err.code, "CORPUS_ID_NOT_FOUND");
}

#[test]
fn select_returns_half_open_range() {
    let qs = corpus::select(10, Some(13)).expect("select");
    let idx: Vec<usize> = qs.iter().map(|q| q.index).collect();
    assert_eq!(idx, vec![10, 11, 12]);
    assert_eq!(corpus::select(0, None).expect("all").len(), corpus::len());
}

#[test]
fn search_is_case_insensitive_and_ordered() {
    let hits = corpus::search("BATCHTRANSFERS");
    assert!(!hits.is_empty());
    assert!(hits.windows(2).all(|w| w[0].index < w[1].index));
    assert!(hits
        .iter()
        .all(|q| q.text.to_lowercase().contains("batchtransfers")));
    assert_eq!(corpus::search("").len(), corpus::len());
    assert!(corpus::search("no such phrase anywhere in the corpus").is_empty());
}

#[test]
fn fingerprint_is_stable_hex() {
    let a = corpus::fingerprint();
    let b = corpus::fingerprint();
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}
