use auditq_core::corpus;
use auditq_core::export::{export_questions, ExportFormat};
use pretty_assertions::assert_eq;

#[test]
fn json_export_carries_index_id_and_text() {
    let qs = corpus::select(0, Some(2)).expect("select");
    let json = export_questions(&qs, ExportFormat::Json).expect("json");
    let v: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[1]["index"], 1);
    assert_eq!(arr[1]["id"], qs[1].id.as_str());
    assert_eq!(arr[1]["text"], qs[1].text);
}

#[test]
fn csv_export_round_trips_through_reader() {
    let qs = corpus::select(0, None).expect("select");
    let out = export_questions(&qs, ExportFormat::Csv).expect("csv");

    let mut rdr = csv::Reader::from_reader(out.as_bytes());
    let headers = rdr.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["index", "id", "text"]);

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), corpus::len());
    for (row, q) in rows.iter().zip(qs.iter()) {
        assert_eq!(&row[0], q.index.to_string().as_str());
        assert_eq!(&row[1], q.id.as_str());
        // Quotes and commas inside questions survive CSV quoting.
        assert_eq!(&row[2], q.text);
    }
}

#[test]
fn csv_export_of_nothing_still_has_header() {
    let out = export_questions(&[], ExportFormat::Csv).expect("csv");
    assert_eq!(out, "index,id,text\n");
}
