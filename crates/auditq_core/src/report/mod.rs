use crate::domain::{OutcomeRecord, OutcomeStatus, RunManifest, RunSummary};

const QUESTION_CELL_MAX_CHARS: usize = 96;

fn table_cell(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut cell: String = flat.chars().take(max_chars).collect();
    if flat.chars().count() > max_chars {
        cell.push_str("...");
    }
    cell.replace('|', "\\|")
}

/// Generate a deterministic Markdown summary of an audit run.
///
/// Outcomes are ordered by question index (then id), so identical inputs render identical output.
pub fn generate_run_markdown(manifest: Option<&RunManifest>, outcomes: &[OutcomeRecord]) -> String {
    let mut rows: Vec<&OutcomeRecord> = outcomes.iter().collect();
    rows.sort_by(|a, b| {
        (a.question_index, &a.question_id).cmp(&(b.question_index, &b.question_id))
    });
    let summary = RunSummary::from_outcomes(outcomes);

    let mut out = String::new();
    out.push_str("# SukukFi WERC7575 Audit Run\n\n");

    match manifest {
        Some(m) => {
            out.push_str(&format!("- Model: `{}`\n", m.model));
            out.push_str(&format!("- Started: {}\n", m.created_at));
            out.push_str(&format!("- Corpus fingerprint: `{}`\n", m.corpus_fingerprint));
            out.push_str(&format!(
                "- Questions answered: **{}** of {}\n\n",
                rows.len(),
                m.question_count
            ));
        }
        None => {
            out.push_str("- Run manifest: UNKNOWN\n");
            out.push_str(&format!("- Questions answered: **{}**\n\n", rows.len()));
        }
    }

    out.push_str("## Summary\n\n");
    out.push_str("| Status | Count |\n|---|---:|\n");
    out.push_str(&format!("| confirmed | {} |\n", summary.confirmed));
    out.push_str(&format!("| rejected | {} |\n", summary.rejected));
    out.push_str(&format!("| no_vulnerability | {} |\n", summary.no_vulnerability));
    out.push_str(&format!("| errored | {} |\n\n", summary.errored));

    out.push_str("## Outcomes\n\n");
    if rows.is_empty() {
        out.push_str("_No outcomes recorded._\n\n");
    } else {
        // Model is per row: a resumed run may have switched models.
        out.push_str("| # | Id | Status | Model | Question |\n|---:|---|---|---|---|\n");
        for r in &rows {
            out.push_str(&format!(
                "| {} | `{}` | {} | `{}` | {} |\n",
                r.question_index,
                r.question_id,
                r.status.as_str(),
                r.model,
                table_cell(&r.question, QUESTION_CELL_MAX_CHARS)
            ));
        }
        out.push('\n');
    }

    let confirmed: Vec<&&OutcomeRecord> = rows
        .iter()
        .filter(|r| r.status == OutcomeStatus::Confirmed)
        .collect();
    out.push_str("## Confirmed findings\n\n");
    if confirmed.is_empty() {
        out.push_str("_None._\n");
        return out;
    }
    for r in confirmed {
        out.push_str(&format!("### Question {} (`{}`)\n\n", r.question_index, r.question_id));
        out.push_str(&format!("> {}\n\n", r.question.trim()));
        // Prefer the report the validator upheld.
        let body = r
            .validation_response
            .as_deref()
            .or(r.investigation_response.as_deref())
            .map(str::trim)
            .unwrap_or("UNKNOWN");
        out.push_str(body);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_cell_flattens_and_escapes() {
        assert_eq!(table_cell("a |\n b", 80), "a \\| b");
        assert_eq!(table_cell("abcdef", 3), "abc...");
    }
}
