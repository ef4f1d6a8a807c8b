use serde::{Deserialize, Serialize};

use crate::corpus::Question;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Serialize questions for use outside this tool.
///
/// JSON is a pretty-printed array of `{index, id, text}`; CSV has the header `index,id,text`.
pub fn export_questions(questions: &[Question], format: ExportFormat) -> Result<String, AppError> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(questions).map_err(|e| {
            AppError::new("EXPORT_FAILED", "Failed to encode questions as JSON")
                .with_details(e.to_string())
        }),
        ExportFormat::Csv => export_csv(questions),
    }
}

fn export_csv(questions: &[Question]) -> Result<String, AppError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for q in questions {
        wtr.serialize(q).map_err(|e| {
            AppError::new("EXPORT_FAILED", "Failed to write CSV row")
                .with_details(format!("index={}; err={}", q.index, e))
        })?;
    }
    if questions.is_empty() {
        wtr.write_record(["index", "id", "text"]).map_err(|e| {
            AppError::new("EXPORT_FAILED", "Failed to write CSV header").with_details(e.to_string())
        })?;
    }
    let bytes = wtr.into_inner().map_err(|e| {
        AppError::new("EXPORT_FAILED", "Failed to flush CSV output").with_details(e.to_string())
    })?;
    String::from_utf8(bytes).map_err(|e| {
        AppError::new("EXPORT_FAILED", "CSV output was not valid UTF-8").with_details(e.to_string())
    })
}
