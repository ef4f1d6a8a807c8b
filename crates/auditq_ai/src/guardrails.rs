use auditq_core::domain::Verdict;
use auditq_core::error::AppError;

const NO_VULNERABILITY_TOKEN: &str = "#NoVulnerability";
const REPORT_HEADINGS: [&str; 2] = ["title", "audit report"];

fn is_report_heading(line: &str) -> bool {
    let line = line.trim_start();
    let title = match line
        .strip_prefix("### ")
        .or_else(|| line.strip_prefix("## "))
    {
        Some(t) => t,
        None => return false,
    };
    let title = title.trim().to_ascii_lowercase();
    REPORT_HEADINGS.contains(&title.as_str())
}

/// Classify a model response to either prompt.
///
/// A report heading (`## Title`, `## Audit Report`, or their `###` forms) wins over the
/// no-vulnerability marker, since the report format quotes the marker in its own instructions.
pub fn classify_response(output: &str) -> Result<Verdict, AppError> {
    if output.trim().is_empty() {
        return Err(AppError::new("AI_RESPONSE_EMPTY", "Model response was empty"));
    }
    if output.lines().any(is_report_heading) {
        return Ok(Verdict::Finding);
    }
    if output.contains(NO_VULNERABILITY_TOKEN) {
        return Ok(Verdict::NoVulnerability);
    }
    Err(AppError::new(
        "AI_RESPONSE_UNSTRUCTURED",
        "Model response had neither a report nor the no-vulnerability marker",
    )
    .with_details(format!("len={}", output.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_detection_requires_exact_titles() {
        assert!(is_report_heading("## Title"));
        assert!(is_report_heading("  ### audit report  "));
        assert!(!is_report_heading("## Titles"));
        assert!(!is_report_heading("# Title"));
        assert!(!is_report_heading("Title"));
    }
}
