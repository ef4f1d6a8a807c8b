use serde::{Deserialize, Serialize};

/// How a model answered one of the two prompts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NoVulnerability,
    Finding,
}

/// Final state of one question after the investigate/validate pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Investigation produced no finding.
    NoVulnerability,
    /// Investigation produced a finding that validation rejected.
    Rejected,
    /// Investigation produced a finding that validation upheld.
    Confirmed,
    /// The pipeline failed for this question; see `error`.
    Errored,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::NoVulnerability => "no_vulnerability",
            OutcomeStatus::Rejected => "rejected",
            OutcomeStatus::Confirmed => "confirmed",
            OutcomeStatus::Errored => "errored",
        }
    }
}

/// Persisted result for a single question.
///
/// Notes:
/// - `prompt_sha256` identifies the exact investigation prompt that was sent.
/// - `validation_response` is `None` unless the investigation produced a finding.
/// - `created_at` is an RFC3339 UTC timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeRecord {
    pub question_index: usize,
    pub question_id: String,
    pub question: String,
    pub model: String,
    pub status: OutcomeStatus,
    pub prompt_sha256: String,
    pub investigation_response: Option<String>,
    pub validation_response: Option<String>,
    pub error: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunManifest {
    pub corpus_fingerprint: String,
    pub question_count: usize,
    pub model: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    pub no_vulnerability: usize,
    pub rejected: usize,
    pub confirmed: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, status: OutcomeStatus) {
        self.processed += 1;
        match status {
            OutcomeStatus::NoVulnerability => self.no_vulnerability += 1,
            OutcomeStatus::Rejected => self.rejected += 1,
            OutcomeStatus::Confirmed => self.confirmed += 1,
            OutcomeStatus::Errored => self.errored += 1,
        }
    }

    pub fn from_outcomes(outcomes: &[OutcomeRecord]) -> Self {
        let mut summary = Self::default();
        for o in outcomes {
            summary.record(o.status);
        }
        summary
    }
}
