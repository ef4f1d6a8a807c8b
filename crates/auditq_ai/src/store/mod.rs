//! On-disk store for audit runs.
//!
//! Layout under `root`:
//! - `manifest.json`: the [`RunManifest`] written when the run starts.
//! - `outcomes/<question_id>.json`: one [`OutcomeRecord`] per answered question.
//!
//! Writes go through a `.tmp` file and a rename so a killed run never leaves half a record.

use std::fs;
use std::path::{Path, PathBuf};

use auditq_core::domain::{OutcomeRecord, OutcomeStatus, RunManifest};
use auditq_core::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct RunStore {
    root: PathBuf,
}

impl RunStore {
    pub fn open(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join("manifest.json")
    }

    fn outcomes_dir(&self) -> PathBuf {
        self.root.join("outcomes")
    }

    fn outcome_path(&self, question_id: &str) -> PathBuf {
        self.outcomes_dir().join(format!("{question_id}.json"))
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        fs::create_dir_all(self.outcomes_dir()).map_err(|e| {
            AppError::new("RUN_STORE_FAILED", "Failed to create run store directory")
                .with_details(format!("path={}; err={}", self.outcomes_dir().display(), e))
        })
    }

    pub fn write_manifest(&self, manifest: &RunManifest) -> Result<(), AppError> {
        self.ensure_dirs()?;
        write_json_atomic(&self.manifest_path(), manifest)
    }

    pub fn read_manifest(&self) -> Result<Option<RunManifest>, AppError> {
        let path = self.manifest_path();
        if !path.exists() {
            return Ok(None);
        }
        read_json(&path).map(Some)
    }

    /// Refuse to mix results from a different corpus into this run directory.
    pub fn check_fingerprint(&self, expected: &str) -> Result<(), AppError> {
        match self.read_manifest()? {
            Some(m) if m.corpus_fingerprint != expected => Err(AppError::new(
                "RUN_STORE_STALE",
                "Run directory was created from a different question corpus",
            )
            .with_details(format!(
                "path={}; stored={}; current={}",
                self.root.display(),
                m.corpus_fingerprint,
                expected
            ))),
            _ => Ok(()),
        }
    }

    pub fn put_outcome(&self, outcome: &OutcomeRecord) -> Result<(), AppError> {
        self.ensure_dirs()?;
        write_json_atomic(&self.outcome_path(&outcome.question_id), outcome)
    }

    pub fn has_outcome(&self, question_id: &str) -> bool {
        self.outcome_path(question_id).is_file()
    }

    /// True when a stored outcome exists and is not `Errored`. Errored questions stay eligible
    /// for another attempt.
    pub fn has_final_outcome(&self, question_id: &str) -> Result<bool, AppError> {
        if !self.has_outcome(question_id) {
            return Ok(false);
        }
        Ok(self.get_outcome(question_id)?.status != OutcomeStatus::Errored)
    }

    pub fn get_outcome(&self, question_id: &str) -> Result<OutcomeRecord, AppError> {
        let path = self.outcome_path(question_id);
        if !path.is_file() {
            return Err(AppError::new("RUN_STORE_NOT_FOUND", "No outcome stored for question")
                .with_details(format!("id={question_id}")));
        }
        read_json(&path)
    }

    /// All stored outcomes ordered by question index, then id.
    pub fn list_outcomes(&self) -> Result<Vec<OutcomeRecord>, AppError> {
        let dir = self.outcomes_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|e| {
            AppError::new("RUN_STORE_FAILED", "Failed to list outcomes")
                .with_details(format!("path={}; err={}", dir.display(), e))
        })?;

        let mut out: Vec<OutcomeRecord> = Vec::new();
        for ent in entries.flatten() {
            let path = ent.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            out.push(read_json(&path)?);
        }
        out.sort_by(|a, b| {
            (a.question_index, &a.question_id).cmp(&(b.question_index, &b.question_id))
        });
        Ok(out)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::new("RUN_STORE_FAILED", "Failed to read run store file")
            .with_details(format!("path={}; err={}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::new("RUN_STORE_FAILED", "Failed to decode run store file")
            .with_details(format!("path={}; err={}", path.display(), e))
    })
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        AppError::new("RUN_STORE_FAILED", "Failed to encode run store file")
            .with_details(e.to_string())
    })?;
    fs::write(&tmp, json.as_bytes()).map_err(|e| {
        AppError::new("RUN_STORE_FAILED", "Failed to write run store file")
            .with_details(format!("path={}; err={}", tmp.display(), e))
    })?;
    fs::rename(&tmp, path).map_err(|e| {
        AppError::new("RUN_STORE_FAILED", "Failed to finalize run store write")
            .with_details(format!("tmp={}; dest={}; err={}", tmp.display(), path.display(), e))
    })
}
