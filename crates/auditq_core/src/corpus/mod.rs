//! The ordered audit-question corpus.
//!
//! Questions are compiled in as a `const` slice and never mutated. Every question gets a stable id
//! derived from its text so run results survive reordering of unrelated entries.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::AppError;

mod questions;

use questions::QUESTIONS;

const ID_HEX_LEN: usize = 16;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Question {
    pub index: usize,
    pub id: String,
    pub text: &'static str,
}

impl Question {
    fn at(index: usize, text: &'static str) -> Self {
        Self {
            index,
            id: question_id(text),
            text,
        }
    }
}

/// Raw corpus in its original order.
pub fn questions() -> &'static [&'static str] {
    QUESTIONS
}

pub fn len() -> usize {
    QUESTIONS.len()
}

pub fn is_empty() -> bool {
    QUESTIONS.is_empty()
}

/// First 16 hex chars of the SHA-256 of the question text.
pub fn question_id(text: &str) -> String {
    let digest = hex::encode(Sha256::digest(text.as_bytes()));
    digest[..ID_HEX_LEN].to_string()
}

pub fn iter() -> impl Iterator<Item = Question> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, text)| Question::at(index, *text))
}

pub fn get(index: usize) -> Result<Question, AppError> {
    QUESTIONS
        .get(index)
        .map(|text| Question::at(index, *text))
        .ok_or_else(|| {
            AppError::new("CORPUS_INDEX_OUT_OF_RANGE", "Question index is out of range")
                .with_details(format!("index={index}; len={}", QUESTIONS.len()))
        })
}

pub fn find(id: &str) -> Result<Question, AppError> {
    let id = id.trim();
    iter().find(|q| q.id == id).ok_or_else(|| {
        AppError::new("CORPUS_ID_NOT_FOUND", "No question has this id")
            .with_details(format!("id={id}"))
    })
}

/// Questions in the half-open range `from..to`. `to` is clamped to the corpus length.
pub fn select(from: usize, to: Option<usize>) -> Result<Vec<Question>, AppError> {
    let end = to.unwrap_or(QUESTIONS.len()).min(QUESTIONS.len());
    if from >= QUESTIONS.len() || from > end {
        return Err(
            AppError::new("CORPUS_RANGE_INVALID", "Question range is empty or out of bounds")
                .with_details(format!("from={from}; to={end}; len={}", QUESTIONS.len())),
        );
    }
    Ok((from..end).map(|i| Question::at(i, QUESTIONS[i])).collect())
}

/// Case-insensitive substring search, corpus order kept.
pub fn search(needle: &str) -> Vec<Question> {
    let needle = needle.to_lowercase();
    iter()
        .filter(|q| q.text.to_lowercase().contains(&needle))
        .collect()
}

/// SHA-256 over every question joined by `\n`. Changes whenever any entry or the order changes.
pub fn fingerprint() -> String {
    let mut hasher = Sha256::new();
    for (i, text) in QUESTIONS.iter().enumerate() {
        if i > 0 {
            hasher.update(b"\n");
        }
        hasher.update(text.as_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_fixed_width() {
        let ids: std::collections::BTreeSet<String> = iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), len());
        assert!(ids.iter().all(|id| id.len() == ID_HEX_LEN));
    }

    #[test]
    fn question_id_is_content_addressed() {
        assert_eq!(question_id("abc"), question_id("abc"));
        assert_ne!(question_id("abc"), question_id("abd"));
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(question_id("abc"), "ba7816bf8f01cfea");
    }

    #[test]
    fn select_clamps_end() {
        let tail = select(len() - 2, Some(len() + 50)).expect("select");
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[1].index, len() - 1);
    }

    #[test]
    fn select_rejects_inverted_range() {
        let err = select(10, Some(5)).expect_err("inverted");
        assert_eq!(err.code, "CORPUS_RANGE_INVALID");
        let err = select(len(), None).expect_err("past end");
        assert_eq!(err.code, "CORPUS_RANGE_INVALID");
    }

    #[test]
    fn select_allows_empty_range_inside_corpus() {
        assert!(select(3, Some(3)).expect("empty").is_empty());
    }
}
