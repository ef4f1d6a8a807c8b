pub mod corpus;
pub mod domain;
pub mod error;
pub mod export;
pub mod report;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("CORPUS_TEST", "corpus failed").with_retryable(false);
        assert_eq!(err.code, "CORPUS_TEST");
        assert_eq!(err.message, "corpus failed");
        assert!(!err.retryable);
        assert_eq!(err.to_string(), "[CORPUS_TEST] corpus failed");
    }

    #[test]
    fn app_error_render_includes_details() {
        let err = AppError::new("AI_GENERATE_FAILED", "model call failed").with_details("status=500");
        assert_eq!(err.render(), "[AI_GENERATE_FAILED] model call failed\n  status=500");
        assert_eq!(
            AppError::new("X", "y").render(),
            "[X] y",
            "no details means a single line"
        );
    }
}
