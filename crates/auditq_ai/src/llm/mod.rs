use auditq_core::error::AppError;

/// A text-generation backend. Blocking; one prompt in, one completion out.
pub trait Llm {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError>;
}

pub mod ollama_llm;
