use std::time::Duration;

use auditq_core::error::AppError;

const LOCAL_PREFIX: &str = "http://127.0.0.1";
const HEALTH_TIMEOUT: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
}

fn remote_not_allowed(base_url: &str) -> AppError {
    AppError::new(
        "AI_REMOTE_NOT_ALLOWED",
        "Ollama base URL must be http://127.0.0.1 with an optional port",
    )
    .with_details(format!("base_url={base_url}"))
}

impl OllamaClient {
    /// Create a client for a local Ollama server. Only `http://127.0.0.1[:port]` is accepted.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        let rest = base_url
            .strip_prefix(LOCAL_PREFIX)
            .ok_or_else(|| remote_not_allowed(&base_url))?;
        if !rest.is_empty() {
            let port = rest
                .strip_prefix(':')
                .ok_or_else(|| remote_not_allowed(&base_url))?;
            let valid_port = !port.is_empty()
                && port.chars().all(|c| c.is_ascii_digit())
                && matches!(port.parse::<u16>(), Ok(p) if p > 0);
            if !valid_port {
                return Err(remote_not_allowed(&base_url));
            }
        }

        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn health_check(&self) -> Result<(), AppError> {
        let url = format!("{}/api/tags", self.base_url);
        let resp = ureq::get(&url).timeout(HEALTH_TIMEOUT).call();

        match resp {
            Ok(r) if r.status() == 200 => Ok(()),
            Ok(r) => Err(
                AppError::new("AI_OLLAMA_UNHEALTHY", "Ollama health check failed")
                    .with_details(format!("status={}", r.status())),
            ),
            Err(e) => Err(AppError::new(
                "AI_OLLAMA_UNREACHABLE",
                "Failed to reach Ollama on 127.0.0.1",
            )
            .with_details(e.to_string())
            .with_retryable(true)),
        }
    }
}
