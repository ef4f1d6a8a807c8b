pub mod audit;
pub mod guardrails;
pub mod llm;
pub mod ollama;
pub mod prompts;
pub mod store;

#[cfg(test)]
mod tests {
    use super::guardrails::classify_response;
    use super::ollama::OllamaClient;
    use super::prompts::NO_VULNERABILITY_MARKER;
    use auditq_core::domain::Verdict;

    #[test]
    fn enforces_localhost_only_base_url() {
        assert!(OllamaClient::new("http://127.0.0.1:11434").is_ok());
        assert!(OllamaClient::new("http://127.0.0.1").is_ok());

        assert!(OllamaClient::new("http://localhost:11434").is_err());
        assert!(OllamaClient::new("http://0.0.0.0:11434").is_err());
        assert!(OllamaClient::new("http://[::1]:11434").is_err());
        assert!(OllamaClient::new("https://api.example.com").is_err());

        // Prefix tricks must not pass.
        assert!(OllamaClient::new("http://127.0.0.1.evil.com:11434").is_err());
        assert!(OllamaClient::new("http://127.0.0.1@evil.com:11434").is_err());
        assert!(OllamaClient::new("http://127.0.0.1:").is_err());
        assert!(OllamaClient::new("http://127.0.0.1:0").is_err());
        assert!(OllamaClient::new("http://127.0.0.1:99999").is_err());
        assert!(OllamaClient::new("http://127.0.0.1:11434/").is_ok());
        assert!(OllamaClient::new("http://127.0.0.1:11434/api").is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let c = OllamaClient::new("http://127.0.0.1:11434/").expect("client");
        assert_eq!(c.base_url(), "http://127.0.0.1:11434");
    }

    #[test]
    fn marker_alone_is_no_vulnerability() {
        assert_eq!(
            classify_response(NO_VULNERABILITY_MARKER).expect("classify"),
            Verdict::NoVulnerability
        );
        assert_eq!(
            classify_response("`#NoVulnerability found for this question. `").expect("classify"),
            Verdict::NoVulnerability
        );
    }
}
