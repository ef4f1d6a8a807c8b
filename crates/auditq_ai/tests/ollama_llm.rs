use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use auditq_ai::llm::ollama_llm::OllamaLlm;
use auditq_ai::llm::Llm;
use auditq_ai::ollama::OllamaClient;

fn read_request(stream: &mut TcpStream) {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = head
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

/// Serve one canned HTTP response on 127.0.0.1 and return an `OllamaLlm` pointed at it.
fn llm_answering(status_line: &str, body: &str) -> OllamaLlm {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });
    let client = OllamaClient::new(&format!("http://127.0.0.1:{port}")).expect("client");
    OllamaLlm::new(client, Duration::from_secs(5))
}

#[test]
fn ok_response_returns_model_text() {
    let llm = llm_answering(
        "200 OK",
        r##"{"response":"#NoVulnerability found for this question."}"##,
    );
    let out = llm.generate("mock", "prompt").expect("generate");
    assert_eq!(out, "#NoVulnerability found for this question.");
}

#[test]
fn server_error_is_retryable() {
    let llm = llm_answering("503 Service Unavailable", r#"{"error":"loading model"}"#);
    let err = llm.generate("mock", "prompt").expect_err("5xx");
    assert_eq!(err.code, "AI_GENERATE_FAILED");
    assert!(err.retryable);
    assert!(err.details.unwrap_or_default().contains("status=503"));
}

#[test]
fn client_error_is_not_retryable() {
    let llm = llm_answering("404 Not Found", r#"{"error":"model 'mock' not found"}"#);
    let err = llm.generate("mock", "prompt").expect_err("4xx");
    assert_eq!(err.code, "AI_GENERATE_FAILED");
    assert!(!err.retryable);
    assert!(err.details.unwrap_or_default().contains("status=404"));
}

#[test]
fn empty_body_is_retryable() {
    let llm = llm_answering("200 OK", r#"{"response":"   "}"#);
    let err = llm.generate("mock", "prompt").expect_err("empty");
    assert_eq!(err.code, "AI_RESPONSE_EMPTY");
    assert!(err.retryable);
}

#[test]
fn undecodable_body_is_not_retryable() {
    let llm = llm_answering("200 OK", r#"{"unexpected":true}"#);
    let err = llm.generate("mock", "prompt").expect_err("decode");
    assert_eq!(err.code, "AI_GENERATE_FAILED");
    assert!(!err.retryable);
}
