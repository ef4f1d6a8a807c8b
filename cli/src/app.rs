//! Command dispatch. Everything here returns `AppError`; `main` decides how to print it.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use auditq_ai::audit::{now_rfc3339_utc, run_audit, AuditOptions};
use auditq_ai::llm::ollama_llm::OllamaLlm;
use auditq_ai::ollama::OllamaClient;
use auditq_ai::prompts::{question_format, validation_format};
use auditq_ai::store::RunStore;
use auditq_core::corpus::{self, Question};
use auditq_core::error::AppError;
use auditq_core::export::export_questions;
use auditq_core::report::generate_run_markdown;

use crate::cli::{Cli, Commands, PromptCommands};
use crate::config::Config;

const LIST_TEXT_MAX_CHARS: usize = 100;

pub(crate) fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List { search, json } => list(search.as_deref(), json),
        Commands::Show { index } => {
            let q = corpus::get(index)?;
            emit(None, &format!("{}\n", q.text))
        }
        Commands::Prompt { command } => prompt(command),
        Commands::Export { format, out } => {
            let questions: Vec<Question> = corpus::iter().collect();
            let text = export_questions(&questions, format.into())?;
            emit(out.as_deref(), &text)
        }
        Commands::Run {
            from,
            to,
            model,
            ollama_url,
            out_dir,
            resume,
        } => {
            let opts = AuditOptions::new(config.model(model), config.max_attempts());
            let client = OllamaClient::new(&config.ollama_url(ollama_url))?;
            client.health_check()?;
            let llm = OllamaLlm::new(client, Duration::from_secs(config.timeout_secs()));
            let store = RunStore::open(config.out_dir(out_dir));
            let questions = corpus::select(from, to)?;

            tracing::info!(
                count = questions.len(),
                model = %opts.model,
                out_dir = %store.root().display(),
                "starting audit run"
            );
            let summary = run_audit(&llm, &opts, &store, &questions, resume, now_rfc3339_utc)?;
            let json = serde_json::to_string_pretty(&summary).map_err(|e| {
                AppError::new("RUN_SUMMARY_FAILED", "Failed to encode run summary")
                    .with_details(e.to_string())
            })?;
            emit(None, &format!("{json}\n"))
        }
        Commands::Report { out_dir, out } => {
            let store = RunStore::open(config.out_dir(out_dir));
            let manifest = store.read_manifest()?;
            let outcomes = store.list_outcomes()?;
            emit(out.as_deref(), &generate_run_markdown(manifest.as_ref(), &outcomes))
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    let mut s: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        s.push_str("...");
    }
    s
}

fn list(search: Option<&str>, json: bool) -> Result<(), AppError> {
    let questions: Vec<Question> = match search {
        Some(needle) => corpus::search(needle),
        None => corpus::iter().collect(),
    };
    if json {
        let text = serde_json::to_string_pretty(&questions).map_err(|e| {
            AppError::new("EXPORT_FAILED", "Failed to encode questions as JSON")
                .with_details(e.to_string())
        })?;
        return emit(None, &format!("{text}\n"));
    }

    let mut out = String::new();
    for q in &questions {
        out.push_str(&format!(
            "{:>4}  {}  {}\n",
            q.index,
            q.id,
            truncate_chars(q.text, LIST_TEXT_MAX_CHARS)
        ));
    }
    emit(None, &out)
}

fn prompt(command: PromptCommands) -> Result<(), AppError> {
    let rendered = match command {
        PromptCommands::Question { index, text } => match (index, text) {
            (Some(i), _) => question_format(corpus::get(i)?.text),
            (None, Some(t)) => question_format(&t),
            (None, None) => {
                return Err(AppError::new("CLI_ARGS_INVALID", "Provide --index or --text"))
            }
        },
        PromptCommands::Validation { file, text } => match (file, text) {
            (Some(path), _) => validation_format(&read_input(&path)?),
            (None, Some(t)) => validation_format(&t),
            (None, None) => {
                return Err(AppError::new("CLI_ARGS_INVALID", "Provide --file or --text"))
            }
        },
    };
    emit(None, &rendered)
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|e| {
            AppError::new("CLI_INPUT_FAILED", "Failed to read stdin").with_details(e.to_string())
        })?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| {
        AppError::new("CLI_INPUT_FAILED", "Failed to read input file")
            .with_details(format!("path={}; err={}", path.display(), e))
    })
}

fn emit(out: Option<&Path>, text: &str) -> Result<(), AppError> {
    match out {
        Some(path) => fs::write(path, text.as_bytes()).map_err(|e| {
            AppError::new("CLI_OUTPUT_FAILED", "Failed to write output file")
                .with_details(format!("path={}; err={}", path.display(), e))
        }),
        None => io::stdout().write_all(text.as_bytes()).map_err(|e| {
            AppError::new("CLI_OUTPUT_FAILED", "Failed to write to stdout")
                .with_details(e.to_string())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("a→b→c", 3), "a→b...");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
