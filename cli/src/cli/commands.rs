use std::path::PathBuf;

use auditq_core::export::ExportFormat;
use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ExportFormatArg {
    Json,
    Csv,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(f: ExportFormatArg) -> Self {
        match f {
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List questions with their index and id
    List {
        /// Only questions containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Print one question in full
    Show {
        /// Question index (0-based)
        index: usize,
    },
    /// Render a prompt without calling a model
    Prompt {
        #[command(subcommand)]
        command: PromptCommands,
    },
    /// Export the corpus
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormatArg,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Run investigate + validate over a range of questions against a local Ollama
    Run {
        /// First question index (inclusive)
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Last question index (exclusive; default: end of corpus)
        #[arg(long)]
        to: Option<usize>,
        #[arg(short, long)]
        model: Option<String>,
        #[arg(long)]
        ollama_url: Option<String>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Skip questions that already have a stored outcome
        #[arg(long)]
        resume: bool,
    },
    /// Render a Markdown summary of a run directory
    Report {
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub(crate) enum PromptCommands {
    /// Investigation prompt for a corpus question or free text
    Question {
        #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
        index: Option<usize>,
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Validation prompt for a report read from a file (`-` for stdin) or given inline
    Validation {
        #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
        file: Option<PathBuf>,
        #[arg(short, long)]
        text: Option<String>,
    },
}
