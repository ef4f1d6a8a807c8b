//! Global CLI options.

use std::path::PathBuf;

use clap::Parser;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "auditq")]
#[command(about = "SukukFi WERC7575 audit questions and LLM prompt runner", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config file (default: ~/.config/auditq/config.toml, then ~/.auditq.toml)
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}
