//! Decide whether a statement follows from a propositional knowledge base
//!
//! Usage: `check_true_false <kb files>... --statement <file>`
//!
//! The verdict is written to the output file (default `result.txt`) and
//! echoed to stdout; `--json` prints the full report instead.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttentails::{check_true_false, read_knowledge_base, read_statement, CheckConfig};

#[derive(Parser)]
#[command(name = "check_true_false")]
#[command(about = "Check whether a statement follows from a propositional knowledge base")]
#[command(version)]
struct Cli {
    /// Knowledge base files, one expression per line
    #[arg(required = true)]
    knowledge_base: Vec<PathBuf>,
    /// File whose first expression line is the statement
    #[arg(short, long)]
    statement: PathBuf,
    /// Where to write the verdict
    #[arg(short, long, default_value = "result.txt")]
    output: PathBuf,
    /// JSON file with checker settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enumerate symbols the knowledge base states as facts
    #[arg(long)]
    no_literal_forcing: bool,
    /// Disable every pruning optimization
    #[arg(long)]
    exhaustive: bool,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => CheckConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CheckConfig::default(),
    };
    if cli.exhaustive {
        config = CheckConfig::exhaustive();
    }
    if cli.no_literal_forcing {
        config.literal_forcing = false;
    }

    let knowledge_base = read_knowledge_base(&cli.knowledge_base)
        .context("reading knowledge base")?
        .validate()
        .context("invalid knowledge base")?;
    let statement = read_statement(&cli.statement)
        .context("reading statement")?
        .validate()
        .context("invalid statement")?;
    info!(
        conjuncts = knowledge_base.children().len(),
        nodes = knowledge_base.size(),
        symbols = knowledge_base.symbols().len(),
        "loaded knowledge base"
    );

    let report = check_true_false(&knowledge_base, &statement, &config);

    fs::write(&cli.output, format!("{}\n", report.verdict))
        .with_context(|| format!("writing {}", cli.output.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.verdict);
    }
    Ok(())
}
