use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Concord: vocabulary conformity between two text documents.
///
/// Normalizes both documents (digit and punctuation stripping, case
/// folding, stop-word and short-word removal) and reports how much of the
/// surviving vocabulary they share: once over unique words, once
/// word-weighted.
#[derive(Parser)]
#[command(name = "concord", version, about)]
struct Cli {
    /// First document to compare
    first: PathBuf,

    /// Second document to compare
    second: PathBuf,

    /// Print the report as JSON instead of the terminal view
    #[arg(long)]
    json: bool,

    /// List the shared vocabulary under the unique-word report
    #[arg(long)]
    words: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so the stdout report stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("concord=info")),
        )
        .init();

    let cli = Cli::parse();

    let report = concord::pipeline::compare(&cli.first, &cli.second)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        concord::output::terminal::display_report(&report, cli.words);
    }

    Ok(())
}
