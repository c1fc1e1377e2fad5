use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use wsp_core::config::{Config, ErrorPolicy};
use wsp_core::export::{write_records, ExportFormat};
use wsp_core::timestamp::{DateOrder, MeridiemRule};
use wsp_stats::Stopwords;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Plain-text statistics.
    Summary,
    /// Statistics as JSON.
    Json,
    /// The parsed record table, one JSON object per line.
    Jsonl,
    /// The parsed record table as a single JSON array.
    Records,
}

#[derive(Parser)]
#[command(name = "wsp", about = "Chat transcript statistics")]
struct Cli {
    /// Transcript to read, or `-` for stdin.
    path: PathBuf,

    /// Extra config file layered over ~/.config/wsp/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file of the form {"stopwords": [...]}, merged with the built-in
    /// English list.
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Do not start from the built-in English stopwords.
    #[arg(long)]
    no_default_stopwords: bool,

    /// Skip malformed messages instead of stopping at the first one.
    #[arg(long)]
    skip_errors: bool,

    /// Only treat a `p.` right after the time as a PM marker.
    #[arg(long)]
    anchored_meridiem: bool,

    /// Read ambiguous numeric dates day-first.
    #[arg(long)]
    day_first: bool,

    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Number of top terms to report.
    #[arg(long)]
    top: Option<usize>,

    /// Log debug diagnostics to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_with(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Config::defaults()
        }),
    };
    if cli.skip_errors {
        config.parser.on_error = ErrorPolicy::Skip;
    }
    if cli.anchored_meridiem {
        config.parser.meridiem = MeridiemRule::Anchored;
    }
    if cli.day_first {
        config.parser.date_order = DateOrder::DayFirst;
    }
    if let Some(top) = cli.top {
        config.stats.top_terms = top;
    }

    let mut stopwords = if cli.no_default_stopwords {
        Stopwords::default()
    } else {
        Stopwords::english()
    };
    if let Some(path) = &cli.stopwords {
        stopwords.extend(Stopwords::load(path)?.iter());
    }

    let (transcript, summary) = wsp::analyze(&cli.path, &config, &stopwords)
        .with_context(|| format!("processing {}", cli.path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Summary => write!(out, "{summary}")?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &summary)?;
            writeln!(out)?;
        }
        Format::Jsonl => write_records(transcript.records(), ExportFormat::Jsonl, &mut out)?,
        Format::Records => write_records(transcript.records(), ExportFormat::Json, &mut out)?,
    }

    let report = transcript.report();
    if report.has_skips() {
        eprintln!("skipped {} message(s):", report.skipped.len());
        for skipped in &report.skipped {
            eprintln!("  {skipped}");
        }
    }
    Ok(())
}
