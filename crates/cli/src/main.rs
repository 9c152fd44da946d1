use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use data_loader::Encoding;
use pipeline::config::DEFAULT_BATCH_SIZE;
use pipeline::{aggregate_file, render_text, FileReport, PipelineConfig, ReportBuilder, DEFAULT_FEATURED_ACTOR};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

/// moviedb-stats - Movie Database Statistics
#[derive(Parser)]
#[command(name = "moviedb-stats")]
#[command(about = "Actor, title and release-year statistics for slash-delimited movie files", long_about = None)]
struct Cli {
    /// Movie database files, one `Title (Year)/Actor/...` record per line
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Actor whose filmography is listed ("Last, First")
    #[arg(long, default_value = DEFAULT_FEATURED_ACTOR)]
    actor: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Text encoding of the input files
    #[arg(long, value_enum, default_value_t = InputEncoding::Utf8)]
    encoding: InputEncoding,

    /// Aggregate batches of lines in parallel
    #[arg(long)]
    parallel: bool,

    /// Lines per batch when --parallel is set
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputEncoding {
    Utf8,
    Latin1,
}

impl From<InputEncoding> for Encoding {
    fn from(encoding: InputEncoding) -> Self {
        match encoding {
            InputEncoding::Utf8 => Encoding::Utf8,
            InputEncoding::Latin1 => Encoding::Latin1,
        }
    }
}

/// JSON document printed per file
#[derive(Serialize)]
struct JsonOutput<'a> {
    file: &'a Path,
    report: &'a FileReport,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PipelineConfig::new()
        .with_parallel(cli.parallel)
        .with_batch_size(cli.batch_size)
        .with_encoding(cli.encoding.into());
    let builder = ReportBuilder::new(cli.actor.clone());

    // Each file stands alone; a failure is reported and the rest still run
    let mut failures = 0usize;
    for path in &cli.files {
        if let Err(err) = handle_file(path, &config, &builder, cli.format) {
            error!("{:#}", err);
            eprintln!("{} {:#}", "✗".red(), err);
            failures += 1;
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Logs go to stderr so stdout carries only the report.
///
/// RUST_LOG wins when set; otherwise `warn`, raised by each `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

/// Aggregate one file and print its report
fn handle_file(
    path: &Path,
    config: &PipelineConfig,
    builder: &ReportBuilder,
    format: OutputFormat,
) -> Result<()> {
    let start = Instant::now();
    let pipeline = aggregate_file(path, config)
        .with_context(|| format!("Failed to process {}", path.display()))?;
    info!("Processed {} in {:?}", path.display(), start.elapsed());

    let report = builder.build(&pipeline);
    match format {
        OutputFormat::Text => {
            println!("{}", format!("Movie database: {}", path.display()).bold().blue());
            print!("{}", render_text(&report));
            println!();
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonOutput {
                file: path,
                report: &report,
            })
            .context("Failed to serialize report")?;
            println!("{}", json);
        }
    }
    Ok(())
}
