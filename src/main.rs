use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Subscriber};
use tracing_subscriber::filter::FilterFn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Registry};

use strandjump::aligner::{AlignmentConfig, JumpAligner};
use strandjump::io::{open_input, read_sequence_pair, write_json, write_text};

mod cli;

use cli::{CliArgs, OutputType};

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Per-state search events are only shown at the highest verbosity
///
/// This only has an effect when `RUST_LOG` enables trace output while `-v` is given fewer than
/// three times, since the default level drops trace events anyway.
fn search_state_filter(verbose: u8) -> FilterFn<impl Fn(&tracing::Metadata<'_>) -> bool> {
    FilterFn::new(move |metadata: &tracing::Metadata<'_>| {
        let is_search = metadata.target().starts_with("strandjump::aligner::search");
        let is_trace = *metadata.level() == tracing::Level::TRACE;

        !(is_search && is_trace) || verbose >= 3
    })
}

/// Build our tracing subscriber with stderr logging.
fn build_subscriber(verbose: u8) -> Result<impl Subscriber + for<'span> LookupSpan<'span>> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))?;

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(search_state_filter(verbose))
        .with_filter(filter_layer);

    Ok(Registry::default().with(stderr_log))
}

fn load_config(args: &CliArgs) -> Result<AlignmentConfig> {
    let mut config = match &args.config {
        Some(path) => AlignmentConfig::from_json_file(path)
            .with_context(|| format!("Could not load configuration from {path:?}"))?,
        None => AlignmentConfig::default(),
    };

    if let Some(max_jump) = args.max_jump {
        config.max_jump = max_jump;
    }

    if let Some(min_segment_length) = args.min_segment_length {
        config.min_segment_length = min_segment_length;
    }

    Ok(config)
}

fn run(args: &CliArgs) -> Result<()> {
    build_subscriber(args.verbose)?.init();

    let config = load_config(args)?;
    info!(?config, "Alignment configuration");

    let reader = open_input(args.input.as_deref())
        .context("Could not open input")?;
    let (query, reference) = read_sequence_pair(reader)?;

    let aligner = JumpAligner::new(config);
    let result = aligner.align(&query, &reference)?;
    info!(
        score = ?result.score,
        num_segments = result.segments.len(),
        num_visited = result.num_visited,
        num_queued = result.num_queued,
        "Done."
    );

    // Determine where to write the output to
    let mut writer: Box<dyn Write> = if let Some(path) = &args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        Box::new(File::create(path).map(BufWriter::new)?)
    } else {
        Box::new(io::stdout().lock())
    };

    match args.output_type {
        OutputType::Text => write_text(&mut writer, &result)?,
        OutputType::Json => write_json(&mut writer, &result)?,
    }

    writer.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
