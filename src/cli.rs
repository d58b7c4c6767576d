use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// The output formats supported by strandjump
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// Single line list of (qStart,qEnd,rStart,rEnd) tuples
    Text,

    /// JSON object with the alignment score and segments
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input with the query on the first line and the reference on the second line.
    /// Gzipped input is supported. If not given, reads from stdin.
    #[clap(help_heading = "Inputs")]
    pub input: Option<PathBuf>,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_type: OutputType,

    /// JSON file with alignment settings. Command line options take precedence.
    #[arg(short, long)]
    #[clap(help_heading = "Alignment configuration")]
    pub config: Option<PathBuf>,

    /// Maximum distance between the query position and the reference position of a new segment
    #[arg(short = 'j', long)]
    #[clap(help_heading = "Alignment configuration")]
    pub max_jump: Option<usize>,

    /// Segments not longer than this are not reported
    #[arg(short = 'l', long)]
    #[clap(help_heading = "Alignment configuration")]
    pub min_segment_length: Option<usize>,
}
