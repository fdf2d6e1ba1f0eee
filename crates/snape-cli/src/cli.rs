//! CLI argument definitions for the walkability map tooling.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "snape",
    version,
    about = "Walkability map tooling - classify paths, print styles, resolve shared links",
    long_about = "Offline companion to the walkability map.\n\n\
                  Classifies path features the way the map does at load time,\n\
                  prints the paint expressions its layers use, and resolves\n\
                  shareable links into the application state they encode."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify the path features of a GeoJSON FeatureCollection.
    Classify(ClassifyArgs),

    /// Print a map paint expression as JSON.
    Style(StyleArgs),

    /// Resolve a shared link into application state.
    Link(LinkArgs),
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// GeoJSON FeatureCollection to classify.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the classified collection (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the written GeoJSON.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Parser)]
pub struct StyleArgs {
    /// Which expression to print.
    #[arg(value_enum)]
    pub kind: StyleKindArg,

    /// Feature property to read (road kinds and scores only).
    #[arg(long = "attribute", value_name = "NAME")]
    pub attribute: Option<String>,

    /// Also print the colour legend.
    #[arg(long = "legend")]
    pub legend: bool,
}

#[derive(Parser)]
pub struct LinkArgs {
    /// The shared URL.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Change a parameter through the state cells, e.g. --set profile=SeparateWays.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StyleKindArg {
    Categories,
    RoadKinds,
    Scores,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
