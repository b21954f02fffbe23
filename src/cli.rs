// src/cli.rs

//! CLI argument parsing using `clap`.

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for `dagcheck`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagcheck",
    version,
    about = "Check whether a pipeline graph is a DAG, over HTTP or from the command line.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Dagcheck.toml` in the current directory is used when it
    /// exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGCHECK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// What to do. Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Analyse a pipeline JSON document and print the report.
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides `[server].bind`.
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Origin allowed by CORS; overrides `[cors].allowed_origin`.
    #[arg(long, value_name = "ORIGIN")]
    pub allowed_origin: Option<String>,

    /// Load + validate config, print it, but don't start the server.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// JSON file with `nodes` and `edges`; `-` reads stdin.
    #[arg(long, short, value_name = "PATH", default_value = "-")]
    pub input: String,

    /// Print the report as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
