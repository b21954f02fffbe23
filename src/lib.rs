// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod server;
pub mod types;

use std::io::Read;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::cli::{AnalyzeArgs, CliArgs, Command, ServeArgs};
use crate::config::{ConfigFile, load_raw_or_default};
use crate::dag::GraphAnalyzer;
use crate::errors::DagcheckError;
use crate::types::{AnalysisReport, PipelineData};

/// High-level entry point used by `main.rs`.
pub async fn run(args: CliArgs) -> Result<()> {
    match args.command.clone() {
        Some(Command::Analyze(analyze)) => run_analyze(&analyze),
        Some(Command::Serve(serve)) => run_serve(args.config.as_deref(), &serve).await,
        None => run_serve(args.config.as_deref(), &ServeArgs::default()).await,
    }
}

async fn run_serve(config_path: Option<&str>, serve: &ServeArgs) -> Result<()> {
    let cfg = resolve_config(config_path, serve)?;

    if serve.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    server::serve(cfg).await?;
    Ok(())
}

/// Load the config file (or defaults), apply CLI overrides, then validate.
pub fn resolve_config(config_path: Option<&str>, serve: &ServeArgs) -> Result<ConfigFile> {
    let mut raw = load_raw_or_default(config_path.map(Path::new))?;

    if let Some(bind) = serve.bind {
        raw.server.bind = bind;
    }
    if let Some(ref origin) = serve.allowed_origin {
        raw.cors.allowed_origin = origin.clone();
    }

    let cfg = ConfigFile::try_from(raw)?;
    Ok(cfg)
}

fn run_analyze(analyze: &AnalyzeArgs) -> Result<()> {
    let output = analyze_input(analyze)?;
    print!("{output}");
    Ok(())
}

/// Run `dagcheck analyze` and return what it prints.
pub fn analyze_input(analyze: &AnalyzeArgs) -> errors::Result<String> {
    let pipeline = load_pipeline(&analyze.input)?;
    let report = GraphAnalyzer::new().analyze_pipeline(&pipeline);

    if analyze.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| DagcheckError::Other(e.into()))?;
        Ok(format!("{json}\n"))
    } else {
        Ok(render_summary(&report))
    }
}

/// Read a pipeline body from a file, or from stdin when `input` is `-`.
pub fn load_pipeline(input: &str) -> errors::Result<PipelineData> {
    let contents = read_input(input)?;
    debug!(input, bytes = contents.len(), "pipeline input read");

    serde_json::from_str(&contents).map_err(|source| DagcheckError::JsonError {
        input: input_name(input).to_string(),
        source,
    })
}

fn read_input(input: &str) -> errors::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn input_name(input: &str) -> &str {
    if input == "-" { "stdin" } else { input }
}

/// Human-readable summary of a report, as printed by `dagcheck analyze`.
pub fn render_summary(report: &AnalysisReport) -> String {
    let verdict = if report.is_dag {
        "yes (the pipeline is a valid directed acyclic graph)"
    } else {
        "no (the pipeline contains a cycle)"
    };

    format!(
        "nodes:  {}\nedges:  {}\nis DAG: {}\n",
        report.num_nodes, report.num_edges, verdict
    )
}

/// Simple dry-run output: print the effective configuration.
fn print_dry_run(cfg: &ConfigFile) {
    println!("dagcheck dry-run");
    println!("  server.bind = {}", cfg.server.bind);
    println!("  cors.allowed_origin = {}", cfg.cors.allowed_origin);
    println!("  cors.allow_credentials = {}", cfg.cors.allow_credentials);
    println!();
    println!("routes:");
    println!("  GET  /");
    println!("  POST /pipelines/parse");

    debug!("dry-run complete (server not started)");
}
