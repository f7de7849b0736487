//! Command-line interface for comdoc
//! Extracts documentation from the given files and prints one record per documented file.
//!
//! Usage:
//!   comdoc `<path>...` [--format `<format>`] [--config `<file>`] [--check-links] [-v]

use clap::{Arg, ArgAction, ArgMatches, Command};
use comdoc::docs::config::{ComdocConfig, Loader, OutputFormat};
use comdoc::docs::index::DocumentIndex;
use comdoc::docs::processor::{process_files, FileOutcome};
use comdoc::{Document, ProcessingError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("comdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts markdown documentation from source comments and markdown files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("paths")
                .help("Files to process")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./comdoc.toml")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: summary, json or yaml (default from configuration)")
                .value_parser(["summary", "json", "yaml"]),
        )
        .arg(
            Arg::new("check-links")
                .long("check-links")
                .help("Report wiki-links whose target document or section does not exist")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default();

    let outcomes = process_files(paths, &config).await;
    let mut failed = report_errors(&outcomes);

    let documents: Vec<&Document> = outcomes.iter().filter_map(|o| o.document()).collect();
    if let Err(e) = print_output(&outcomes, &documents, config.output.format) {
        eprintln!("Error formatting output: {}", e);
        return ExitCode::FAILURE;
    }

    if matches.get_flag("check-links") {
        failed |= report_broken_links(&documents);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<ComdocConfig, ProcessingError> {
    let mut loader = Loader::new().with_project_dir(".");
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.with_format(format.parse()?)?;
    }
    Ok(loader.build()?)
}

/// Print processing errors; returns whether there were any
fn report_errors(outcomes: &[FileOutcome]) -> bool {
    let mut failed = false;
    for outcome in outcomes {
        if let Err(e) = &outcome.result {
            eprintln!("Error: {}", e);
            failed = true;
        }
    }
    failed
}

fn print_output(
    outcomes: &[FileOutcome],
    documents: &[&Document],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Summary => {
            for outcome in outcomes {
                match &outcome.result {
                    Ok(Some(doc)) => println!("{}", doc.summary()),
                    Ok(None) => println!("{}: no documentation", outcome.path.display()),
                    Err(_) => {}
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(documents)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(documents)?),
    }
    Ok(())
}

/// Print unresolved wiki-links; returns whether there were any
fn report_broken_links(documents: &[&Document]) -> bool {
    let index = DocumentIndex::build(documents.iter().copied());
    if index.is_empty() {
        debug!("no documents to check links in");
        return false;
    }
    debug!(documents = index.len(), "checking wiki-links");
    let broken = index.broken_links();
    for broken_link in &broken {
        eprintln!(
            "Broken link in {}: {} ({})",
            broken_link.filename, broken_link.link, broken_link.resolution
        );
    }
    !broken.is_empty()
}
