//! CLI definitions and entry point

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use eventchecker::adapters::{LogFacade, replay};
use eventchecker::config::{ExpectationFile, MatchOrder};
use eventchecker::output::{OutputMode, ReplayResult};

/// eventchecker - Assert event sequences from a runtime security sensor
#[derive(Parser, Debug)]
#[command(
    name = "eventchecker",
    version,
    about = "Assert event sequences from a runtime security sensor",
    long_about = "Replay a recorded event stream against an expectation file.\n\n\
                  Expectations declare which events must appear and whether they\n\
                  must appear in order. Unrelated events in between are allowed."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a JSON-lines event stream against an expectation file
    Replay {
        /// Expectation file (TOML)
        #[arg(short, long)]
        expect: PathBuf,

        /// Override the file's ordering: ordered, unordered
        #[arg(short, long)]
        ordering: Option<MatchOrder>,

        /// Event stream to read; stdin when omitted or "-"
        events: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Replay {
            expect,
            ordering,
            events,
        }) => replay_cmd(&expect, ordering, events.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": eventchecker::VERSION
                    })
                );
            } else {
                println!("eventchecker v{}", eventchecker::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            println!("eventchecker v{}", eventchecker::VERSION);
            println!("\nRun 'eventchecker --help' for usage");
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn replay_cmd(
    expect: &Path,
    ordering: Option<MatchOrder>,
    events: Option<&Path>,
    output_mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let file = ExpectationFile::load(expect)?;
    let ordering = ordering.unwrap_or(file.ordering);
    let mut checker = file.build_checker_with(ordering)?;
    let logger = LogFacade::new();

    let report = match events {
        Some(path) if path != Path::new("-") => {
            let stream = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            replay(BufReader::new(stream), &mut checker, Some(&logger))?
        },
        _ => replay(io::stdin().lock(), &mut checker, Some(&logger))?,
    };

    let result = ReplayResult::new(&report, ordering, file.expectations.len());
    result
        .render(output_mode)
        .context("failed to render replay result")?;

    Ok(if result.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
