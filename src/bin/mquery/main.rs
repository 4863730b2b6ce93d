mod cli;
mod output;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, OutputFormat};
use mquery::{ParserBuilder, QueryError, Summary, filter_history};
use output::Palette;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = !cli.no_color && cli.format == OutputFormat::Text && io::stdout().is_terminal();

    match run(&cli, Palette::new(color)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Query(err)) => {
            report_error(&err.to_string(), io::stderr().is_terminal() && !cli.no_color);
            ExitCode::from(1)
        }
        Err(RunError::Output(err)) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(RunError::Output(err)) => {
            report_error(&format!("failed to write output: {err}"), false);
            ExitCode::from(2)
        }
    }
}

enum RunError {
    Query(QueryError),
    Output(io::Error),
}

impl From<QueryError> for RunError {
    fn from(err: QueryError) -> Self {
        RunError::Query(err)
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::Output(err)
    }
}

fn run(cli: &Cli, palette: Palette) -> Result<(), RunError> {
    let history = ParserBuilder::new()
        .filename(&cli.file)
        .encoding(&cli.encoding)
        .header_marker(&cli.header_marker)
        .parse()?;

    let matcher = cli.criteria().predicate();
    let matching = filter_history(&history, &matcher);
    let summary = cli
        .summary
        .then(|| Summary::of(&matching))
        .transpose()?;

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Json => output::write_json(&mut stdout, &matching, summary.as_ref())?,
        OutputFormat::Text => {
            if cli.group_by_date {
                output::write_grouped(&mut stdout, &matching, palette)?;
            } else {
                output::write_listing(&mut stdout, &matching, palette)?;
            }
            if let Some(summary) = &summary {
                output::write_summary(&mut stdout, summary, palette)?;
            }
        }
    }
    stdout.flush()?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn report_error(message: &str, color: bool) {
    let mut err = io::stderr().lock();
    let _ = if color {
        writeln!(err, "{} {message}", "error:".red().bold())
    } else {
        writeln!(err, "error: {message}")
    };
}
