#![warn(clippy::all, clippy::pedantic)]
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use maxflow_trace::{verify, EdmondsKarp};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod error;
mod input;
mod output;

use crate::error::CliError;
use crate::input::{read_problem, InputFormat};
use crate::output::{write_solution, Lang, OutputFormat};

/// Computes the maximum flow of a capacity matrix and prints every augmenting step.
#[derive(Debug, Parser)]
#[command(name = "maxflow-cli", version, about)]
struct Cli {
    /// Network file, or `-` for standard input
    input: PathBuf,

    /// Input format; guessed from the file extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// 0-based source node (overrides the one in a JSON request)
    #[arg(short, long)]
    source: Option<usize>,

    /// 0-based sink node (overrides the one in a JSON request)
    #[arg(short = 't', long)]
    sink: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Language of the rendered trace
    #[arg(long, value_enum, default_value_t = Lang::En)]
    lang: Lang,

    /// Cross-check the result against push-relabel and the min cut
    #[arg(long)]
    verify: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn open(path: &Path) -> Result<Box<dyn Read>, CliError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|err| CliError::Open {
        path: path.display().to_string(),
        err,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let format = cli
        .format
        .unwrap_or_else(|| InputFormat::from_path(&cli.input));
    let problem = read_problem(open(&cli.input)?, format, cli.source, cli.sink)?;

    let solution = EdmondsKarp::new().solve(&problem.network, problem.source, problem.sink)?;

    if cli.verify {
        verify(&problem.network, problem.source, problem.sink, &solution)?;
        log::info!("result verified");
    }

    write_solution(
        io::stdout().lock(),
        cli.output,
        cli.lang.into(),
        &problem.network,
        problem.source,
        &solution,
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(
        log_level(cli.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::parse_from([
            "maxflow-cli",
            "net.csv",
            "-s",
            "0",
            "-t",
            "3",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.source, Some(0));
        assert_eq!(cli.sink, Some(3));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(log_level(cli.verbose), LevelFilter::Debug);
        assert!(!cli.verify);
    }
}
