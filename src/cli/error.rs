use std::io;

use displaydoc::Display;

#[derive(Debug, Display)]
pub enum CliError {
    /// could not open {path}: {err}
    Open { path: String, err: io::Error },
    /// could not write output: {0}
    Write(io::Error),
    /// malformed CSV input: {0}
    Csv(csv::Error),
    /// malformed JSON: {0}
    Json(serde_json::Error),
    /// no {0} node given, pass it with --{0}
    MissingTerminal(&'static str),
    /// {0}
    MaxFlow(maxflow_trace::Error),
}

impl std::error::Error for CliError {}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Csv(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<maxflow_trace::Error> for CliError {
    fn from(e: maxflow_trace::Error) -> Self {
        CliError::MaxFlow(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Write(e)
    }
}
