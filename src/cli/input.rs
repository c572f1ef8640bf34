use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use csv::{ReaderBuilder, Trim};
use maxflow_trace::Network;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Header-less rows of capacities, one row per node
    Csv,
    /// `{"capacity": [[..]], "source": s, "sink": t}`
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

// Terminals may also come from the command line.
#[derive(Debug, Deserialize)]
struct Request {
    capacity: Vec<Vec<i64>>,
    source: Option<usize>,
    sink: Option<usize>,
}

#[derive(Debug)]
pub struct Problem {
    pub network: Network<i64>,
    pub source: usize,
    pub sink: usize,
}

/// Decodes a network and its terminals. Terminals given on the command line win over the ones
/// in a JSON request.
pub fn read_problem<R: Read>(
    reader: R,
    format: InputFormat,
    source: Option<usize>,
    sink: Option<usize>,
) -> Result<Problem, CliError> {
    let (rows, file_source, file_sink) = match format {
        InputFormat::Csv => (read_csv_rows(reader)?, None, None),
        InputFormat::Json => {
            let request: Request = serde_json::from_reader(reader)?;
            (request.capacity, request.source, request.sink)
        }
    };

    let source = source.or(file_source).ok_or(CliError::MissingTerminal("source"))?;
    let sink = sink.or(file_sink).ok_or(CliError::MissingTerminal("sink"))?;
    let network = Network::new(&rows)?;
    log::debug!(
        "read a network of {} nodes and {} edges",
        network.node_count(),
        network.edges().count()
    );

    Ok(Problem {
        network,
        source,
        sink,
    })
}

fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<Vec<i64>>, CliError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let rows: Result<Vec<Vec<i64>>, _> = rdr.deserialize().collect();
    Ok(rows?)
}
