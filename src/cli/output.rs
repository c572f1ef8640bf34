use std::io::Write;

use clap::ValueEnum;
use maxflow_trace::{
    render, render_iteration, Language, MinCut, Network, Node, Solution, Trace,
};
use serde::Serialize;

use crate::error::CliError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered trace followed by the max flow
    Text,
    /// `{"max_flow": .., "result": [..]}` with rendered trace lines
    Json,
    /// Structured iteration records, max flow and min cut
    Trace,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    En,
    Ru,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::English,
            Lang::Ru => Language::Russian,
        }
    }
}

// Same shape as the HTTP response body: `{"max_flow": .., "result": [..]}`.
#[derive(Serialize)]
struct Response {
    max_flow: i64,
    result: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    max_flow: i64,
    iterations: &'a Trace<i64>,
    min_cut: MinCut<i64>,
    /// Final flow on every edge that carries some.
    flow: Vec<(Node, Node, i64)>,
}

pub fn write_solution<W: Write>(
    mut out: W,
    format: OutputFormat,
    language: Language,
    network: &Network<i64>,
    source: usize,
    solution: &Solution<i64>,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            // a blank line opens every step
            for iteration in solution.trace() {
                writeln!(out)?;
                for line in render_iteration(iteration, language) {
                    writeln!(out, "{line}")?;
                }
            }
            writeln!(out, "{}", language.summary(solution.max_flow()))?;
        }
        OutputFormat::Json => {
            let response = Response {
                max_flow: solution.max_flow(),
                result: render(solution.trace(), language),
            };
            serde_json::to_writer_pretty(&mut out, &response)?;
            writeln!(out)?;
        }
        OutputFormat::Trace => {
            let report = Report {
                max_flow: solution.max_flow(),
                iterations: solution.trace(),
                min_cut: solution.min_cut(network, source)?,
                flow: solution.flow().positive_flows().collect(),
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxflow_trace::EdmondsKarp;
    use serde_json::{json, Value};

    fn solve(rows: &[[i64; 2]]) -> (Network<i64>, Solution<i64>) {
        let network = Network::new(rows).unwrap();
        let solution = EdmondsKarp::new().solve(&network, 0, 1).unwrap();
        (network, solution)
    }

    fn write(format: OutputFormat, language: Language) -> String {
        let (network, solution) = solve(&[[0, 5], [0, 0]]);
        let mut buf = Vec::new();
        write_solution(&mut buf, format, language, &network, 0, &solution).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_ends_with_summary() {
        let text = write(OutputFormat::Text, Language::English);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Step 1: augmenting path found");
        assert_eq!(lines[2], "Augmenting path: 1 -> 2");
        assert_eq!(lines[8], "Maximum flow: 5");
    }

    #[test]
    fn text_separates_steps_with_blank_lines() {
        let network = Network::new(&[[0, 3, 2, 0], [0, 0, 0, 3], [0, 1, 0, 2], [0, 0, 0, 0]])
            .unwrap();
        let solution = EdmondsKarp::new().solve(&network, 0, 3).unwrap();
        let mut buf = Vec::new();
        write_solution(&mut buf, OutputFormat::Text, Language::English, &network, 0, &solution)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let blank: Vec<_> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| line.is_empty())
            .map(|(i, _)| i)
            .collect();
        // six lines per step plus one per edge of its two-edge path
        assert_eq!(blank, vec![0, 9]);
        assert!(text.ends_with("Maximum flow: 5\n"));
    }

    #[test]
    fn json_matches_response_shape() {
        let text = write(OutputFormat::Json, Language::Russian);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["max_flow"], json!(5));
        assert_eq!(
            value["result"][0],
            json!("Шаг 1: Найдена увеличивающая цепь")
        );
        assert_eq!(value["result"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn trace_report_is_structured() {
        let text = write(OutputFormat::Trace, Language::English);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["max_flow"], json!(5));
        assert_eq!(value["iterations"][0]["path"], json!([1, 2]));
        assert_eq!(value["iterations"][0]["bottleneck"], json!(5));
        assert_eq!(value["iterations"][0]["updates"][0], json!({"from": 1, "to": 2, "flow": 5}));
        assert_eq!(value["min_cut"]["capacity"], json!(5));
        assert_eq!(value["min_cut"]["source_side"], json!([1]));
        assert_eq!(value["flow"], json!([[1, 2, 5]]));
    }

    #[test]
    fn empty_trace_still_reports_zero() {
        let (network, solution) = solve(&[[0, 0], [0, 0]]);
        let mut buf = Vec::new();
        write_solution(
            &mut buf,
            OutputFormat::Json,
            Language::English,
            &network,
            0,
            &solution,
        )
        .unwrap();
        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value, json!({"max_flow": 0, "result": []}));
    }
}
