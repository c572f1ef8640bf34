use alloc::string::String;

use displaydoc::Display;

use crate::node::Node;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid input: {0}
    InvalidInput(InvalidInput),
    /// Arithmetic overflow while computing residual capacity or total flow
    ArithmeticOverflow,
    /// Cross-check failed: {0}
    Mismatch(Mismatch),
}

/// Malformed networks, rejected before any search begins.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum InvalidInput {
    /// capacity matrix is not square, row {row} has {len} entries, expected {expected}
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// source index {index} is out of range for a network of {nodes} nodes
    SourceOutOfRange { index: usize, nodes: usize },
    /// sink index {index} is out of range for a network of {nodes} nodes
    SinkOutOfRange { index: usize, nodes: usize },
    /// negative capacity on edge {from} -> {to}
    NegativeCapacity { from: Node, to: Node },
    /// network has {network} nodes but the solution was computed for {solution}
    NodeCountMismatch { network: usize, solution: usize },
}

/// Disagreements found by [`crate::verify`].
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Mismatch {
    /// flow matrix violates an invariant: {0}
    Invariant(Violation),
    /// reported max flow {reported} differs from net outflow of the source {outflow}
    Outflow { reported: String, outflow: String },
    /// reported max flow {reported} differs from min cut capacity {cut}
    MinCut { reported: String, cut: String },
    /// reported max flow {reported} differs from push-relabel result {expected}
    Solver { reported: String, expected: String },
}

/// The first broken flow invariant found by [`crate::FlowMatrix::check`].
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Violation {
    /// flow on {from} -> {to} is not the negation of flow on {to} -> {from}
    Antisymmetry { from: Node, to: Node },
    /// flow on {from} -> {to} exceeds its capacity
    Capacity { from: Node, to: Node },
    /// flow is not conserved at node {0}
    Conservation(Node),
}

impl From<InvalidInput> for Error {
    fn from(e: InvalidInput) -> Self {
        Error::InvalidInput(e)
    }
}

impl From<Mismatch> for Error {
    fn from(e: Mismatch) -> Self {
        Error::Mismatch(e)
    }
}

impl core::error::Error for Error {}

impl core::error::Error for InvalidInput {}

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}
