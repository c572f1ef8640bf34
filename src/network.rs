use alloc::vec::Vec;

use itertools::iproduct;
use serde::Deserialize;

use crate::amount::Amount;
use crate::error::{Error, InvalidInput};
use crate::node::Node;

/// A capacitated directed network stored as a dense, row-major `n x n` capacity matrix.
///
/// A capacity of zero means there is no edge. The matrix is validated on construction and is
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(
    try_from = "RawNetwork<A>",
    bound(deserialize = "A: Amount + Deserialize<'de>")
)]
pub struct Network<A> {
    nodes: usize,
    capacity: Vec<A>,
}

/// Unvalidated capacity rows, as they arrive from a caller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawNetwork<A> {
    pub capacity: Vec<Vec<A>>,
}

impl<A: Amount> Network<A> {
    pub fn new<R: AsRef<[A]>>(rows: &[R]) -> Result<Self, Error> {
        let nodes = rows.len();
        let mut capacity = Vec::with_capacity(nodes * nodes);

        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != nodes {
                return Err(InvalidInput::NotSquare {
                    row: u,
                    len: row.len(),
                    expected: nodes,
                }
                .into());
            }
            if let Some(v) = row.iter().position(|c| *c < A::zero()) {
                return Err(InvalidInput::NegativeCapacity {
                    from: Node::new(u),
                    to: Node::new(v),
                }
                .into());
            }
            capacity.extend_from_slice(row);
        }

        Ok(Self { nodes, capacity })
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn capacity(&self, u: usize, v: usize) -> A {
        self.capacity[u * self.nodes + v]
    }

    /// Rejects source/sink indices outside `0..n`.
    pub fn check_terminals(&self, source: usize, sink: usize) -> Result<(), Error> {
        if source >= self.nodes {
            Err(InvalidInput::SourceOutOfRange {
                index: source,
                nodes: self.nodes,
            }
            .into())
        } else if sink >= self.nodes {
            Err(InvalidInput::SinkOutOfRange {
                index: sink,
                nodes: self.nodes,
            }
            .into())
        } else {
            Ok(())
        }
    }

    /// All edges with a strictly positive capacity, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, A)> + '_ {
        iproduct!(0..self.nodes, 0..self.nodes)
            .map(move |(u, v)| (u, v, self.capacity(u, v)))
            .filter(|(_, _, c)| *c > A::zero())
    }
}

impl<A: Amount> TryFrom<RawNetwork<A>> for Network<A> {
    type Error = Error;

    fn try_from(raw: RawNetwork<A>) -> Result<Self, Self::Error> {
        Self::new(&raw.capacity)
    }
}
