use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use serde::Serialize;

use crate::amount::Amount;
use crate::error::Error;
use crate::network::Network;
use crate::node::Node;
use crate::solution::Solution;

/// A minimum `source`/`sink` cut, read off the residual graph of a maximum flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MinCut<A> {
    /// Nodes still reachable from the source through positive residual capacity.
    pub source_side: Vec<Node>,
    /// Edges leaving the source side; all of them are saturated.
    pub edges: Vec<(Node, Node, A)>,
    pub capacity: A,
}

impl<A: Amount> Solution<A> {
    /// Derives the min cut certifying this solution. Its capacity equals [`Solution::max_flow`].
    pub fn min_cut(&self, network: &Network<A>, source: usize) -> Result<MinCut<A>, Error> {
        self.check_network(network)?;
        network.check_terminals(source, source)?;
        let n = network.node_count();
        let flow = self.flow();

        let mut reached = vec![false; n];
        reached[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if !reached[v] && flow.has_residual(network, u, v) {
                    reached[v] = true;
                    queue.push_back(v);
                }
            }
        }

        let edges: Vec<_> = network
            .edges()
            .filter(|(u, v, _)| reached[*u] && !reached[*v])
            .map(|(u, v, c)| (Node::new(u), Node::new(v), c))
            .collect();
        let capacity = edges.iter().try_fold(A::zero(), |acc, (_, _, c)| {
            acc.checked_add(c).ok_or(Error::ArithmeticOverflow)
        })?;

        Ok(MinCut {
            source_side: (0..n).filter(|v| reached[*v]).map(Node::new).collect(),
            edges,
            capacity,
        })
    }
}
