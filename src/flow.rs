use alloc::vec;
use alloc::vec::Vec;

use itertools::iproduct;
use serde::Serialize;

use crate::amount::Amount;
use crate::error::Violation;
use crate::network::Network;
use crate::node::Node;

/// Flow assigned to every ordered pair of nodes.
///
/// Updates go through [`FlowMatrix::augment`], which keeps `flow[u][v] == -flow[v][u]`.
/// Residual capacities are never stored; they are derived from the network on demand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlowMatrix<A> {
    nodes: usize,
    flow: Vec<A>,
}

impl<A: Amount> FlowMatrix<A> {
    pub fn zeros(nodes: usize) -> Self {
        Self {
            nodes,
            flow: vec![A::zero(); nodes * nodes],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn get(&self, u: usize, v: usize) -> A {
        self.flow[u * self.nodes + v]
    }

    /// Whether `u -> v` can take more flow. Compares instead of subtracting, since the true
    /// residual of a reverse edge may not fit in `A`.
    pub fn has_residual(&self, network: &Network<A>, u: usize, v: usize) -> bool {
        network.capacity(u, v) > self.get(u, v)
    }

    /// `capacity[u][v] - flow[u][v]`, clamped to `A`'s maximum. Cancelling flow on the reverse
    /// edge can push the true value above that.
    pub fn residual(&self, network: &Network<A>, u: usize, v: usize) -> A {
        network.capacity(u, v).saturating_sub(&self.get(u, v))
    }

    /// Sends `amount` along `u -> v`, i.e. `-amount` along `v -> u`.
    pub fn augment(&mut self, u: usize, v: usize, amount: A) {
        let n = self.nodes;
        self.flow[u * n + v] += amount;
        self.flow[v * n + u] -= amount;
    }

    /// Sum of the flow leaving `node`. For the source this is the value of the flow.
    pub fn net_outflow(&self, node: usize) -> A {
        (0..self.nodes).map(|v| self.get(node, v)).sum()
    }

    /// Ordered pairs carrying strictly positive flow, in row-major order.
    pub fn positive_flows(&self) -> impl Iterator<Item = (Node, Node, A)> + '_ {
        iproduct!(0..self.nodes, 0..self.nodes)
            .map(move |(u, v)| (Node::new(u), Node::new(v), self.get(u, v)))
            .filter(|(_, _, f)| *f > A::zero())
    }

    /// Checks antisymmetry, capacity compliance and conservation at every node other than
    /// `source` and `sink`.
    pub fn check(&self, network: &Network<A>, source: usize, sink: usize) -> Result<(), Violation> {
        for (u, v) in iproduct!(0..self.nodes, 0..self.nodes) {
            if self.get(u, v) != -self.get(v, u) {
                return Err(Violation::Antisymmetry {
                    from: Node::new(u),
                    to: Node::new(v),
                });
            }
            if self.get(u, v) > network.capacity(u, v) {
                return Err(Violation::Capacity {
                    from: Node::new(u),
                    to: Node::new(v),
                });
            }
        }

        let unbalanced = (0..self.nodes)
            .filter(|x| *x != source && *x != sink)
            .find(|x| (0..self.nodes).map(|u| self.get(u, *x)).sum::<A>() != A::zero());
        match unbalanced {
            Some(x) => Err(Violation::Conservation(Node::new(x))),
            None => Ok(()),
        }
    }
}
