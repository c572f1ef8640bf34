use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::algo::FlowPath;
use crate::amount::Amount;
use crate::flow::FlowMatrix;
use crate::network::Network;
use crate::node::Node;

/// A shortest source-to-sink path in the residual graph and its bottleneck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<A> {
    nodes: Vec<usize>,
    bottleneck: A,
}

impl<A: Amount> AugmentingPath<A> {
    // The first edge leaves the source, whose outgoing flow is never negative, so its
    // residual fits in `A` and clamping the later ones cannot change the minimum.
    fn new(network: &Network<A>, flow: &FlowMatrix<A>, nodes: Vec<usize>) -> Self {
        let bottleneck = nodes
            .windows(2)
            .map(|w| flow.residual(network, w[0], w[1]))
            .min()
            .unwrap_or_else(A::zero);
        Self { nodes, bottleneck }
    }

    /// Consecutive `(u, v)` pairs from source to sink.
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

impl<A: Amount> FlowPath for AugmentingPath<A> {
    type Node = Node;
    type Flow = A;
    type Iter = Vec<Node>;

    fn nodes(&self) -> Self::Iter {
        self.nodes.iter().copied().map(Node::new).collect()
    }

    fn flow(&self) -> Self::Flow {
        self.bottleneck
    }
}

/// Breadth-first search for the augmenting path with the fewest edges.
///
/// An edge `u -> v` is traversable iff its residual capacity is strictly positive. Neighbours are
/// scanned in ascending index order, so ties between equally short paths always resolve the same
/// way. The search stops as soon as the sink is reached. Returns `None` once the sink is
/// unreachable, i.e. the current flow is maximum.
pub fn shortest_augmenting_path<A: Amount>(
    network: &Network<A>,
    flow: &FlowMatrix<A>,
    source: usize,
    sink: usize,
) -> Option<AugmentingPath<A>> {
    let n = network.node_count();

    // fresh on every search
    let mut parent: Vec<Option<usize>> = vec![None; n];
    parent[source] = Some(source);
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        for v in 0..n {
            if parent[v].is_some() || !flow.has_residual(network, u, v) {
                continue;
            }
            parent[v] = Some(u);
            if v == sink {
                let nodes = reconstruct(&parent, source, sink);
                return Some(AugmentingPath::new(network, flow, nodes));
            }
            queue.push_back(v);
        }
    }

    None
}

// Walks predecessor links back from the sink, then flips the result into source-to-sink order.
fn reconstruct(parent: &[Option<usize>], source: usize, sink: usize) -> Vec<usize> {
    let mut path = vec![sink];
    let mut v = sink;
    while v != source {
        // every node on the chain was reached by the search, so it has a parent
        v = parent[v].unwrap_or(source);
        path.push(v);
    }
    path.reverse();
    path
}
