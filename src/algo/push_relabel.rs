use alloc::collections::VecDeque;
use core::cmp::min;
use core::marker::PhantomData;

use itertools::iproduct;
use petgraph::graph::NodeIndex;
use petgraph::Graph;

use crate::algo::MaxFlowSolver;
use crate::amount::Amount;
use crate::error::Error;
use crate::flow::FlowMatrix;
use crate::network::Network;
use crate::node::Node;

/// FIFO push-relabel. Shares no code path with the augmenting-path engine, which makes it a
/// useful independent check of its results.
#[derive(Clone, Debug, Default)]
pub struct PushRelabel<A>(PhantomData<A>);

impl<A: Amount> PushRelabel<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

struct Height<A> {
    label: usize,
    excess: A,
}

type NodeId = NodeIndex<u32>;

struct State<'a, A> {
    network: &'a Network<A>,
    // One node per network node (same index), one arc per ordered pair that has capacity in
    // either direction. The graph only provides adjacency; flow lives in `flow`.
    graph: Graph<Height<A>, ()>,
    flow: FlowMatrix<A>,
    source: NodeId,
    sink: NodeId,
    active: VecDeque<NodeId>,
}

impl<'a, A: Amount> State<'a, A> {
    fn new(network: &'a Network<A>, source: usize, sink: usize) -> Result<Self, Error> {
        let n = network.node_count();
        let mut graph: Graph<Height<A>, ()> = Graph::with_capacity(n, 0);
        for _ in 0..n {
            graph.add_node(Height {
                label: 0,
                excess: A::zero(),
            });
        }
        for (u, v) in iproduct!(0..n, 0..n) {
            let linked = network.capacity(u, v) > A::zero() || network.capacity(v, u) > A::zero();
            if u != v && linked {
                graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
            }
        }

        let mut state = State {
            network,
            graph,
            flow: FlowMatrix::zeros(n),
            source: NodeIndex::new(source),
            sink: NodeIndex::new(sink),
            active: VecDeque::new(),
        };
        state.graph[state.source].label = n;

        // saturate every edge out of the source
        let mut nbrs = state.graph.neighbors(state.source).detach();
        while let Some(v) = nbrs.next_node(&state.graph) {
            let cap = network.capacity(source, v.index());
            if cap > A::zero() {
                state.flow.augment(source, v.index(), cap);
                state.add_excess(state.source, -cap)?;
                state.add_excess(v, cap)?;
            }
        }

        Ok(state)
    }

    fn has_residual(&self, u: NodeId, v: NodeId) -> bool {
        self.flow.has_residual(self.network, u.index(), v.index())
    }

    // The terminals' excess is never read; the flow value comes from the flow matrix.
    fn add_excess(&mut self, u: NodeId, amount: A) -> Result<(), Error> {
        if u == self.source || u == self.sink {
            return Ok(());
        }
        let was_idle = self.graph[u].excess <= A::zero();
        let node = &mut self.graph[u];
        node.excess = node
            .excess
            .checked_add(&amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if was_idle && node.excess > A::zero() {
            self.active.push_back(u);
        }
        Ok(())
    }

    fn push(&mut self, u: NodeId, v: NodeId) -> Result<(), Error> {
        // `excess` fits in `A`, so a clamped residual never decides the minimum
        let residual = self.flow.residual(self.network, u.index(), v.index());
        let amount = min(self.graph[u].excess, residual);
        debug_assert!(amount > A::zero());
        debug_assert_eq!(self.graph[u].label, self.graph[v].label + 1);

        self.flow.augment(u.index(), v.index(), amount);
        self.add_excess(u, -amount)?;
        self.add_excess(v, amount)
    }

    fn can_push(&self, u: NodeId, v: NodeId) -> bool {
        self.graph[u].label == self.graph[v].label + 1 && self.has_residual(u, v)
    }

    // Lifts `u` just above its lowest neighbour reachable through residual capacity. A node
    // holding excess always has one: the arc back along which the excess arrived.
    fn relabel(&mut self, u: NodeId) -> bool {
        let lowest = self
            .graph
            .neighbors(u)
            .filter(|v| self.has_residual(u, *v))
            .map(|v| self.graph[v].label)
            .min();
        match lowest {
            Some(label) => {
                self.graph[u].label = label + 1;
                true
            }
            None => false,
        }
    }

    fn discharge(&mut self, u: NodeId) -> Result<(), Error> {
        let mut nbrs = self.graph.neighbors(u).detach();
        while self.graph[u].excess > A::zero() {
            if let Some(v) = nbrs.next_node(&self.graph) {
                if self.can_push(u, v) {
                    self.push(u, v)?;
                }
            } else if self.relabel(u) {
                nbrs = self.graph.neighbors(u).detach();
            } else {
                log::warn!("node {} holds excess but has no residual arc", Node::new(u.index()));
                break;
            }
        }
        Ok(())
    }

    fn run(mut self) -> Result<(A, FlowMatrix<A>), Error> {
        while let Some(u) = self.active.pop_front() {
            self.discharge(u)?;
        }
        let value = self.flow.net_outflow(self.source.index());
        Ok((value, self.flow))
    }
}

impl<A: Amount> MaxFlowSolver for PushRelabel<A> {
    type Amount = A;
    type Error = Error;

    fn max_flow(
        &mut self,
        network: &Network<A>,
        source: usize,
        sink: usize,
    ) -> Result<(A, FlowMatrix<A>), Self::Error> {
        network.check_terminals(source, sink)?;
        if source == sink {
            return Ok((A::zero(), FlowMatrix::zeros(network.node_count())));
        }
        let (value, flow) = State::new(network, source, sink)?.run()?;
        log::debug!(
            "push-relabel max flow {} -> {} = {value}",
            Node::new(source),
            Node::new(sink)
        );
        Ok((value, flow))
    }
}
