use core::fmt::Debug;

pub mod bfs;
pub mod edmonds_karp;
pub mod push_relabel;

use crate::flow::FlowMatrix;
use crate::network::Network;

/// A path from source to sink and the amount of flow it can carry.
pub trait FlowPath {
    type Node;
    type Flow;
    type Iter: IntoIterator<Item = Self::Node>;

    fn nodes(&self) -> Self::Iter;
    fn flow(&self) -> Self::Flow;
}

/// A maximum flow algorithm over a validated [`Network`].
pub trait MaxFlowSolver {
    type Amount;
    type Error: Debug;

    /// Returns the value of a maximum `source -> sink` flow together with the flow that achieves
    /// it.
    fn max_flow(
        &mut self,
        network: &Network<Self::Amount>,
        source: usize,
        sink: usize,
    ) -> Result<(Self::Amount, FlowMatrix<Self::Amount>), Self::Error>;
}
