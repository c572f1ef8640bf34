use serde::Serialize;

use crate::amount::Amount;
use crate::error::{Error, InvalidInput};
use crate::flow::FlowMatrix;
use crate::network::Network;
use crate::trace::Trace;

/// Outcome of one engine run: the max-flow value, the trace that led to it and the final flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solution<A> {
    max_flow: A,
    trace: Trace<A>,
    flow: FlowMatrix<A>,
}

impl<A: Copy> Solution<A> {
    pub(crate) fn new(max_flow: A, trace: Trace<A>, flow: FlowMatrix<A>) -> Self {
        Self {
            max_flow,
            trace,
            flow,
        }
    }

    /// Sum of all bottlenecks.
    pub fn max_flow(&self) -> A {
        self.max_flow
    }

    pub fn trace(&self) -> &Trace<A> {
        &self.trace
    }

    pub fn flow(&self) -> &FlowMatrix<A> {
        &self.flow
    }

    pub fn into_parts(self) -> (A, Trace<A>, FlowMatrix<A>) {
        (self.max_flow, self.trace, self.flow)
    }
}

impl<A: Amount> Solution<A> {
    /// Rejects a network other than the one this solution was computed for, at least by size.
    pub(crate) fn check_network(&self, network: &Network<A>) -> Result<(), Error> {
        let solution = self.flow.node_count();
        if network.node_count() != solution {
            return Err(InvalidInput::NodeCountMismatch {
                network: network.node_count(),
                solution,
            }
            .into());
        }
        Ok(())
    }
}
