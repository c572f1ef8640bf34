use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::algo::bfs::shortest_augmenting_path;
use crate::algo::{FlowPath, MaxFlowSolver};
use crate::amount::Amount;
use crate::error::Error;
use crate::flow::FlowMatrix;
use crate::network::Network;
use crate::node::Node;
use crate::solution::Solution;
use crate::trace::{EdgeUpdate, Iteration, Trace};

/// Ford-Fulkerson with shortest (fewest-edges) augmenting paths.
///
/// Every iteration raises the total by a strictly positive bottleneck and the number of
/// augmentations is bounded by `O(V * E)`, so the loop always terminates.
#[derive(Clone, Debug, Default)]
pub struct EdmondsKarp<A>(PhantomData<A>);

impl<A: Amount> EdmondsKarp<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }

    /// Computes a maximum flow and records every augmentation in the returned trace.
    ///
    /// `source == sink` is defined as a flow of zero with an empty trace.
    pub fn solve(
        &self,
        network: &Network<A>,
        source: usize,
        sink: usize,
    ) -> Result<Solution<A>, Error> {
        network.check_terminals(source, sink)?;

        let mut flow = FlowMatrix::zeros(network.node_count());
        let mut trace = Trace::new();
        let mut max_flow = A::zero();

        if source == sink {
            log::debug!(
                "source and sink are both node {}, nothing to augment",
                Node::new(source)
            );
            return Ok(Solution::new(max_flow, trace, flow));
        }

        while let Some(path) = shortest_augmenting_path(network, &flow, source, sink) {
            let bottleneck = path.flow();
            debug_assert!(bottleneck > A::zero());

            // same order the flows are reported in: from the sink back to the source
            let updates: Vec<_> = path
                .edges()
                .rev()
                .map(|(u, v)| {
                    flow.augment(u, v, bottleneck);
                    log::trace!("{} --> {} : {}", Node::new(u), Node::new(v), flow.get(u, v));
                    EdgeUpdate {
                        from: Node::new(u),
                        to: Node::new(v),
                        flow: flow.get(u, v),
                    }
                })
                .collect();

            max_flow = max_flow
                .checked_add(&bottleneck)
                .ok_or(Error::ArithmeticOverflow)?;

            let step = trace.len() + 1;
            log::debug!("step {step}: bottleneck {bottleneck}, total {max_flow}");

            trace.push(Iteration {
                step,
                path: path.nodes(),
                bottleneck,
                updates,
                added: bottleneck,
                total: max_flow,
            });
        }

        log::info!(
            "max flow {} -> {} = {max_flow} after {} augmentation(s)",
            Node::new(source),
            Node::new(sink),
            trace.len()
        );

        Ok(Solution::new(max_flow, trace, flow))
    }
}

impl<A: Amount> MaxFlowSolver for EdmondsKarp<A> {
    type Amount = A;
    type Error = Error;

    fn max_flow(
        &mut self,
        network: &Network<A>,
        source: usize,
        sink: usize,
    ) -> Result<(A, FlowMatrix<A>), Self::Error> {
        let (max_flow, _, flow) = self.solve(network, source, sink)?.into_parts();
        Ok((max_flow, flow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn records_each_augmentation() {
        let network =
            Network::new(&[[0, 3, 2, 0], [0, 0, 0, 3], [0, 1, 0, 2], [0, 0, 0, 0]]).unwrap();
        let solution = EdmondsKarp::new().solve(&network, 0, 3).unwrap();

        assert_eq!(solution.max_flow(), 5);
        assert_eq!(solution.trace().len(), 2);

        let first = &solution.trace().as_slice()[0];
        assert_eq!(first.step, 1);
        assert_eq!(first.path, vec![Node::new(0), Node::new(1), Node::new(3)]);
        assert_eq!(first.bottleneck, 3);
        assert_eq!(first.total, 3);
        assert_eq!(
            first.updates,
            vec![
                EdgeUpdate {
                    from: Node::new(1),
                    to: Node::new(3),
                    flow: 3
                },
                EdgeUpdate {
                    from: Node::new(0),
                    to: Node::new(1),
                    flow: 3
                },
            ]
        );

        let second = &solution.trace().as_slice()[1];
        assert_eq!(second.path, vec![Node::new(0), Node::new(2), Node::new(3)]);
        assert_eq!(second.bottleneck, 2);
        assert_eq!(second.added, 2);
        assert_eq!(second.total, 5);
    }

    #[test]
    fn source_equal_to_sink_is_zero() {
        let network = Network::new(&[[0, 7], [7, 0]]).unwrap();
        let solution = EdmondsKarp::new().solve(&network, 1, 1).unwrap();
        assert_eq!(solution.max_flow(), 0);
        assert!(solution.trace().is_empty());
    }

    #[test]
    fn out_of_range_terminals_fail_before_search() {
        let network = Network::new(&[[0, 7], [0, 0]]).unwrap();
        let err = EdmondsKarp::new().solve(&network, 0, 2).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn total_overflow_is_an_error() {
        fn two_paths<A: Amount>(cap: A) -> Network<A> {
            let z = A::zero();
            Network::new(&[[z, cap, cap, z], [z, z, z, cap], [z, z, z, cap], [z, z, z, z]]).unwrap()
        }

        assert_eq!(
            EdmondsKarp::new().solve(&two_paths(i32::MAX), 0, 3),
            Err(Error::ArithmeticOverflow)
        );

        let wide = two_paths(i64::from(i32::MAX));
        let solution = EdmondsKarp::new().solve(&wide, 0, 3).unwrap();
        assert_eq!(solution.max_flow(), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn saturated_two_cycle_does_not_overflow() {
        let m = i64::MAX;
        let network = Network::new(&[
            [0, 1, 0, 0, 1],
            [0, 0, m, 0, 0],
            [0, m, 0, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
        ])
        .unwrap();
        let solution = EdmondsKarp::new().solve(&network, 0, 3).unwrap();

        assert_eq!(solution.max_flow(), 1);
        assert_eq!(solution.trace().len(), 1);
        assert_eq!(
            solution.trace().as_slice()[0].path,
            vec![Node::new(0), Node::new(1), Node::new(2), Node::new(3)]
        );
        assert_eq!(crate::verify(&network, 0, 3, &solution), Ok(()));
    }

    #[test]
    fn solver_trait_returns_flow() {
        let network = Network::new(&[[0, 5], [0, 0]]).unwrap();
        let (value, flow) = EdmondsKarp::new().max_flow(&network, 0, 1).unwrap();
        assert_eq!(value, 5);
        assert_eq!(flow.get(0, 1), 5);
        assert_eq!(flow.get(1, 0), -5);
    }
}
