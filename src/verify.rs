use alloc::string::ToString;

use crate::algo::push_relabel::PushRelabel;
use crate::algo::MaxFlowSolver;
use crate::amount::Amount;
use crate::error::{Error, Mismatch};
use crate::network::Network;
use crate::solution::Solution;

/// Audits an engine result.
///
/// Checks the flow invariants, that the reported value equals both the net outflow of the source
/// and the capacity of the derived min cut, and that an independent push-relabel run agrees.
pub fn verify<A: Amount>(
    network: &Network<A>,
    source: usize,
    sink: usize,
    solution: &Solution<A>,
) -> Result<(), Error> {
    solution.check_network(network)?;
    network.check_terminals(source, sink)?;
    let reported = solution.max_flow();

    solution
        .flow()
        .check(network, source, sink)
        .map_err(Mismatch::Invariant)?;

    if source == sink {
        return if reported == A::zero() && solution.trace().is_empty() {
            Ok(())
        } else {
            Err(Mismatch::Solver {
                reported: reported.to_string(),
                expected: A::zero().to_string(),
            }
            .into())
        };
    }

    let outflow = solution.flow().net_outflow(source);
    if outflow != reported {
        return Err(Mismatch::Outflow {
            reported: reported.to_string(),
            outflow: outflow.to_string(),
        }
        .into());
    }

    let cut = solution.min_cut(network, source)?;
    if cut.capacity != reported {
        return Err(Mismatch::MinCut {
            reported: reported.to_string(),
            cut: cut.capacity.to_string(),
        }
        .into());
    }

    let expected = cross_check(&mut PushRelabel::new(), network, source, sink)?;
    if expected != reported {
        return Err(Mismatch::Solver {
            reported: reported.to_string(),
            expected: expected.to_string(),
        }
        .into());
    }

    log::debug!("verified max flow {reported}: outflow, min cut and push-relabel agree");
    Ok(())
}

fn cross_check<A, S>(
    solver: &mut S,
    network: &Network<A>,
    source: usize,
    sink: usize,
) -> Result<A, Error>
where
    A: Amount,
    S: MaxFlowSolver<Amount = A, Error = Error>,
{
    let (value, flow) = solver.max_flow(network, source, sink)?;
    flow.check(network, source, sink).map_err(Mismatch::Invariant)?;
    Ok(value)
}
