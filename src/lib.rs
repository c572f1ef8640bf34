//! Maximum flow via Edmonds-Karp, with a structured trace of every augmentation.
//!
//! ```
//! use maxflow_trace::{compute, render, Language};
//!
//! let solution = compute(&[[0, 5], [0, 0]], 0, 1).unwrap();
//! assert_eq!(solution.max_flow(), 5);
//! assert_eq!(render(solution.trace(), Language::English)[1], "Augmenting path: 1 -> 2");
//! ```

#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
mod amount;
mod error;
mod flow;
mod min_cut;
mod network;
mod node;
mod render;
mod solution;
mod trace;
mod verify;

pub use crate::algo::edmonds_karp::EdmondsKarp;
pub use crate::algo::push_relabel::PushRelabel;
pub use crate::algo::{FlowPath, MaxFlowSolver};
pub use crate::amount::Amount;
pub use crate::error::{Error, InvalidInput, Mismatch, Violation};
pub use crate::flow::FlowMatrix;
pub use crate::min_cut::MinCut;
pub use crate::network::{Network, RawNetwork};
pub use crate::node::Node;
pub use crate::render::{render, render_iteration, Language};
pub use crate::solution::Solution;
pub use crate::trace::{EdgeUpdate, Iteration, Trace};
pub use crate::verify::verify;

/// Computes the maximum `source -> sink` flow through the network given by the `capacity` rows.
///
/// The matrix must be square with non-negative entries and both terminals must be in `0..n`;
/// anything else fails with [`Error::InvalidInput`] before any search begins. `source == sink`
/// yields a flow of zero and an empty trace.
pub fn compute<A, R>(capacity: &[R], source: usize, sink: usize) -> Result<Solution<A>, Error>
where
    A: Amount,
    R: AsRef<[A]>,
{
    let network = Network::new(capacity)?;
    EdmondsKarp::new().solve(&network, source, sink)
}
