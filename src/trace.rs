use alloc::vec::Vec;
use core::slice;

use serde::Serialize;

use crate::node::Node;

/// New flow value on one path edge after an augmentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeUpdate<A> {
    pub from: Node,
    pub to: Node,
    pub flow: A,
}

/// One augmenting iteration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Iteration<A> {
    /// 1-based iteration number.
    pub step: usize,
    /// Source to sink.
    pub path: Vec<Node>,
    pub bottleneck: A,
    /// Walked from the sink back to the source.
    pub updates: Vec<EdgeUpdate<A>>,
    /// Amount added to the running total; always equal to `bottleneck`.
    pub added: A,
    /// Running total after this iteration.
    pub total: A,
}

/// Ordered record of every augmentation. Only the engine appends to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace<A> {
    iterations: Vec<Iteration<A>>,
}

impl<A> Trace<A> {
    pub(crate) fn new() -> Self {
        Self {
            iterations: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, iteration: Iteration<A>) {
        debug_assert_eq!(iteration.step, self.iterations.len() + 1);
        self.iterations.push(iteration);
    }

    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Iteration<A>> {
        self.iterations.iter()
    }

    pub fn as_slice(&self) -> &[Iteration<A>] {
        &self.iterations
    }
}

impl<'a, A> IntoIterator for &'a Trace<A> {
    type Item = &'a Iteration<A>;
    type IntoIter = slice::Iter<'a, Iteration<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
