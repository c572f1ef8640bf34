use core::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// A node of the network.
///
/// Internally nodes are 0-based matrix indices. Everything shown to a person (trace lines,
/// serialized paths, error messages) uses 1-based labels.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Node(usize);

impl Node {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn label(self) -> usize {
        self.0 + 1
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.label() as u64)
    }
}
