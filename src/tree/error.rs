use crate::NodeIdxError;
use core::fmt::Display;

/// Errors of the checked tree operations.
///
/// Both cases are contract violations of the caller; the unchecked counterparts
/// of the operations panic instead of returning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A node index does not refer to a live node of the tree.
    InvalidNode(NodeIdxError),
    /// The child to attach is the node itself or one of its ancestors; attaching it
    /// would create an ownership cycle which could never be released.
    WouldCycle,
}

impl From<NodeIdxError> for TreeError {
    fn from(value: NodeIdxError) -> Self {
        Self::InvalidNode(value)
    }
}

impl Display for TreeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidNode(e) => write!(f, "invalid tree node index: {e}"),
            Self::WouldCycle => write!(f, "attaching the child would create a cycle"),
        }
    }
}

impl core::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidNode(e) => Some(e),
            Self::WouldCycle => None,
        }
    }
}
