use core::fmt::Debug;

/// Links from a node, or from the collection itself, to other nodes.
pub trait Refs: Clone + Debug {
    /// Creates links pointing nowhere.
    fn empty() -> Self;

    /// Returns true if no link is set.
    fn is_empty(&self) -> bool;

    /// Unsets all links.
    fn clear(&mut self);
}
