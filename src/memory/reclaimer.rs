use crate::{CoreCol, Node, Variant};
use orx_pinned_vec::PinnedVec;

/// Reorganizes the nodes of a collection so that all active nodes occupy the
/// leading positions of the storage, relinking them accordingly.
///
/// The reclaimer only moves nodes; truncating the trailing holes is left to the
/// memory policy calling it.
pub trait MemoryReclaimer<V>: Clone + Default
where
    V: Variant,
{
    /// Moves active nodes to the front of the storage and fixes all links.
    ///
    /// Returns true if any node has been moved.
    fn reclaim_nodes<P>(col: &mut CoreCol<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>;
}
