use crate::{CoreCol, Node, NodePtr, Variant};
use orx_pinned_vec::PinnedVec;

/// Policy which determines when the memory of closed nodes is reclaimed.
///
/// Two implementors are provided:
/// * [`MemoryReclaimOnThreshold`] reclaims holes whenever the utilization of the storage
///   falls below a constant threshold. The queue uses it by default.
/// * [`MemoryReclaimNever`] never reclaims holes, so that node positions stay fixed.
///   The tree relies on this since its node indices are held by callers.
///
/// [`MemoryReclaimOnThreshold`]: crate::MemoryReclaimOnThreshold
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
pub trait MemoryPolicy<V: Variant>: Clone + Default {
    /// Called right after the node at `closed_node_ptr` has been closed.
    ///
    /// Assume that **A** below stands for active nodes and **x** designates a closed node.
    /// If the underlying storage has the following layout:
    /// * `[ x, x, x, A, A, A, A ]`
    ///
    /// reclaiming reorganizes it into:
    /// * `[ A, A, A, A, x, x, x ]`
    ///
    /// and trims the storage:
    /// * `[ A, A, A, A ]`
    ///
    /// Returns true if any node has been moved; in which case all node positions
    /// held outside of the collection are invalid.
    fn reclaim_closed_nodes<P>(col: &mut CoreCol<V, P>, closed_node_ptr: &NodePtr<V>) -> bool
    where
        P: PinnedVec<Node<V>>;
}
