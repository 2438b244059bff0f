use super::policy::MemoryPolicy;
use crate::{CoreCol, Node, NodePtr, Variant};
use orx_pinned_vec::PinnedVec;

/// A do-nothing `MemoryPolicy` which never reclaims the memory of closed nodes,
/// leaving them as holes in the underlying storage.
///
/// Node positions never change under this policy, which is what allows the tree
/// to hand out long-lived node indices.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl<V: Variant> MemoryPolicy<V> for MemoryReclaimNever {
    #[inline(always)]
    fn reclaim_closed_nodes<P>(_col: &mut CoreCol<V, P>, _closed_node_ptr: &NodePtr<V>) -> bool
    where
        P: PinnedVec<Node<V>>,
    {
        false
    }
}
