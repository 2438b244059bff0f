use crate::{CoreCol, MemoryPolicy, MemoryState, Node, NodeIdx, NodeIdxError, NodePtr, Variant};
use core::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// `SelfRefCol` is the node storage shared by the containers of this crate.
///
/// It is defined by three generic arguments:
/// * `V`: the [`Variant`] defining the item type and the links among nodes,
/// * `M`: the [`MemoryPolicy`] deciding when holes left by closed nodes are reclaimed,
/// * `P`: the pinned vector storing the nodes; pinned storage is what keeps node
///   pointers valid while new nodes are pushed.
///
/// On top of its core it tracks the [`MemoryState`]: each time node positions are
/// invalidated, either by a memory reclaim or by clearing, the state advances so that
/// outstanding [`NodeIdx`] values are recognized as stale.
pub struct SelfRefCol<V, M, P = SplitVec<Node<V>, Recursive>>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    core: CoreCol<V, P>,
    phantom: PhantomData<M>,
    state: MemoryState,
}

impl<V, M, P> Default for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, M, P> Deref for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    type Target = CoreCol<V, P>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<V, M, P> DerefMut for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<V, M, P> SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty collection.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            core: CoreCol::new(),
            phantom: PhantomData,
            state: MemoryState::default(),
        }
    }

    /// Returns the current memory state of the collection.
    #[inline(always)]
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Creates an index for the node at `node_ptr` in the current memory state.
    #[inline(always)]
    pub(crate) fn node_idx_for(&self, node_ptr: &NodePtr<V>) -> NodeIdx<V> {
        let generation = self.core.node(node_ptr).generation();
        NodeIdx::new(self.state, node_ptr, generation)
    }

    /// Validates the `idx` and returns the pointer of the node it refers to.
    ///
    /// The checks are in order:
    /// * the index is created in the current memory state, otherwise `ReorganizedCollection`;
    /// * the node belongs to the storage of this collection, otherwise `OutOfBounds`;
    /// * the node is still active and it is the same generation of the node the index
    ///   was created for, otherwise `RemovedNode`.
    pub fn try_node_ptr(&self, idx: &NodeIdx<V>) -> Result<NodePtr<V>, NodeIdxError> {
        let ptr = idx.node_ptr();
        match (idx.is_in_state(self.state), self.core.contains_ptr(&ptr)) {
            (false, _) => Err(NodeIdxError::ReorganizedCollection),
            (true, false) => Err(NodeIdxError::OutOfBounds),
            (true, true) => {
                let node = self.core.node(&ptr);
                match node.is_active() && idx.is_of_generation(node.generation()) {
                    true => Ok(ptr),
                    false => Err(NodeIdxError::RemovedNode),
                }
            }
        }
    }

    /// Closes the node at the given `node_ptr` and returns its data; then lets the
    /// memory policy decide whether or not to reclaim the holes.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub(crate) fn close_and_reclaim(&mut self, node_ptr: &NodePtr<V>) -> V::Item {
        let data = self.core.close(node_ptr);

        let nodes_moved = M::reclaim_closed_nodes(&mut self.core, node_ptr);
        if nodes_moved {
            self.state = self.state.successor_state();
        }

        data
    }

    /// Clears the storage and advances the memory state; hence, every index created
    /// so far becomes invalid.
    ///
    /// Data of nodes which are still active is dropped without any further handling;
    /// the containers take out and dispose such data before calling this method.
    pub(crate) fn clear(&mut self) {
        self.core.clear_core();
        self.state = self.state.successor_state();
    }
}
