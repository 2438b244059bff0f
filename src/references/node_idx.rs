use super::NodePtr;
use crate::{MemoryPolicy, MemoryState, Node, SelfRefCol, Variant};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

/// A node index providing checked and constant time access to a node of the
/// self referential collection.
///
/// The index remembers the memory state of the collection at the time it was
/// created. Whenever the collection resets or compacts its storage, the state
/// advances and all prior indices are detected as invalid rather than silently
/// pointing at another node.
///
/// It also remembers the generation of the node, which tells apart the node it was
/// created for from a later node reusing the same position.
pub struct NodeIdx<V: Variant> {
    ptr: *mut Node<V>,
    state: MemoryState,
    generation: usize,
}

impl<V: Variant> core::hash::Hash for NodeIdx<V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
        self.state.hash(state);
        self.generation.hash(state);
    }
}

// Only the pointer is copied, so "V" does not need to be copy itself.
impl<V: Variant> Copy for NodeIdx<V> {}

impl<V: Variant> Clone for NodeIdx<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> Debug for NodeIdx<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeIdx")
            .field("ptr", &self.ptr)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<V: Variant> PartialEq for NodeIdx<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.state == other.state && self.generation == other.generation
    }
}

impl<V: Variant> Eq for NodeIdx<V> {}

impl<V> NodeIdx<V>
where
    V: Variant,
{
    /// Creates a new index for the node at the given `node_ptr` with the given `generation`
    /// and the collection with the given `state`.
    #[inline(always)]
    pub(crate) fn new(state: MemoryState, node_ptr: &NodePtr<V>, generation: usize) -> Self {
        Self {
            ptr: node_ptr.ptr_mut(),
            state,
            generation,
        }
    }

    /// Checks whether or not the `state` of the index matches the given one.
    #[inline(always)]
    pub fn is_in_state(&self, state: MemoryState) -> bool {
        self.state == state
    }

    /// Checks whether or not the index was created for the given `generation` of its node.
    #[inline(always)]
    pub(crate) fn is_of_generation(&self, generation: usize) -> bool {
        self.generation == generation
    }

    /// Converts the node index into a node pointer.
    #[inline(always)]
    pub(crate) fn node_ptr(&self) -> NodePtr<V> {
        NodePtr::new(self.ptr)
    }

    /// Returns true only if this index is valid for the given `collection`.
    ///
    /// A node index is valid iff all of the following hold:
    ///
    /// * It is created from the given `collection`.
    /// * Memory state of the `collection` has not changed since this index was created.
    /// * The node it points to is still active and has not been reused since.
    #[inline(always)]
    pub fn is_valid_for<M, P>(&self, collection: &SelfRefCol<V, M, P>) -> bool
    where
        M: MemoryPolicy<V>,
        P: PinnedVec<Node<V>>,
    {
        collection.try_node_ptr(self).is_ok()
    }
}
