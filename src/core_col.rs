use crate::{NodePtr, Refs, Utilization, Variant, node::Node};
use orx_pinned_vec::PinnedVec;

/// Core collection of the self referential collection.
///
/// Holds the pinned node storage, the ends of the collection and the number of
/// active nodes. Node pointers handed to its methods must have been created by
/// this collection and point to nodes which have not been truncated away; every
/// container of this crate upholds this by validating external indices first.
pub struct CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    nodes: P,
    ends: V::Ends,
    len: usize,
}

impl<V, P> Default for CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty collection.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            nodes: P::default(),
            ends: Refs::empty(),
            len: 0,
        }
    }

    // get

    /// Returns current node utilization of the collection.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - self.len,
        }
    }

    /// Returns the number of active nodes of the collection.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not the collection has any active nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns a reference to the ends of the collection.
    #[inline(always)]
    pub fn ends(&self) -> &V::Ends {
        &self.ends
    }

    /// Returns true if the `node_ptr` points into the storage of this collection.
    #[inline(always)]
    pub fn contains_ptr(&self, node_ptr: &NodePtr<V>) -> bool {
        self.nodes.contains_ptr(node_ptr.ptr())
    }

    /// Returns the position of the node with the given `node_ptr`,
    /// None if the pointer does not belong to this collection.
    #[inline(always)]
    pub fn position_of(&self, node_ptr: &NodePtr<V>) -> Option<usize> {
        self.nodes.index_of_ptr(node_ptr.ptr())
    }

    /// Returns a reference to the node with the given `node_ptr`.
    #[inline(always)]
    pub(crate) fn node(&self, node_ptr: &NodePtr<V>) -> &Node<V> {
        debug_assert!(self.contains_ptr(node_ptr));
        unsafe { node_ptr.node() }
    }

    /// Returns a reference to the data of the node with the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the node is already closed.
    #[inline(always)]
    pub(crate) fn data(&self, node_ptr: &NodePtr<V>) -> &V::Item {
        self.node(node_ptr).data().expect("node is closed")
    }

    /// Returns the pointer of the node at the given `node_position`
    /// in the underlying nodes storage.
    ///
    /// # Panics
    ///
    /// Panics if the `node_position` is out of bounds.
    #[inline(always)]
    pub(crate) fn node_ptr_at_pos(&self, node_position: usize) -> NodePtr<V> {
        let ptr = self.nodes.get_ptr(node_position).expect("out-of-bounds");
        NodePtr::new(ptr as *const Node<V>)
    }

    // mut

    pub(crate) fn clear_core(&mut self) {
        self.len = 0;
        self.ends.clear();
        self.nodes.clear();
    }

    /// Returns a mutable reference to the underlying nodes storage.
    #[inline(always)]
    pub(crate) fn nodes_mut(&mut self) -> &mut P {
        &mut self.nodes
    }

    /// Returns a mutable reference to the ends of the collection.
    #[inline(always)]
    pub(crate) fn ends_mut(&mut self) -> &mut V::Ends {
        &mut self.ends
    }

    /// Returns a mutable reference to the node with the given `node_ptr`.
    #[inline(always)]
    pub(crate) fn node_mut(&mut self, node_ptr: &NodePtr<V>) -> &mut Node<V> {
        debug_assert!(self.contains_ptr(node_ptr));
        unsafe { node_ptr.node_mut() }
    }

    /// Returns a mutable reference to the data of the node with the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the node is already closed.
    #[inline(always)]
    pub(crate) fn data_mut(&mut self, node_ptr: &NodePtr<V>) -> &mut V::Item {
        self.node_mut(node_ptr).data_mut().expect("node is closed")
    }

    /// Pushes the element with the given `data` and returns its pointer.
    pub(crate) fn push(&mut self, data: V::Item) -> NodePtr<V> {
        self.len += 1;
        let ptr = self.nodes.push_get_ptr(Node::new_free_node(data));
        NodePtr::new(ptr as *const Node<V>)
    }

    /// Stores `data` in the closed node at the given `node_ptr`, making it active again.
    pub(crate) fn reopen(&mut self, node_ptr: &NodePtr<V>, data: V::Item) {
        self.node_mut(node_ptr).reopen(data);
        self.len += 1;
    }

    /// Closes the node at the given `node_ptr` and returns its data.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    #[inline(always)]
    pub(crate) fn close(&mut self, node_ptr: &NodePtr<V>) -> V::Item {
        let data = self.node_mut(node_ptr).close();
        self.len -= 1;
        data
    }

    /// Swaps the closed node at the `closed_position` with the active node
    /// at the `active_position`.
    pub(crate) fn move_node(&mut self, closed_position: usize, active_position: usize) {
        debug_assert!(closed_position < active_position);
        debug_assert!(self.nodes[closed_position].is_closed());
        debug_assert!(self.nodes[active_position].is_active());

        self.nodes.swap(active_position, closed_position);
    }
}
