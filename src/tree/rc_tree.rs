use super::{Branch, TreeError, TreeIdx, TreePtr, TreeSlot, TreeVariant};
use crate::{Disposal, MemoryReclaimNever, MemoryState, Node, Owned, SelfRefCol, Utilization};
use alloc::vec::Vec;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

const INVALID_IDX: &str = "node index must refer to a live node of this tree";

/// A binary tree of reference counted nodes with parent back-links.
///
/// All nodes live in the storage of the `RcTree` and are addressed by [`TreeIdx`] handles.
/// Each node
/// * holds an optional value together with its [`Disposal`],
/// * owns up to two children; attaching a child retains it and detaching releases it,
/// * knows its parent through a non-owning link which never keeps the parent alive,
/// * is destroyed as soon as its reference count drops to zero; destruction releases the
///   left subtree, then the right subtree, and finally disposes the value of the node.
///
/// Nodes never move while they are alive, so handles stay valid until the node they refer
/// to is destroyed. The position of a destroyed node is reused by a later node; handles
/// carry the generation of their node and are never confused with the new occupant.
/// Using a handle of a destroyed node is a contract violation: the plain methods panic
/// while the `try_` methods return a [`TreeError`].
///
/// # Examples
///
/// ```
/// use orx_refcount_col::*;
///
/// let mut tree = RcTree::new();
///
/// let root = tree.create(1);
/// let left = tree.create(2);
///
/// tree.set_left(root, Some(left));
/// assert_eq!(tree.left(root), Some(left));
/// assert_eq!(tree.parent(left), Some(root));
/// assert_eq!(tree.ref_count(left), 2);
///
/// // the tree now co-owns `left`; give back our own handle
/// tree.release(left);
/// assert!(!tree.is_leaf(root));
/// assert!(tree.is_leaf(left));
///
/// // releasing the root destroys the whole tree
/// assert_eq!(tree.release(root), 0);
/// assert!(tree.is_empty());
/// ```
pub struct RcTree<T, P = SplitVec<Node<TreeVariant<T>>, Recursive>>
where
    P: PinnedVec<Node<TreeVariant<T>>>,
{
    pub(super) col: SelfRefCol<TreeVariant<T>, MemoryReclaimNever, P>,
    /// Positions of destroyed nodes waiting to be reused.
    pub(super) vacant: Vec<TreePtr<T>>,
}

impl<T> RcTree<T> {
    /// Creates a new tree without any nodes.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, P> Default for RcTree<T, P>
where
    P: PinnedVec<Node<TreeVariant<T>>> + Default,
{
    fn default() -> Self {
        Self {
            col: SelfRefCol::new(),
            vacant: Vec::new(),
        }
    }
}

impl<T, P> RcTree<T, P>
where
    P: PinnedVec<Node<TreeVariant<T>>>,
{
    // collection

    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.col.len()
    }

    /// Returns true if there is no live node.
    pub fn is_empty(&self) -> bool {
        self.col.is_empty()
    }

    /// Returns the node utilization of the underlying storage.
    pub fn utilization(&self) -> Utilization {
        self.col.utilization()
    }

    /// Returns the memory state of the tree.
    ///
    /// The state advances when the last live node is destroyed and the storage is cleared.
    pub fn memory_state(&self) -> MemoryState {
        self.col.memory_state()
    }

    /// Returns true if `idx` refers to a live node of this tree.
    pub fn is_valid(&self, idx: TreeIdx<T>) -> bool {
        self.col.try_node_ptr(&idx).is_ok()
    }

    // create

    /// Creates a node without a value. The node is returned with a reference count of 1.
    pub fn create_empty(&mut self) -> TreeIdx<T> {
        self.push_slot(None)
    }

    /// Creates a node holding `value`, which is dropped when the node is destroyed.
    /// The node is returned with a reference count of 1.
    pub fn create(&mut self, value: T) -> TreeIdx<T> {
        self.push_slot(Some(value.into()))
    }

    /// Creates a node holding `value`, which is handed to `disposal` when the node is destroyed.
    /// The node is returned with a reference count of 1.
    pub fn create_with(&mut self, value: T, disposal: Disposal<T>) -> TreeIdx<T> {
        self.push_slot(Some(Owned::new(value, disposal)))
    }

    fn push_slot(&mut self, value: Option<Owned<T>>) -> TreeIdx<T> {
        let slot = TreeSlot::new(value);
        let ptr = match self.vacant.pop() {
            Some(ptr) => {
                self.col.reopen(&ptr, slot);
                ptr
            }
            None => self.col.push(slot),
        };
        self.col.node_idx_for(&ptr)
    }

    // reference counting

    /// Returns the reference count of the node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn ref_count(&self, idx: TreeIdx<T>) -> usize {
        self.col.data(&self.ptr(idx)).ref_count
    }

    /// Increments the reference count of the node and returns the same handle.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn retain(&mut self, idx: TreeIdx<T>) -> TreeIdx<T> {
        self.try_retain(idx).expect(INVALID_IDX)
    }

    /// Increments the reference count of the node and returns the same handle;
    /// returns an error if `idx` does not refer to a live node of this tree.
    pub fn try_retain(&mut self, idx: TreeIdx<T>) -> Result<TreeIdx<T>, TreeError> {
        let ptr = self.col.try_node_ptr(&idx)?;
        self.col.data_mut(&ptr).ref_count += 1;
        Ok(idx)
    }

    /// Decrements the reference count of the node and returns the remaining count.
    ///
    /// When the count reaches zero the node is destroyed: its left and then its right
    /// subtree are released, each of which might cascade further, and then its value is
    /// disposed.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree; for instance, when the
    /// node has already been released as many times as it was retained.
    pub fn release(&mut self, idx: TreeIdx<T>) -> usize {
        self.try_release(idx).expect(INVALID_IDX)
    }

    /// Decrements the reference count of the node and returns the remaining count;
    /// returns an error if `idx` does not refer to a live node of this tree.
    ///
    /// See [`RcTree::release`].
    pub fn try_release(&mut self, idx: TreeIdx<T>) -> Result<usize, TreeError> {
        let ptr = self.col.try_node_ptr(&idx)?;
        Ok(self.release_ptr(ptr, None))
    }

    // links

    /// Returns the left child of the node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn left(&self, idx: TreeIdx<T>) -> Option<TreeIdx<T>> {
        self.child(idx, Branch::Left)
    }

    /// Returns the right child of the node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn right(&self, idx: TreeIdx<T>) -> Option<TreeIdx<T>> {
        self.child(idx, Branch::Right)
    }

    /// Returns the child of the node on the given `branch`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn child(&self, idx: TreeIdx<T>, branch: Branch) -> Option<TreeIdx<T>> {
        let ptr = self.ptr(idx);
        self.col
            .node(&ptr)
            .next()
            .get(branch.position())
            .map(|child| self.col.node_idx_for(&child))
    }

    /// Returns the parent of the node; None if the node is not attached as a child.
    ///
    /// When a node is attached under several parents, the parent is the node it was most
    /// recently attached to. Once that parent lets go of the node, any other node still
    /// holding it becomes its parent; the parent is None only when no node holds it.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn parent(&self, idx: TreeIdx<T>) -> Option<TreeIdx<T>> {
        let ptr = self.ptr(idx);
        self.col
            .node(&ptr)
            .prev()
            .get()
            .map(|parent| self.col.node_idx_for(&parent))
    }

    /// Returns true if the node has neither a left nor a right child.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn is_leaf(&self, idx: TreeIdx<T>) -> bool {
        let ptr = self.ptr(idx);
        self.col.node(&ptr).next().iter().next().is_none()
    }

    /// Sets the left child of the node; see [`RcTree::set_child`].
    ///
    /// # Panics
    ///
    /// Panics if either index is invalid or the attachment would create a cycle.
    pub fn set_left(&mut self, idx: TreeIdx<T>, child: Option<TreeIdx<T>>) {
        self.set_child(idx, Branch::Left, child)
    }

    /// Sets the right child of the node; see [`RcTree::set_child`].
    ///
    /// # Panics
    ///
    /// Panics if either index is invalid or the attachment would create a cycle.
    pub fn set_right(&mut self, idx: TreeIdx<T>, child: Option<TreeIdx<T>>) {
        self.set_child(idx, Branch::Right, child)
    }

    /// Sets the child of the node on the given `branch`.
    ///
    /// The subtree currently held on the branch, if any, is released. Then, if `child` is
    /// given, it is retained and its parent is set to this node; otherwise the branch
    /// becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if either index is invalid or the attachment would create a cycle.
    pub fn set_child(&mut self, idx: TreeIdx<T>, branch: Branch, child: Option<TreeIdx<T>>) {
        self.try_set_child(idx, branch, child)
            .expect("child must be attachable to a live node of this tree")
    }

    /// Checked version of [`RcTree::set_left`].
    pub fn try_set_left(
        &mut self,
        idx: TreeIdx<T>,
        child: Option<TreeIdx<T>>,
    ) -> Result<(), TreeError> {
        self.try_set_child(idx, Branch::Left, child)
    }

    /// Checked version of [`RcTree::set_right`].
    pub fn try_set_right(
        &mut self,
        idx: TreeIdx<T>,
        child: Option<TreeIdx<T>>,
    ) -> Result<(), TreeError> {
        self.try_set_child(idx, Branch::Right, child)
    }

    /// Checked version of [`RcTree::set_child`].
    ///
    /// Both indices are validated before anything is modified; on error the tree is unchanged.
    pub fn try_set_child(
        &mut self,
        idx: TreeIdx<T>,
        branch: Branch,
        child: Option<TreeIdx<T>>,
    ) -> Result<(), TreeError> {
        let node = self.col.try_node_ptr(&idx)?;
        let child = child.map(|c| self.col.try_node_ptr(&c)).transpose()?;
        self.replace_child(node, branch, child)
    }

    // values

    /// Returns a reference to the value of the node; None if the node has no value.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn value(&self, idx: TreeIdx<T>) -> Option<&T> {
        let ptr = self.ptr(idx);
        self.col.data(&ptr).value.as_ref().map(Owned::value)
    }

    /// Returns a mutable reference to the value of the node; None if the node has no value.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn value_mut(&mut self, idx: TreeIdx<T>) -> Option<&mut T> {
        let ptr = self.ptr(idx);
        self.col.data_mut(&ptr).value.as_mut().map(Owned::value_mut)
    }

    /// Disposes the current value of the node, if any, and stores `value` which will be
    /// dropped when it is no longer needed.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn set_value(&mut self, idx: TreeIdx<T>, value: T) {
        self.replace_value(idx, Some(value.into()))
    }

    /// Disposes the current value of the node, if any, and stores `value` which will be
    /// handed to `disposal` when it is no longer needed.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn set_value_with(&mut self, idx: TreeIdx<T>, value: T, disposal: Disposal<T>) {
        self.replace_value(idx, Some(Owned::new(value, disposal)))
    }

    /// Disposes the current value of the node, if any, leaving the node without a value.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a live node of this tree.
    pub fn clear_value(&mut self, idx: TreeIdx<T>) {
        self.replace_value(idx, None)
    }

    fn replace_value(&mut self, idx: TreeIdx<T>, value: Option<Owned<T>>) {
        let ptr = self.ptr(idx);
        if let Some(old) = self.col.data_mut(&ptr).value.take() {
            old.dispose();
        }
        self.col.data_mut(&ptr).value = value;
    }

    // helpers

    pub(super) fn ptr(&self, idx: TreeIdx<T>) -> TreePtr<T> {
        self.col.try_node_ptr(&idx).expect(INVALID_IDX)
    }
}

impl<T, P> Drop for RcTree<T, P>
where
    P: PinnedVec<Node<TreeVariant<T>>>,
{
    fn drop(&mut self) {
        if !self.col.is_empty() {
            log::debug!(
                "tree dropped with {} live nodes, disposing their values",
                self.col.len()
            );
        }

        for position in 0..self.col.nodes().len() {
            let ptr = self.col.node_ptr_at_pos(position);
            if self.col.node(&ptr).is_active() {
                if let Some(value) = self.col.close(&ptr).value {
                    value.dispose();
                }
            }
        }
    }
}
