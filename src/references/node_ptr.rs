use crate::{Node, Variant};
use core::fmt::Debug;

/// A wrapper around a raw pointer to a node of the collection.
///
/// Node pointers are the links stored inside the collection: children and parent
/// of a tree node, successor of a queue node, ends of the queue. They are never
/// handed out; the public handle is [`NodeIdx`] which additionally carries the
/// memory state it was created in.
///
/// [`NodeIdx`]: crate::NodeIdx
pub struct NodePtr<V: Variant> {
    ptr: *mut Node<V>,
}

impl<V: Variant> PartialEq for NodePtr<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<V: Variant> Eq for NodePtr<V> {}

impl<V: Variant> Debug for NodePtr<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePtr")
            .field("ptr", &(self.ptr as usize))
            .finish()
    }
}

// Only the pointer is copied, so "V" does not need to be copy itself.
impl<V: Variant> Copy for NodePtr<V> {}

impl<V: Variant> Clone for NodePtr<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> NodePtr<V> {
    /// Creates a new node pointer by wrapping the given `ptr`.
    #[inline(always)]
    pub(crate) fn new(ptr: *const Node<V>) -> Self {
        Self {
            ptr: ptr as *mut Node<V>,
        }
    }

    /// Returns the const raw pointer to the node.
    #[inline(always)]
    pub(crate) fn ptr(&self) -> *const Node<V> {
        self.ptr
    }

    /// Returns the mutable raw pointer to the node.
    #[inline(always)]
    pub(crate) fn ptr_mut(&self) -> *mut Node<V> {
        self.ptr
    }

    /// Returns a reference to the node.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the collection owning the node is alive and
    /// has not moved or dropped the node since this pointer was created.
    #[inline]
    pub(crate) unsafe fn node<'a>(&self) -> &'a Node<V> {
        unsafe { &*self.ptr }
    }

    /// Returns a mutable reference to the node.
    ///
    /// # Safety
    ///
    /// In addition to the requirements of [`NodePtr::node`], no other reference
    /// to the same node may be alive while the returned one is used.
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn node_mut<'a>(&self) -> &'a mut Node<V> {
        unsafe { &mut *self.ptr }
    }
}
