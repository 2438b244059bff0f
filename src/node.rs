use crate::{Refs, Variant};
use core::fmt::Debug;

/// Node of the self referential collection.
///
/// A node is active while it holds data; closing it takes the data out and
/// clears its links, leaving a hole in the storage until the memory policy
/// reclaims it or the collection reopens it with new data.
///
/// The generation of the node advances each time it is closed, so that an index
/// created for an earlier occupant of the same position is not mistaken for the
/// current one.
pub struct Node<V>
where
    V: Variant,
{
    data: Option<V::Item>,
    prev: V::Prev,
    next: V::Next,
    generation: usize,
}

impl<V> Node<V>
where
    V: Variant,
{
    /// Creates a new active node with the given `data` but with no connections.
    pub fn new_free_node(data: V::Item) -> Self {
        Self {
            data: Some(data),
            prev: Refs::empty(),
            next: Refs::empty(),
            generation: 0,
        }
    }

    // ref

    /// Returns a reference to the data of the node; None if the node is already closed.
    pub fn data(&self) -> Option<&V::Item> {
        self.data.as_ref()
    }

    /// Returns a reference to the previous references.
    pub fn prev(&self) -> &V::Prev {
        &self.prev
    }

    /// Returns a reference to the next references.
    pub fn next(&self) -> &V::Next {
        &self.next
    }

    /// Returns the number of times this node has been closed.
    #[inline(always)]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns true if the node is active, false if it is closed.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the node is closed, false if it is active.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    // mut

    /// Returns a mutable reference to the underlying data.
    pub fn data_mut(&mut self) -> Option<&mut V::Item> {
        self.data.as_mut()
    }

    /// Returns a mutable reference to the previous references.
    pub fn prev_mut(&mut self) -> &mut V::Prev {
        &mut self.prev
    }

    /// Returns a mutable reference to the next references.
    pub fn next_mut(&mut self) -> &mut V::Next {
        &mut self.next
    }

    /// Closes the node and returns its data, and clears its connections.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub fn close(&mut self) -> V::Item {
        self.prev.clear();
        self.next.clear();
        self.generation = self.generation.wrapping_add(1);
        self.data.take().expect("must be an open node")
    }

    /// Reopens a closed node with the given `data` and no connections.
    pub(crate) fn reopen(&mut self, data: V::Item) {
        debug_assert!(self.is_closed());
        self.data = Some(data);
    }
}

impl<V: Variant> Debug for Node<V>
where
    V::Item: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .field("generation", &self.generation)
            .finish()
    }
}
