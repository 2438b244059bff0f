use super::{
    queue_col::QueueCol,
    variant::{DefaultQueuePolicy, Fifo},
};
use crate::{Disposal, MemoryPolicy, Node, Owned, Utilization};
use alloc::rc::Rc;
use core::cell::RefCell;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// A reference counted, singly linked FIFO queue owning its elements.
///
/// `RcQueue` is a handle; all handles retained from one another share the same queue.
/// The queue is torn down when its last handle is released, at which point every element
/// still in the queue is disposed, in FIFO order, according to its own [`Disposal`].
///
/// Removing an element with [`RcQueue::remove`] transfers its ownership to the caller; the
/// disposal of a removed element is never applied.
///
/// The queue is generic over:
/// * `M`: memory policy deciding when the storage positions of removed elements are
///   reclaimed; [`DefaultQueuePolicy`] by default,
/// * `P`: the pinned vector storing the nodes.
///
/// # Examples
///
/// ```
/// use orx_refcount_col::*;
///
/// let queue = RcQueue::new();
/// queue.insert("a");
/// queue.insert("b");
/// queue.insert("c");
/// assert_eq!(queue.count(), 3);
///
/// let other = queue.retain();
/// assert_eq!(other.remove(), Some("a"));
/// assert_eq!(queue.count(), 2);
///
/// assert_eq!(queue.release(), 1);
/// assert_eq!(other.remove(), Some("b"));
/// assert_eq!(other.remove(), Some("c"));
/// assert_eq!(other.remove(), None);
/// assert_eq!(other.count(), 0);
/// ```
pub struct RcQueue<T, M = DefaultQueuePolicy<T>, P = SplitVec<Node<Fifo<T>>, Recursive>>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    inner: Rc<RefCell<QueueCol<T, M, P>>>,
}

impl<T> RcQueue<T> {
    /// Creates a new empty queue with the default memory policy; the returned handle is
    /// its only reference.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, M, P> Default for RcQueue<T, M, P>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>> + Default,
{
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(QueueCol::new())),
        }
    }
}

impl<T, M, P> Clone for RcQueue<T, M, P>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    /// Retains the queue; see [`RcQueue::retain`].
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, M, P> RcQueue<T, M, P>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    // reference counting

    /// Returns a new handle to the same queue, incrementing its reference count.
    pub fn retain(&self) -> Self {
        self.clone()
    }

    /// Releases this handle and returns the number of handles remaining.
    ///
    /// When this was the last handle, the elements still in the queue are disposed in
    /// FIFO order, and the storage is freed.
    pub fn release(self) -> usize {
        let remaining = Rc::strong_count(&self.inner) - 1;
        log::trace!("queue released, {remaining} references remain");
        remaining
    }

    /// Returns the number of handles sharing this queue.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Returns true if both handles share the same queue.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // elements

    /// Returns the number of elements in the queue.
    pub fn count(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns true if the queue has no elements.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the node utilization of the underlying storage.
    pub fn utilization(&self) -> Utilization {
        self.inner.borrow().utilization()
    }

    /// Inserts `value` at the back of the queue; the value is dropped if it is still in the
    /// queue when the queue is torn down.
    pub fn insert(&self, value: T) {
        self.inner.borrow_mut().push_back(value.into())
    }

    /// Inserts `value` at the back of the queue; the value is handed to `disposal` if it is
    /// still in the queue when the queue is torn down.
    pub fn insert_with(&self, value: T, disposal: Disposal<T>) {
        self.inner
            .borrow_mut()
            .push_back(Owned::new(value, disposal))
    }

    /// Removes the element at the front of the queue and returns it; None if the queue
    /// is empty.
    ///
    /// Ownership of the value is transferred to the caller; its disposal is not applied.
    pub fn remove(&self) -> Option<T> {
        self.inner.borrow_mut().pop_front().map(Owned::into_value)
    }

    pub(crate) fn for_each_element(&self, f: impl FnMut(&Owned<T>)) {
        self.inner.borrow().for_each(f)
    }
}
