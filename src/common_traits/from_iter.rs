use crate::{Fifo, MemoryPolicy, Node, RcQueue};
use orx_pinned_vec::PinnedVec;

impl<T, M, P> FromIterator<T> for RcQueue<T, M, P>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);
        queue
    }
}

impl<T, M, P> Extend<T> for RcQueue<T, M, P>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    /// Inserts the elements at the back of the queue, in order; each value is dropped if it is
    /// still in the queue when the queue is torn down.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
