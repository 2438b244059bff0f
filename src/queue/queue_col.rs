use super::variant::{BACK, FRONT, Fifo};
use crate::{MemoryPolicy, Node, Owned, Refs, SelfRefCol, Utilization};
use orx_pinned_vec::PinnedVec;

/// The queue behind the shared handles of an `RcQueue`.
///
/// Owns the elements; whatever is still queued when it is dropped is disposed in FIFO order.
pub(crate) struct QueueCol<T, M, P>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    col: SelfRefCol<Fifo<T>, M, P>,
}

impl<T, M, P> QueueCol<T, M, P>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            col: SelfRefCol::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.col.len()
    }

    pub fn utilization(&self) -> Utilization {
        self.col.utilization()
    }

    pub fn push_back(&mut self, element: Owned<T>) {
        let ptr = self.col.push(element);

        match self.col.ends().get(BACK) {
            Some(old_back) => self.col.node_mut(&old_back).next_mut().set_some(ptr),
            None => self.col.ends_mut().set(FRONT, Some(ptr)),
        }

        self.col.ends_mut().set(BACK, Some(ptr));
    }

    pub fn pop_front(&mut self) -> Option<Owned<T>> {
        let front = self.col.ends().get(FRONT)?;

        match self.col.node(&front).next().get() {
            Some(new_front) => self.col.ends_mut().set(FRONT, Some(new_front)),
            None => self.col.ends_mut().clear(),
        }

        Some(self.col.close_and_reclaim(&front))
    }

    /// Visits the queued elements from front to back.
    pub fn for_each(&self, mut f: impl FnMut(&Owned<T>)) {
        let mut current = self.col.ends().get(FRONT);
        while let Some(ptr) = current {
            f(self.col.data(&ptr));
            current = self.col.node(&ptr).next().get();
        }
    }
}

impl<T, M, P> Drop for QueueCol<T, M, P>
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    fn drop(&mut self) {
        log::trace!("queue torn down, disposing {} elements", self.len());
        while let Some(element) = self.pop_front() {
            element.dispose();
        }
    }
}
