use crate::{Fifo, MemoryPolicy, Node, RcQueue, RcTree, TreeVariant};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

impl<T, P> Debug for RcTree<T, P>
where
    P: PinnedVec<Node<TreeVariant<T>>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RcTree")
            .field("len", &self.len())
            .field("utilization", &self.utilization())
            .field("memory_state", &self.memory_state())
            .finish()
    }
}

impl<T, M, P> Debug for RcQueue<T, M, P>
where
    T: Debug,
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RcQueue")
            .field("ref_count", &self.ref_count())
            .field("count", &self.count())
            .field("elements", &Elements(self))
            .finish()
    }
}

struct Elements<'a, T, M, P>(&'a RcQueue<T, M, P>)
where
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>;

impl<T, M, P> Debug for Elements<'_, T, M, P>
where
    T: Debug,
    M: MemoryPolicy<Fifo<T>>,
    P: PinnedVec<Node<Fifo<T>>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        self.0.for_each_element(|x| {
            list.entry(x.value());
        });
        list.finish()
    }
}
