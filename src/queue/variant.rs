use crate::{
    CoreCol, MemoryReclaimOnThreshold, MemoryReclaimer, Node, Owned, RefsArray, RefsNone,
    RefsSingle, Variant,
};
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;

pub(crate) const FRONT: usize = 0;
pub(crate) const BACK: usize = 1;

/// Variant of the owning FIFO queue.
///
/// * There is no link to the previous node.
/// * `Next` links each element to the one inserted right after it.
/// * The `Ends` are the front, where elements are removed, and the back, where they are inserted.
pub struct Fifo<T>(PhantomData<T>);

impl<T> Variant for Fifo<T> {
    type Item = Owned<T>;

    type Prev = RefsNone;

    type Next = RefsSingle<Self>;

    type Ends = RefsArray<2, Self>;
}

/// Default memory policy of the queue: holes are reclaimed once they exceed a quarter
/// of the used positions.
pub type DefaultQueuePolicy<T> = MemoryReclaimOnThreshold<2, Fifo<T>, FifoReclaimer>;

/// Memory reclaimer of the queue.
///
/// Elements are inserted at the back and removed from the front; hence, the closed nodes
/// always form a prefix of the storage while active nodes follow in queue order:
///
/// * `[ x, x, x, A, A, A, A ]`
///
/// Reclaiming slides the active nodes to the front keeping their order, and relinks them.
#[derive(Clone, Default, Debug)]
pub struct FifoReclaimer;

impl<T> MemoryReclaimer<Fifo<T>> for FifoReclaimer {
    fn reclaim_nodes<P>(col: &mut CoreCol<Fifo<T>, P>) -> bool
    where
        P: PinnedVec<Node<Fifo<T>>>,
    {
        let num_active = col.len();
        let front = match col.ends().get(FRONT) {
            Some(front) if num_active > 0 => front,
            _ => return false,
        };

        let offset = col.position_of(&front).expect("front belongs to the queue");
        debug_assert_eq!(offset, col.nodes().len() - num_active);
        if offset == 0 {
            return false;
        }

        for position in 0..num_active {
            col.move_node(position, position + offset);
        }

        for position in 0..num_active {
            let next = match position + 1 < num_active {
                true => Some(col.node_ptr_at_pos(position + 1)),
                false => None,
            };
            let ptr = col.node_ptr_at_pos(position);
            col.node_mut(&ptr).next_mut().set(next);
        }

        let (front, back) = (col.node_ptr_at_pos(0), col.node_ptr_at_pos(num_active - 1));
        col.ends_mut().set(FRONT, Some(front));
        col.ends_mut().set(BACK, Some(back));

        true
    }
}
