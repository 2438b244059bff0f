use super::{NodePtr, refs::Refs};
use crate::variant::Variant;
use core::fmt::Debug;

/// A constant number of optional node links.
///
/// The following are the links expressed by `RefsArray` in this crate:
///
/// * the left and right children of a tree node, `RefsArray<2, _>`;
/// * the front and back ends of a queue, `RefsArray<2, _>`.
pub struct RefsArray<const N: usize, V>([Option<NodePtr<V>>; N])
where
    V: Variant;

impl<const N: usize, V: Variant> Clone for RefsArray<N, V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<const N: usize, V: Variant> Debug for RefsArray<N, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefsArray").field(&self.0).finish()
    }
}

impl<const N: usize, V: Variant> Refs for RefsArray<N, V> {
    #[inline(always)]
    fn empty() -> Self {
        Self([None; N])
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.iter().all(|x| x.is_none())
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.0.iter_mut().for_each(|x| *x = None);
    }
}

impl<const N: usize, V: Variant> RefsArray<N, V> {
    /// Returns the link at the given `ref_idx`.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    #[inline(always)]
    pub fn get(&self, ref_idx: usize) -> Option<NodePtr<V>> {
        self.0[ref_idx]
    }

    /// Sets the link at the given `ref_idx` to `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    #[inline(always)]
    pub fn set(&mut self, ref_idx: usize, node_ptr: Option<NodePtr<V>>) {
        self.0[ref_idx] = node_ptr;
    }

    /// Un-sets the link at the given `ref_idx` and returns the pointer it held.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    #[inline(always)]
    pub fn take(&mut self, ref_idx: usize) -> Option<NodePtr<V>> {
        self.0[ref_idx].take()
    }

    /// Returns true if any of the links points to the node at `ptr`.
    pub fn contains(&self, ptr: NodePtr<V>) -> bool {
        self.0.iter().any(|x| *x == Some(ptr))
    }

    /// Returns an iterator over the links that are set.
    pub fn iter(&self) -> impl Iterator<Item = NodePtr<V>> + '_ {
        self.0.iter().flatten().copied()
    }
}
