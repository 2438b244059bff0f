use crate::{NodeIdx, Owned, RefsArray, RefsNone, RefsSingle, Variant};
use core::marker::PhantomData;

/// Variant of the reference counted binary tree.
///
/// * `Prev` is the non-owning link to the parent node.
/// * `Next` holds the owning links to the left and right children.
/// * The tree keeps no ends; every node handed out by the tree is a root of its own subtree.
pub struct TreeVariant<T>(PhantomData<T>);

impl<T> Variant for TreeVariant<T> {
    type Item = TreeSlot<T>;

    type Prev = RefsSingle<Self>;

    type Next = RefsArray<2, Self>;

    type Ends = RefsNone;
}

/// Handle of a node of an [`RcTree`].
///
/// A handle is a plain index: copying it does not change the reference count of the node.
/// Whenever a copy is stored as an additional independent owner, it must be registered
/// with [`RcTree::retain`] and later given back with [`RcTree::release`].
///
/// [`RcTree`]: crate::RcTree
/// [`RcTree::retain`]: crate::RcTree::retain
/// [`RcTree::release`]: crate::RcTree::release
pub type TreeIdx<T> = NodeIdx<TreeVariant<T>>;

/// Data stored in each tree node: its reference count and its optional value.
///
/// `num_holders` is the part of the reference count owed to parent nodes, one for each
/// branch holding the node.
pub struct TreeSlot<T> {
    pub(crate) ref_count: usize,
    pub(crate) num_holders: usize,
    pub(crate) value: Option<Owned<T>>,
}

impl<T> TreeSlot<T> {
    pub(crate) fn new(value: Option<Owned<T>>) -> Self {
        Self {
            ref_count: 1,
            num_holders: 0,
            value,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for TreeSlot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeSlot")
            .field("ref_count", &self.ref_count)
            .field("num_holders", &self.num_holders)
            .field("value", &self.value)
            .finish()
    }
}

/// One of the two child branches of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The left child.
    Left,
    /// The right child.
    Right,
}

impl Branch {
    #[inline(always)]
    pub(crate) const fn position(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}
