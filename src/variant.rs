use crate::Refs;

/// Variant defining the layout of a self referential collection.
///
/// The containers of this crate are defined by their variants:
/// * the tree keeps a single parent link as `Prev`, the two children as `Next`
///   and has no ends;
/// * the queue keeps no `Prev` link, a single successor as `Next` and the front
///   and back of the queue as its `Ends`.
pub trait Variant: Sized {
    /// Elements of the collection.
    type Item;

    /// The way links towards the previous node(s) are stored, such as the parent of a tree node.
    /// * `RefsNone` if there is no such link.
    /// * `RefsSingle` if there is zero or one link.
    /// * `RefsArray` if there is a constant number of links.
    type Prev: Refs;

    /// The way links towards the next node(s) are stored, such as the children of a tree node
    /// or the successor in a queue.
    type Next: Refs;

    /// The way the ends of the collection are stored, such as the front and back of a queue.
    type Ends: Refs;
}
