use core::fmt::{Debug, Display};

/// Error cases of an invalid node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdxError {
    /// RemovedNode => Referenced node is already destroyed.
    /// For a tree node this is the case once its reference count dropped to zero,
    /// so using the index again, such as releasing it a second time, is a contract violation.
    RemovedNode,
    /// OutOfBounds => Node index does not point to the current nodes of the collection.
    /// This is the case when the index is used with a collection which is different
    /// than the one it was created for.
    OutOfBounds,
    /// ReorganizedCollection => The storage of the collection has been reset or compacted
    /// after the index was created.
    /// A tree resets its storage when its last live node is destroyed; hence, every index
    /// created before that point refers to a destroyed node.
    ReorganizedCollection,
}

impl Display for NodeIdxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <NodeIdxError as Debug>::fmt(self, f)
    }
}

impl core::error::Error for NodeIdxError {}
