mod array;
mod node_idx;
mod node_idx_error;
mod node_ptr;
mod none;
mod refs;
mod single;

pub use array::RefsArray;
pub use node_idx::NodeIdx;
pub use node_idx_error::NodeIdxError;
pub use node_ptr::NodePtr;
pub use none::RefsNone;
pub use refs::Refs;
pub use single::RefsSingle;
