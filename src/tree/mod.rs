mod error;
mod links;
mod rc_tree;
mod release;
mod variant;

pub use error::TreeError;
pub use rc_tree::RcTree;
pub use variant::{Branch, TreeIdx, TreeSlot, TreeVariant};

pub(crate) type TreePtr<T> = crate::NodePtr<TreeVariant<T>>;
