#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Node references.
pub mod references;

mod common_traits;
mod core_col;
mod disposal;
mod memory;
mod node;
mod queue;
mod selfref_col;
mod tree;
mod variant;

pub use core_col::CoreCol;
pub use disposal::{Disposal, Owned};
pub use memory::{
    MemoryPolicy, MemoryReclaimNever, MemoryReclaimOnThreshold, MemoryReclaimer, MemoryState,
    Utilization,
};
pub use node::Node;
pub use queue::{DefaultQueuePolicy, Fifo, FifoReclaimer, RcQueue};
pub use references::{NodeIdx, NodeIdxError, NodePtr};
pub use references::{Refs, RefsArray, RefsNone, RefsSingle};
pub use selfref_col::SelfRefCol;
pub use tree::{Branch, RcTree, TreeError, TreeIdx, TreeSlot, TreeVariant};
pub use variant::Variant;
