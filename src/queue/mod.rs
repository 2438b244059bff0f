mod queue_col;
mod rc_queue;
mod variant;

pub use rc_queue::RcQueue;
pub use variant::{DefaultQueuePolicy, Fifo, FifoReclaimer};
