mod heap;
mod queue_set;

pub use heap::{Handle, MutableHeap};
pub use queue_set::QueueSet;
