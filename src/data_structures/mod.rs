pub mod entry;
pub mod priority_queue;
pub mod reference;
pub mod traits;

pub use entry::Entry;
pub use priority_queue::BinaryHeapPriorityQueue;
pub use reference::BinaryHeapWrapper;
pub use traits::PriorityQueue;
