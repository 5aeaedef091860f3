pub mod min_priority_queue;

pub use min_priority_queue::MinPriorityQueue;
