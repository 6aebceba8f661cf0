//! Linear containers: stacks, queues and lists.
//!
//! Every container here reports an empty or out-of-bounds target through
//! [`ContainerError`](crate::errors::ContainerError) instead of panicking.
//!
//! # Submodules
//!
//! - [`Stack`]: LIFO over a growable array
//! - [`Queue`]: FIFO over a ring buffer
//! - [`Deque`]: insertion and removal at both ends
//! - [`CircularQueue`]: fixed capacity FIFO that overwrites its oldest entry
//! - [`LinkedList`]: singly linked list with positional operations

mod circular_queue;
mod deque;
mod linked_list;
mod queue;
mod stack;

pub use circular_queue::*;
pub use deque::*;
pub use linked_list::*;
pub use queue::*;
pub use stack::*;
