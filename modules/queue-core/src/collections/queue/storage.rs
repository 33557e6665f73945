//! Storage layer for the queue's stack sides.

mod stack_buffer;

pub use stack_buffer::StackBuffer;
