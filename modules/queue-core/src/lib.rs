//! FIFO queue built from two LIFO stacks.
//!
//! [`FlipQueue`] keeps every live element in exactly one of two internal stacks and lazily
//! "flips" the contents from one side to the other as the workload alternates between offering
//! and polling. Each element crosses a flip at most once between bursts, so long runs of offers
//! followed by long runs of polls cost amortized O(1) per operation.
//!
//! The crate is `no_std` (alloc only) and single-threaded: the queue is not safe for concurrent
//! mutation, and callers needing shared access must wrap every operation, including
//! flip-triggering reads, in their own mutual-exclusion scope.

#![no_std]

extern crate alloc;

pub mod collections;

pub use collections::{
  ActiveStack, Element, FlipQueue, IntoIter, Iter, QueueBase, QueueError, QueueReader, QueueRw, QueueWriter,
  StackBuffer, TwoStackBackend,
};
