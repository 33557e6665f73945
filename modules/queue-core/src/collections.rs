//! Collection primitives built around the two-stack flip engine.

mod element;
mod queue;

pub use element::Element;
pub use queue::{
  ActiveStack, FlipQueue, IntoIter, Iter, QueueBase, QueueError, QueueReader, QueueRw, QueueWriter, StackBuffer,
  TwoStackBackend,
};
