//! Queue abstractions layered over the two-stack flip machinery.

pub mod backend;
pub mod facade;
pub mod storage;
pub mod traits;

pub use backend::{ActiveStack, QueueError, TwoStackBackend};
pub use facade::{FlipQueue, IntoIter, Iter};
pub use storage::StackBuffer;
pub use traits::{QueueBase, QueueReader, QueueRw, QueueWriter};
