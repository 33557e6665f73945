//! Facade layer exposing the public queue engine.

mod flip_queue;
mod iter;

pub use flip_queue::FlipQueue;
pub use iter::{IntoIter, Iter};
