//! Backend layer implementing the two-stack flip machinery.

mod active_stack;
mod queue_error;
mod two_stack_backend;

pub use active_stack::ActiveStack;
pub use queue_error::QueueError;
pub use two_stack_backend::TwoStackBackend;
