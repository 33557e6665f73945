use crate::collections::queue::traits::queue_base::QueueBase;

/// Trait providing read operations from the queue for mutable references.
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes the oldest element from the queue (mutable reference version).
  fn poll_mut(&mut self) -> Option<E>;

  /// Reads the oldest element without removing it (mutable reference version).
  fn peek_mut(&mut self) -> Option<&E>;
}
