/// Operations shared by every queue surface.
pub trait QueueBase<E> {
  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Indicates whether the queue is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Removes every element.
  fn clear(&mut self);
}
