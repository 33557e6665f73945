use alloc::vec::Vec;
use core::slice;


/// Growable LIFO buffer backing one side of the flip queue.
///
/// The top of the stack is the end of the underlying vector, so `push` and `pop` are O(1) apart
/// from occasional reallocation.
#[derive(Clone, Debug)]
pub struct StackBuffer<E> {
  items: Vec<E>,
}

impl<E> StackBuffer<E> {
  /// Creates an empty buffer.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: Vec::new() }
  }

  /// Creates an empty buffer with room for `capacity` elements before reallocating.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { items: Vec::with_capacity(capacity) }
  }

  /// Pushes an element onto the top of the stack.
  pub fn push(&mut self, element: E) {
    self.items.push(element);
  }

  /// Pops the top element, or `None` if the buffer is empty.
  pub fn pop(&mut self) -> Option<E> {
    self.items.pop()
  }

  /// Returns the top element without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&E> {
    self.items.last()
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the buffer is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Removes every element.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Keeps only the elements matching `predicate`, preserving bottom-to-top order.
  pub fn retain(&mut self, predicate: impl FnMut(&E) -> bool) {
    self.items.retain(predicate);
  }

  /// Iterates the buffer from bottom to top.
  pub fn iter(&self) -> slice::Iter<'_, E> {
    self.items.iter()
  }

  /// Consumes the buffer, returning its elements ordered bottom to top.
  #[must_use]
  pub fn into_vec(self) -> Vec<E> {
    self.items
  }
}

impl<E> Default for StackBuffer<E> {
  fn default() -> Self {
    Self::new()
  }
}
