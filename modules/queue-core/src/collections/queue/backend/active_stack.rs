use crate::collections::queue::storage::StackBuffer;

/// Tagged state naming which side currently holds every live element.
///
/// Exactly one side exists at any time; the inactive side is not merely empty but absent from the
/// representation, so the exclusivity invariant holds by construction.
#[derive(Clone, Debug)]
pub enum ActiveStack<E> {
  /// The offer side is active: insertion order runs bottom to top, oldest at the bottom.
  Offer(StackBuffer<E>),
  /// The poll side is active: reverse insertion order, oldest on top.
  Poll(StackBuffer<E>),
}

impl<E> ActiveStack<E> {
  /// Returns the buffer holding the live elements, regardless of side.
  #[must_use]
  pub fn buffer(&self) -> &StackBuffer<E> {
    match self {
      | ActiveStack::Offer(buffer) | ActiveStack::Poll(buffer) => buffer,
    }
  }

  /// Mutable access to the active buffer.
  pub fn buffer_mut(&mut self) -> &mut StackBuffer<E> {
    match self {
      | ActiveStack::Offer(buffer) | ActiveStack::Poll(buffer) => buffer,
    }
  }
}

impl<E> Default for ActiveStack<E> {
  fn default() -> Self {
    ActiveStack::Offer(StackBuffer::new())
  }
}
