use alloc::vec::Vec;
use core::mem;

use crate::collections::queue::{backend::ActiveStack, storage::StackBuffer};


/// Flip machinery and primitive queue operations over the two stack sides.
///
/// `offer` keeps the offer side active and pushes in O(1); `poll` and `peek` keep the poll side
/// active, flipping the offer side over when it runs dry. A burst of offers followed by a burst
/// of polls moves each element across the flip exactly once.
#[derive(Clone, Debug)]
pub struct TwoStackBackend<E> {
  active:     ActiveStack<E>,
  flip_moves: usize,
}

/// Pops every element off `source`, pushing each onto a fresh buffer, reversing their order.
fn flip<E>(mut source: StackBuffer<E>) -> StackBuffer<E> {
  let mut flipped = StackBuffer::with_capacity(source.len());
  while let Some(element) = source.pop() {
    flipped.push(element);
  }
  flipped
}

impl<E> TwoStackBackend<E> {
  /// Creates an empty backend with the offer side active.
  #[must_use]
  pub const fn new() -> Self {
    Self { active: ActiveStack::Offer(StackBuffer::new()), flip_moves: 0 }
  }

  /// Makes the offer side active, flipping the poll side over if necessary. Idempotent.
  pub fn ensure_offer_active(&mut self) {
    if let ActiveStack::Poll(source) = &mut self.active {
      let flipped = flip(mem::take(source));
      self.flip_moves += flipped.len();
      self.active = ActiveStack::Offer(flipped);
    }
  }

  /// Makes the poll side active, flipping the offer side over if necessary. Idempotent.
  pub fn ensure_poll_active(&mut self) {
    if let ActiveStack::Offer(source) = &mut self.active {
      let flipped = flip(mem::take(source));
      self.flip_moves += flipped.len();
      self.active = ActiveStack::Poll(flipped);
    }
  }

  /// Pushes `element` behind every element already enqueued.
  pub fn offer(&mut self, element: E) {
    self.ensure_offer_active();
    self.active.buffer_mut().push(element);
  }

  /// Removes and returns the oldest element, or `None` if no elements remain.
  pub fn poll(&mut self) -> Option<E> {
    self.ensure_poll_active();
    self.active.buffer_mut().pop()
  }

  /// Returns the oldest element without removing it.
  ///
  /// Reads the poll side, the side `ensure_poll_active` guarantees is active after the
  /// transition.
  pub fn peek(&mut self) -> Option<&E> {
    self.ensure_poll_active();
    self.active.buffer().peek()
  }

  /// Returns the number of live elements. Flip-invariant, so no transition is required.
  #[must_use]
  pub fn len(&self) -> usize {
    self.active.buffer().len()
  }

  /// Indicates whether no elements are live.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Discards every element and resets to the initial offer-active state.
  pub fn clear(&mut self) {
    self.active = ActiveStack::Offer(StackBuffer::new());
    self.flip_moves = 0;
  }

  /// Cumulative count of single-element moves performed by flips since construction or the last
  /// [`TwoStackBackend::clear`].
  #[must_use]
  pub fn flip_moves(&self) -> usize {
    self.flip_moves
  }

  /// Read access to the tagged active side.
  #[must_use]
  pub fn active(&self) -> &ActiveStack<E> {
    &self.active
  }

  /// Keeps only the elements matching `predicate`, preserving FIFO order. Works on whichever
  /// side is active without triggering a flip.
  pub fn retain(&mut self, predicate: impl FnMut(&E) -> bool) {
    self.active.buffer_mut().retain(predicate);
  }

  /// Consumes the backend, returning the elements in FIFO order.
  #[must_use]
  pub fn into_fifo_vec(self) -> Vec<E> {
    match self.active {
      | ActiveStack::Offer(buffer) => buffer.into_vec(),
      | ActiveStack::Poll(buffer) => {
        let mut elements = buffer.into_vec();
        elements.reverse();
        elements
      },
    }
  }
}

impl<E> Default for TwoStackBackend<E> {
  fn default() -> Self {
    Self::new()
  }
}
