use alloc::vec::Vec;
use core::{
  fmt,
  hash::{Hash, Hasher},
};

use crate::collections::{
  element::Element,
  queue::{
    backend::{QueueError, TwoStackBackend},
    facade::{IntoIter, Iter},
    traits::{QueueBase, QueueReader, QueueWriter},
  },
};

#[cfg(test)]
mod tests;

/// FIFO queue built from two LIFO stacks with amortized O(1) operations.
///
/// Offers push onto the offer-side stack; polls pop from the poll-side stack, lazily flipping
/// the active side over when the workload switches direction. The representation is tuned for
/// bursts: a run of offers followed by a run of polls moves each element across the flip exactly
/// once.
///
/// Not thread-safe and unbounded. Callers needing concurrent access must wrap every operation,
/// including flip-triggering reads such as [`FlipQueue::peek`], in one mutual-exclusion scope.
#[derive(Clone)]
pub struct FlipQueue<E> {
  backend: TwoStackBackend<E>,
}

impl<E: Element> FlipQueue<E> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { backend: TwoStackBackend::new() }
  }

  /// Enqueues `element` behind every element already present.
  ///
  /// Always succeeds; the queue is unbounded and every value of `E` is a valid element.
  pub fn offer(&mut self, element: E) {
    self.backend.offer(element);
  }

  /// Removes and returns the oldest element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] if the queue holds no elements.
  pub fn poll(&mut self) -> Result<E, QueueError> {
    self.backend.poll().ok_or(QueueError::Empty)
  }

  /// Removes and returns the oldest element, or `None` on an empty queue.
  pub fn try_poll(&mut self) -> Option<E> {
    self.backend.poll()
  }

  /// Returns the oldest element without removing it.
  ///
  /// May flip the offer side over; the read itself never mutates beyond that transition.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] if the queue holds no elements.
  pub fn peek(&mut self) -> Result<&E, QueueError> {
    self.backend.peek().ok_or(QueueError::Empty)
  }

  /// Returns the oldest element without removing it, or `None` on an empty queue.
  pub fn try_peek(&mut self) -> Option<&E> {
    self.backend.peek()
  }

  /// Returns the number of enqueued elements. O(1) and flip-free.
  #[must_use]
  pub fn len(&self) -> usize {
    self.backend.len()
  }

  /// Indicates whether the queue is empty. Flip-free.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.backend.is_empty()
  }

  /// Discards every element and resets to the initial offer-active state.
  pub fn clear(&mut self) {
    self.backend.clear();
  }

  /// Cumulative count of single-element moves performed by flips since construction or the last
  /// [`FlipQueue::clear`]. Diagnostic accessor backing the amortization properties and benches.
  #[must_use]
  pub fn flip_moves(&self) -> usize {
    self.backend.flip_moves()
  }

  /// Visits the elements in FIFO order without flipping either side.
  pub fn iter(&self) -> Iter<'_, E> {
    Iter::new(&self.backend)
  }

  /// Indicates whether `element` is currently enqueued. Flip-free, O(n).
  #[must_use]
  pub fn contains(&self, element: &E) -> bool
  where
    E: PartialEq, {
    self.iter().any(|candidate| candidate == element)
  }

  /// Keeps only the elements matching `predicate`, preserving FIFO order. Flip-free.
  pub fn retain(&mut self, predicate: impl FnMut(&E) -> bool) {
    self.backend.retain(predicate);
  }

  /// Returns a FIFO-ordered snapshot of the queue without consuming it.
  #[must_use]
  pub fn to_vec(&self) -> Vec<E>
  where
    E: Clone, {
    self.iter().cloned().collect()
  }
}

impl<E: Element> Default for FlipQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Element> fmt::Debug for FlipQueue<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<E: Element + PartialEq> PartialEq for FlipQueue<E> {
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len() && self.iter().eq(other.iter())
  }
}

impl<E: Element + Eq> Eq for FlipQueue<E> {}

impl<E: Element + Hash> Hash for FlipQueue<E> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(self.len());
    for element in self.iter() {
      element.hash(state);
    }
  }
}

impl<E: Element> Extend<E> for FlipQueue<E> {
  fn extend<I: IntoIterator<Item = E>>(&mut self, elements: I) {
    for element in elements {
      self.offer(element);
    }
  }
}

impl<E: Element> FromIterator<E> for FlipQueue<E> {
  fn from_iter<I: IntoIterator<Item = E>>(elements: I) -> Self {
    let mut queue = Self::new();
    queue.extend(elements);
    queue
  }
}

impl<E: Element> IntoIterator for FlipQueue<E> {
  type IntoIter = IntoIter<E>;
  type Item = E;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self.backend)
  }
}

impl<'a, E: Element> IntoIterator for &'a FlipQueue<E> {
  type IntoIter = Iter<'a, E>;
  type Item = &'a E;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<E: Element> QueueBase<E> for FlipQueue<E> {
  fn len(&self) -> usize {
    FlipQueue::len(self)
  }

  fn clear(&mut self) {
    FlipQueue::clear(self);
  }
}

impl<E: Element> QueueWriter<E> for FlipQueue<E> {
  fn offer_mut(&mut self, element: E) {
    self.offer(element);
  }
}

impl<E: Element> QueueReader<E> for FlipQueue<E> {
  fn poll_mut(&mut self) -> Option<E> {
    self.try_poll()
  }

  fn peek_mut(&mut self) -> Option<&E> {
    self.try_peek()
  }
}
