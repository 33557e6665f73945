use alloc::vec;
use core::{
  iter::{FusedIterator, Rev},
  slice,
};

use crate::collections::queue::backend::{ActiveStack, TwoStackBackend};

/// Borrowing iterator over a flip queue's elements in FIFO order.
///
/// Reads whichever side is active without triggering a flip: the offer side bottom to top, the
/// poll side top to bottom. Both walks visit the elements oldest first.
#[derive(Clone)]
pub struct Iter<'a, E> {
  inner: SideIter<'a, E>,
}

#[derive(Clone)]
enum SideIter<'a, E> {
  Offer(slice::Iter<'a, E>),
  Poll(Rev<slice::Iter<'a, E>>),
}

impl<'a, E> Iter<'a, E> {
  pub(crate) fn new(backend: &'a TwoStackBackend<E>) -> Self {
    let inner = match backend.active() {
      | ActiveStack::Offer(buffer) => SideIter::Offer(buffer.iter()),
      | ActiveStack::Poll(buffer) => SideIter::Poll(buffer.iter().rev()),
    };
    Self { inner }
  }
}

impl<'a, E> Iterator for Iter<'a, E> {
  type Item = &'a E;

  fn next(&mut self) -> Option<Self::Item> {
    match &mut self.inner {
      | SideIter::Offer(iter) => iter.next(),
      | SideIter::Poll(iter) => iter.next(),
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    match &self.inner {
      | SideIter::Offer(iter) => iter.size_hint(),
      | SideIter::Poll(iter) => iter.size_hint(),
    }
  }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

/// Owning iterator draining a flip queue in FIFO order.
pub struct IntoIter<E> {
  inner: vec::IntoIter<E>,
}

impl<E> IntoIter<E> {
  pub(crate) fn new(backend: TwoStackBackend<E>) -> Self {
    Self { inner: backend.into_fifo_vec().into_iter() }
  }
}

impl<E> Iterator for IntoIter<E> {
  type Item = E;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}
