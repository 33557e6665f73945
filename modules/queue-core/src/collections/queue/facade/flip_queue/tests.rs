use alloc::{format, vec, vec::Vec};
use core::hash::{Hash, Hasher};

use super::FlipQueue;
use crate::collections::queue::{
  backend::QueueError,
  traits::{QueueBase, QueueReader, QueueRw, QueueWriter},
};

/// FNV-1a accumulator; core provides no default hasher and these tests stay no_std.
struct Fnv1aHasher(u64);

impl Fnv1aHasher {
  const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
  const PRIME: u64 = 0x0000_0100_0000_01b3;

  fn new() -> Self {
    Self(Self::OFFSET_BASIS)
  }
}

impl Hasher for Fnv1aHasher {
  fn finish(&self) -> u64 {
    self.0
  }

  fn write(&mut self, bytes: &[u8]) {
    for byte in bytes {
      self.0 ^= u64::from(*byte);
      self.0 = self.0.wrapping_mul(Self::PRIME);
    }
  }
}

fn fnv1a_hash(queue: &FlipQueue<i32>) -> u64 {
  let mut hasher = Fnv1aHasher::new();
  queue.hash(&mut hasher);
  hasher.finish()
}

#[test]
fn polls_yield_fifo_order_after_an_offer_burst() {
  let mut queue = FlipQueue::new();
  for value in 1..=10 {
    queue.offer(value);
  }

  for expected in 1..=10 {
    assert_eq!(queue.poll(), Ok(expected));
  }
  assert!(queue.is_empty());
}

#[test]
fn len_tracks_offers_and_polls() {
  let mut queue = FlipQueue::new();
  for value in 0..6 {
    queue.offer(value);
  }
  assert_eq!(queue.len(), 6);

  for polled in 0..4 {
    assert_eq!(queue.poll(), Ok(polled));
  }
  assert_eq!(queue.len(), 2);
  assert!(!queue.is_empty());
}

#[test]
fn empty_queue_try_and_fail_variants_agree() {
  let mut queue: FlipQueue<i32> = FlipQueue::new();

  assert_eq!(queue.try_poll(), None);
  assert_eq!(queue.poll(), Err(QueueError::Empty));
  assert_eq!(queue.try_peek(), None);
  assert_eq!(queue.peek(), Err(QueueError::Empty));
  assert_eq!(queue.len(), 0);
  assert!(queue.is_empty());
}

#[test]
fn peek_after_a_flip_returns_the_oldest_without_removal() {
  let mut queue = FlipQueue::new();
  queue.offer(1);
  queue.offer(2);

  // The first peek transitions the poll side active; the read must land on the poll side, not
  // on a stale offer reference.
  assert_eq!(queue.peek(), Ok(&1));
  assert_eq!(queue.len(), 2);
  assert_eq!(queue.poll(), Ok(1));
  assert_eq!(queue.peek(), Ok(&2));
}

#[test]
fn interleaved_offer_poll_round_trip() {
  let mut queue = FlipQueue::new();
  queue.offer(1);
  queue.offer(2);
  queue.offer(3);
  assert_eq!(queue.len(), 3);

  assert_eq!(queue.poll(), Ok(1));
  assert_eq!(queue.poll(), Ok(2));
  queue.offer(4);
  assert_eq!(queue.poll(), Ok(3));
  assert_eq!(queue.poll(), Ok(4));
  assert!(queue.is_empty());
}

#[test]
fn burst_flip_moves_each_element_once() {
  let mut queue = FlipQueue::new();
  for value in 0..100 {
    queue.offer(value);
  }
  assert_eq!(queue.flip_moves(), 0);

  for expected in 0..100 {
    assert_eq!(queue.poll(), Ok(expected));
  }
  assert_eq!(queue.flip_moves(), 100);
}

#[test]
fn clear_resets_to_the_initial_state() {
  let mut queue = FlipQueue::new();
  for value in 0..8 {
    queue.offer(value);
  }
  let _ = queue.poll();

  queue.clear();
  assert!(queue.is_empty());
  assert_eq!(queue.len(), 0);
  assert_eq!(queue.flip_moves(), 0);

  queue.offer(42);
  assert_eq!(queue.poll(), Ok(42));
}

#[test]
fn equality_follows_fifo_contents() {
  let mut first: FlipQueue<i32> = FlipQueue::new();
  let mut second: FlipQueue<i32> = FlipQueue::new();
  assert_eq!(first, second);

  first.offer(1);
  second.offer(1);
  assert_eq!(first, second);

  second.offer(2);
  assert_ne!(first, second);
}

#[test]
fn equality_ignores_which_side_is_active() {
  let mut offer_active = FlipQueue::new();
  let mut poll_active = FlipQueue::new();
  for value in 1..=3 {
    offer_active.offer(value);
    poll_active.offer(value);
  }
  let _ = poll_active.peek(); // forces poll_active onto its poll side

  assert_eq!(offer_active, poll_active);
  assert_eq!(fnv1a_hash(&offer_active), fnv1a_hash(&poll_active));
}

#[test]
fn hash_is_stable_across_flips() {
  let mut queue = FlipQueue::new();
  for value in 1..=5 {
    queue.offer(value);
  }

  let before = fnv1a_hash(&queue);
  let _ = queue.peek();
  assert_eq!(fnv1a_hash(&queue), before);
}

#[test]
fn from_iterator_enqueues_in_iteration_order() {
  let mut queue: FlipQueue<i32> = [7, 8, 9].into_iter().collect();

  assert_eq!(queue.len(), 3);
  assert_eq!(queue.poll(), Ok(7));
  assert_eq!(queue.poll(), Ok(8));
  assert_eq!(queue.poll(), Ok(9));
}

#[test]
fn extend_appends_behind_existing_elements() {
  let mut queue = FlipQueue::new();
  queue.offer(1);
  let _ = queue.peek(); // poll side active before the bulk insert

  queue.extend([2, 3]);
  assert_eq!(queue.to_vec(), vec![1, 2, 3]);
}

#[test]
fn contains_reads_either_side_without_flipping() {
  let mut queue = FlipQueue::new();
  queue.offer(10);
  queue.offer(20);
  assert!(queue.contains(&10));
  assert!(queue.contains(&20));

  assert_eq!(queue.poll(), Ok(10));
  assert!(!queue.contains(&10));
  assert!(queue.contains(&20));
}

#[test]
fn iter_is_fifo_on_both_sides() {
  let mut queue = FlipQueue::new();
  for value in 1..=4 {
    queue.offer(value);
  }
  let offer_side: Vec<i32> = queue.iter().copied().collect();
  assert_eq!(offer_side, vec![1, 2, 3, 4]);

  let _ = queue.peek();
  let poll_side: Vec<i32> = queue.iter().copied().collect();
  assert_eq!(poll_side, vec![1, 2, 3, 4]);
}

#[test]
fn retain_preserves_fifo_order_on_both_sides() {
  let mut offer_active: FlipQueue<i32> = (1..=6).collect();
  offer_active.retain(|value| value % 2 == 0);
  assert_eq!(offer_active.to_vec(), vec![2, 4, 6]);

  let mut poll_active: FlipQueue<i32> = (1..=6).collect();
  let _ = poll_active.peek();
  poll_active.retain(|value| value % 2 == 0);
  assert_eq!(poll_active.to_vec(), vec![2, 4, 6]);
}

#[test]
fn into_iter_drains_in_fifo_order() {
  let queue: FlipQueue<i32> = (1..=5).collect();
  let drained: Vec<i32> = queue.into_iter().collect();
  assert_eq!(drained, vec![1, 2, 3, 4, 5]);
}

#[test]
fn into_iter_after_a_flip_is_still_fifo() {
  let mut queue: FlipQueue<i32> = (1..=5).collect();
  let _ = queue.peek();
  let drained: Vec<i32> = queue.into_iter().collect();
  assert_eq!(drained, vec![1, 2, 3, 4, 5]);
}

#[test]
fn clone_is_independent_of_the_original() {
  let mut queue: FlipQueue<i32> = (1..=3).collect();
  let mut copied = queue.clone();

  assert_eq!(copied.poll(), Ok(1));
  assert_eq!(queue.len(), 3);
  assert_eq!(queue.poll(), Ok(1));
}

#[test]
fn debug_prints_fifo_order() {
  let mut queue: FlipQueue<i32> = (1..=3).collect();
  assert_eq!(format!("{queue:?}"), "[1, 2, 3]");

  let _ = queue.peek();
  assert_eq!(format!("{queue:?}"), "[1, 2, 3]");
}

fn drain<E, Q: QueueRw<E>>(queue: &mut Q) -> Vec<E> {
  let mut drained = Vec::with_capacity(queue.len());
  while let Some(element) = queue.poll_mut() {
    drained.push(element);
  }
  drained
}

#[test]
fn seam_traits_expose_the_primitive_operations() {
  let mut queue = FlipQueue::new();
  QueueWriter::offer_mut(&mut queue, 1);
  queue.offer_mut(2);
  assert_eq!(queue.peek_mut(), Some(&1));

  assert_eq!(drain(&mut queue), vec![1, 2]);
  assert!(QueueBase::is_empty(&queue));
}
