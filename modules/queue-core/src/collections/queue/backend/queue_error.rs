/// Errors that may arise while operating on a flip queue.
///
/// Offering cannot fail (the queue is unbounded and elements are valid by construction), so the
/// only failure mode is asking a fail-fast read for an element that is not there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
  /// The queue has no elements to consume.
  Empty,
}
