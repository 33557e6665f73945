use crate::collections::queue::traits::{queue_reader::QueueReader, queue_writer::QueueWriter};

/// Combined read/write queue surface.
pub trait QueueRw<E>: QueueReader<E> + QueueWriter<E> {}

impl<E, Q> QueueRw<E> for Q where Q: QueueReader<E> + QueueWriter<E> {}
