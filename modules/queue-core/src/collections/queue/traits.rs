//! Seam traits external collaborators program against.

pub mod queue_base;
pub mod queue_reader;
pub mod queue_rw;
pub mod queue_writer;

pub use queue_base::QueueBase;
pub use queue_reader::QueueReader;
pub use queue_rw::QueueRw;
pub use queue_writer::QueueWriter;
