use core::fmt::Debug;

/// Fundamental constraint for elements stored in the flip queue.
///
/// The engine is single-threaded, so no `Send + Sync` demands are made; `Debug` keeps queue
/// contents printable in diagnostics and test output.
pub trait Element: Debug {}

impl<T> Element for T where T: Debug {}
