// src/progress.rs
/// Lightweight progress reporting for the collection loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of (dialect, letter) pages to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one letter of one dialect is finished, with its record count.
    fn item_done(&mut self, _dialect: &str, _letter: char, _count: usize) {}

    /// Called at the end with the total record count.
    fn finish(&mut self, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
