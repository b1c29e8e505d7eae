// src/progress.rs
/// Lightweight progress reporting used by long-running operations (API fetches).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of requests (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one request completes (e.g. "franchise history").
    fn step_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Records everything it is told; handy in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: usize,
    pub lines: Vec<String>,
    pub steps: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn step_done(&mut self, label: &str) { self.steps.push(s!(label)); }
    fn finish(&mut self) { self.finished = true; }
}
