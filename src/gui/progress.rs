// src/gui/progress.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use eframe::egui;

use crate::progress::Progress;

/// Writes progress into the shared status line and wakes the UI, so a
/// worker thread can report while the form keeps drawing.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: Option<egui::Context>,
    epoch: Option<(Arc<AtomicU64>, u64)>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: Option<egui::Context>) -> Self {
        Self { status, ctx, epoch: None, done: 0, total: 0 }
    }

    /// Go quiet once `epoch` moves past its current value (e.g. on Reset).
    pub fn tied_to(mut self, epoch: &Arc<AtomicU64>) -> Self {
        let now = epoch.load(Ordering::SeqCst);
        self.epoch = Some((Arc::clone(epoch), now));
        self
    }

    fn is_current(&self) -> bool {
        match &self.epoch {
            Some((epoch, mine)) => epoch.load(Ordering::SeqCst) == *mine,
            None => true,
        }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if !self.is_current() {
            return;
        }
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn step_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", label, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Fetch complete")); // no counts if we never began
        } else {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(p: &Arc<Mutex<String>>) -> String {
        p.lock().unwrap().clone()
    }

    #[test]
    fn reports_steps_into_status() {
        let line = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(line.clone(), None);
        p.begin(1);
        p.step_done("game log");
        assert_eq!(status(&line), "Fetched game log (1/1)");
        p.finish();
        assert_eq!(status(&line), "Fetch complete (1/1)");
    }

    #[test]
    fn abandoned_worker_leaves_status_alone() {
        let line = Arc::new(Mutex::new(s!()));
        let epoch = Arc::new(AtomicU64::new(0));
        let mut p = GuiProgress::new(line.clone(), None).tied_to(&epoch);

        p.log("Fetching 2022-23 game log…");
        assert_eq!(status(&line), "Fetching 2022-23 game log…");

        // Reset happens while the fetch is still running.
        epoch.fetch_add(1, Ordering::SeqCst);
        *line.lock().unwrap() = s!("Choose a year to begin");

        p.begin(1);
        p.step_done("game log");
        p.finish();
        assert_eq!(status(&line), "Choose a year to begin");
    }
}
