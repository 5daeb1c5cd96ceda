use std::cell::Cell;
use std::rc::Rc;

/// The running flag shared between the session and a sort run.
///
/// Everything runs on the UI thread, so a plain `Cell` behind an `Rc` is
/// enough; clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    running: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new run as active.
    pub fn arm(&self) {
        self.running.set(true);
    }

    pub fn cancel(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn is_cancelled(&self) -> bool {
        !self.running.get()
    }
}
