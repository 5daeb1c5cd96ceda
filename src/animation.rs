use tracing::debug;

use crate::cancellation::CancellationToken;
use crate::host::Host;
use crate::sorting_algorithms::{Algorithm, Highlights, SortEngine, Step};

/// Result of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A step was logged; suspend for the delay, then tick again.
    Pending,
    Completed,
    Stopped,
}

/// Paces a sort engine: every step is logged, then the caller suspends,
/// then the step is drawn and the token re-checked before the next one.
pub struct Animation {
    algorithm: Algorithm,
    engine: Box<dyn SortEngine>,
    token: CancellationToken,
    pending: Option<Step>,
    steps: usize,
    swaps: usize,
}

impl Animation {
    pub fn new(algorithm: Algorithm, values: Vec<i32>, token: CancellationToken) -> Self {
        Animation {
            algorithm,
            engine: algorithm.engine(values),
            token,
            pending: None,
            steps: 0,
            swaps: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn values(&self) -> &[i32] {
        self.engine.values()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn swaps(&self) -> usize {
        self.swaps
    }

    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H) -> Progress {
        if let Some(step) = self.pending.take() {
            host.draw_bars(self.engine.values(), step.highlights());
        }
        if self.token.is_cancelled() {
            return self.finish(host, Progress::Stopped);
        }
        match self.engine.next() {
            Some(step) => {
                self.steps += 1;
                if step.is_swap() {
                    self.swaps += 1;
                }
                debug!(algorithm = %self.algorithm, step = self.steps, "{}", step);
                host.append_log(&step.to_string());
                self.pending = Some(step);
                Progress::Pending
            }
            None => self.finish(host, Progress::Completed),
        }
    }

    fn finish<H: Host + ?Sized>(&mut self, host: &mut H, progress: Progress) -> Progress {
        host.draw_bars(self.engine.values(), Highlights::none());
        progress
    }

    pub fn into_values(self) -> Vec<i32> {
        self.engine.into_values()
    }
}
