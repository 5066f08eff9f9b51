use log::{debug, trace};

/// Gets notified after every training epoch.
pub trait EpochObserver {
    /// Called once an epoch has finished.
    ///
    /// # Arguments
    /// * `epoch` - How many epochs have been completed, starting at 1.
    /// * `coef` - The coefficient at the end of that epoch.
    fn on_epoch_end(&mut self, epoch: usize, coef: f64);
}

impl<F> EpochObserver for F
where
    F: FnMut(usize, f64),
{
    fn on_epoch_end(&mut self, epoch: usize, coef: f64) {
        self(epoch, coef)
    }
}

/// Ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EpochObserver for NoopObserver {
    fn on_epoch_end(&mut self, _epoch: usize, _coef: f64) {}
}

/// Reports training progress through the `log` facade.
///
/// Every `every`-th epoch (and the last one) is logged at `debug`, the rest
/// at `trace`.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    every: usize,
    total: usize,
}

impl LogObserver {
    /// Returns a new `LogObserver`.
    ///
    /// # Arguments
    /// * `every` - Epoch interval between `debug` lines, at least 1.
    /// * `total` - The number of epochs the run will perform.
    pub fn new(every: usize, total: usize) -> Self {
        Self {
            every: every.max(1),
            total,
        }
    }

    fn is_milestone(&self, epoch: usize) -> bool {
        epoch % self.every == 0 || epoch == self.total
    }
}

impl EpochObserver for LogObserver {
    fn on_epoch_end(&mut self, epoch: usize, coef: f64) {
        if self.is_milestone(epoch) {
            debug!("epoch {epoch}/{}: a = {coef:.2}", self.total);
        } else {
            trace!("epoch {epoch}/{}: a = {coef}", self.total);
        }
    }
}
