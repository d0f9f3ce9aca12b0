use std::future::Future;

use tokio::task::JoinHandle;

/// Handle to a scheduled debounce/lookup task.
///
/// Aborting releases the debounce timer and any in-flight request. The
/// handle aborts on drop, so teardown is tied to ownership: dropping the
/// controller (or replacing the pending task) cancels whatever was running.
#[derive(Debug)]
pub struct LookupTask {
    handle: JoinHandle<()>,
}

impl LookupTask {
    /// Spawns onto the current Tokio runtime.
    pub(crate) fn spawn(future: impl Future<Output = ()> + Send + 'static) -> Self {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Cancels the task. Idempotent.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for LookupTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
