//! Caller-supplied execution context
//!
//! All native events, the result translation and any dialog updates for a
//! session run serialized on the same executor. The authentication wait
//! itself is a registered callback; no thread blocks on biometric input.

/// Execution context for callback delivery.
pub trait Executor: Send + Sync {
    fn execute(&self, task: Box<dyn FnOnce() + Send>);
}

/// Runs tasks inline on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectExecutor;

impl Executor for DirectExecutor {
    fn execute(&self, task: Box<dyn FnOnce() + Send>) {
        task();
    }
}
