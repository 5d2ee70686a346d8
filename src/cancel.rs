//! Cooperative cancellation, bridged between the caller and the native layer
//!
//! One caller-facing [`CancellationSignal`] maps one-to-one onto one
//! [`NativeCancellationSignal`] for the duration of a session. Cancellation
//! is a request: the native layer aborts cooperatively and still delivers a
//! terminal `Error` callback; nothing is forcibly terminated and no timeout
//! is enforced here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

type Hook = Box<dyn FnOnce() + Send>;

fn take_hook(slot: &Mutex<Option<Hook>>) -> Option<Hook> {
    slot.lock().ok().and_then(|mut guard| guard.take())
}

/// Caller-facing cancellation token
///
/// Clones share state. At most one cancel listener is active at a time; the
/// backend installs one per session, replacing any previous registration.
#[derive(Clone, Default)]
pub struct CancellationSignal {
    inner: Arc<SignalState>,
}

#[derive(Default)]
struct SignalState {
    cancelled: AtomicBool,
    listener: Mutex<Option<Hook>>,
}

impl CancellationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Request cancellation. The registered listener fires exactly once;
    /// repeated calls are no-ops.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        debug!("cancellation requested");
        if let Some(listener) = take_hook(&self.inner.listener) {
            listener();
        }
    }

    /// Register the cancel listener, arming it synchronously: if the token
    /// is already cancelled the listener runs immediately on this thread.
    pub fn set_on_cancel(&self, listener: impl FnOnce() + Send + 'static) {
        if self.is_cancelled() {
            listener();
            return;
        }
        if let Ok(mut slot) = self.inner.listener.lock() {
            *slot = Some(Box::new(listener));
        }
        // cancel() may have raced between the check and the store
        if self.is_cancelled() {
            if let Some(listener) = take_hook(&self.inner.listener) {
                listener();
            }
        }
    }
}

/// Native cancellation primitive owned by the active backend's session
///
/// The abort hook is what actually tells the native layer to stop; it fires
/// exactly once.
#[derive(Default)]
pub struct NativeCancellationSignal {
    cancelled: AtomicBool,
    abort: Mutex<Option<Hook>>,
}

impl NativeCancellationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Signal the native layer to abort the in-flight operation.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        debug!("native cancellation signalled");
        if let Some(abort) = take_hook(&self.abort) {
            abort();
        }
    }

    /// Install the native abort path. Runs immediately if the primitive was
    /// already cancelled before the native call began.
    pub fn set_abort_hook(&self, abort: impl FnOnce() + Send + 'static) {
        if self.is_cancelled() {
            abort();
            return;
        }
        if let Ok(mut slot) = self.abort.lock() {
            *slot = Some(Box::new(abort));
        }
        if self.is_cancelled() {
            if let Some(abort) = take_hook(&self.abort) {
                abort();
            }
        }
    }
}

/// Bridge the caller token onto the session's native primitive (one-to-one
/// for the session's duration). Arming is synchronous.
pub fn bridge(cancel: &CancellationSignal, native: Arc<NativeCancellationSignal>) {
    cancel.set_on_cancel(move || native.cancel());
}
