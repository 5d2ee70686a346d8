//! Backend variants
//!
//! A closed set of two mutually exclusive authentication strategies,
//! selected once at build time from platform capability and never revisited
//! for the prompt's lifetime. There is no fallback from Modern to Legacy
//! mid-session.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::cancel::{bridge, CancellationSignal, NativeCancellationSignal};
use crate::executor::Executor;
use crate::keys::CredentialKeyManager;
use crate::model::{AuthenticationCallback, AuthenticationOutcome, PromptConfig};
use crate::ports::{FingerprintSensor, PromptCrypto, PromptDialog, SensorCrypto, UnifiedPrompt};
use crate::translate;

/// Which backend a prompt instance was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendSelection {
    /// OS-rendered unified prompt
    Modern,
    /// Legacy fingerprint sensor with a substitute dialog
    Legacy,
}

pub(crate) enum Backend {
    Modern {
        prompt: Box<dyn UnifiedPrompt>,
    },
    Legacy {
        sensor: Box<dyn FingerprintSensor>,
        dialog: Arc<Mutex<dyn PromptDialog>>,
    },
}

impl Backend {
    pub(crate) fn selection(&self) -> BackendSelection {
        match self {
            Backend::Modern { .. } => BackendSelection::Modern,
            Backend::Legacy { .. } => BackendSelection::Legacy,
        }
    }

    /// Drive one authentication attempt through the native layer.
    ///
    /// Preconditions have already been checked by the orchestrator.
    pub(crate) fn show_prompt(
        &mut self,
        keys: &mut CredentialKeyManager,
        config: &PromptConfig,
        cancel: &CancellationSignal,
        executor: Arc<dyn Executor>,
        callback: Arc<dyn AuthenticationCallback>,
    ) {
        // Lazy, first attempt only; a no-op afterwards.
        keys.ensure_key();

        match self {
            Backend::Modern { prompt } => {
                let crypto = keys.prepare_cipher().map(PromptCrypto::Cipher);
                debug!(bound = crypto.is_some(), "starting unified prompt");

                let native = prompt.create_cancellation();
                bridge(cancel, Arc::clone(&native));

                let cb = Arc::clone(&callback);
                prompt.authenticate(
                    config,
                    crypto,
                    native,
                    executor,
                    Box::new(move |event| {
                        let outcome = translate::from_unified(event);
                        if outcome.is_terminal() {
                            debug!("unified prompt session finished");
                        }
                        translate::deliver(outcome, cb.as_ref());
                    }),
                );
            }
            Backend::Legacy { sensor, dialog } => {
                // The legacy API draws no UI of its own; the substitute
                // dialog goes up before the native call.
                if let Ok(mut d) = dialog.lock() {
                    d.show(config);
                }

                let crypto = keys.prepare_cipher().map(SensorCrypto::Cipher);
                debug!(bound = crypto.is_some(), "starting legacy sensor");

                let native = Arc::new(NativeCancellationSignal::new());
                bridge(cancel, Arc::clone(&native));

                let cb = Arc::clone(&callback);
                let dialog = Arc::clone(dialog);
                let session_token = cancel.clone();
                sensor.authenticate(
                    crypto,
                    native,
                    executor,
                    Box::new(move |event| {
                        // Dialog first, then the unified callback.
                        let outcome = translate::from_sensor(event);
                        if outcome.is_terminal() {
                            if let Ok(mut d) = dialog.lock() {
                                d.dismiss();
                            }
                        }
                        match &outcome {
                            AuthenticationOutcome::Error { .. } => {
                                // The sensor session is dead; release the
                                // caller token so the bridged primitive
                                // cannot outlive it.
                                session_token.cancel();
                            }
                            AuthenticationOutcome::Help { message, .. } => {
                                if let Ok(mut d) = dialog.lock() {
                                    d.update_status(message);
                                }
                            }
                            _ => {}
                        }
                        translate::deliver(outcome, cb.as_ref());
                    }),
                );
            }
        }
    }
}
