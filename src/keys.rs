//! Credential Key Manager
//!
//! Owns the one biometric-gated credential key in the secure key store. A
//! crypto-binding failure must never block the user from authenticating:
//! every store error degrades to "no cipher for this attempt" and is only
//! logged. Permanent invalidation additionally regenerates the key eagerly
//! so the next attempt can bind again.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::KeyStoreError;
use crate::model::{BoxedCipher, KeyState};
use crate::ports::{KeySpec, KeyStore};

/// Reserved key-store entry name. The only state this crate persists.
pub const CREDENTIAL_KEY_NAME: &str = "bioprompt.credential";

/// Manages creation and retrieval of the credential key
pub struct CredentialKeyManager {
    store: Arc<dyn KeyStore>,
    state: KeyState,
}

impl CredentialKeyManager {
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self {
            store,
            state: KeyState::Absent,
        }
    }

    /// Current lifecycle state of the credential key.
    pub fn key_state(&self) -> KeyState {
        self.state
    }

    /// Generate the credential key if none is usable. Idempotent: safe to
    /// call every session, a no-op while a valid key exists. Generation
    /// failures are logged and swallowed; the attempt proceeds unbound.
    pub fn ensure_key(&mut self) {
        if !self.state.needs_generation() {
            debug!(key = CREDENTIAL_KEY_NAME, "credential key already usable");
            return;
        }

        // A key left behind by an earlier process is adopted, not replaced.
        // Invalidated state always regenerates; the stale entry would still
        // be present in the store.
        if self.state == KeyState::Absent {
            match self.store.contains_key(CREDENTIAL_KEY_NAME) {
                Ok(true) => {
                    self.state = KeyState::Generated;
                    debug!(key = CREDENTIAL_KEY_NAME, "adopted existing credential key");
                    return;
                }
                Ok(false) => {}
                Err(err) => {
                    warn!(key = CREDENTIAL_KEY_NAME, %err, "key lookup failed");
                }
            }
        }

        let spec = KeySpec {
            name: CREDENTIAL_KEY_NAME.to_string(),
            user_authentication_required: true,
        };
        match self.store.generate_key(&spec) {
            Ok(()) => {
                self.state = KeyState::Generated;
                info!(key = CREDENTIAL_KEY_NAME, "credential key ready");
            }
            Err(err) => {
                warn!(
                    key = CREDENTIAL_KEY_NAME,
                    %err,
                    "credential key generation failed; continuing without crypto binding"
                );
            }
        }
    }

    /// Fetch the key and initialize an encryption operation bound to it.
    ///
    /// Returns `None` when the store is unavailable or the key was never
    /// generated; the caller proceeds without a crypto binding. Permanent
    /// invalidation also returns `None` for this attempt but regenerates
    /// the key immediately.
    pub fn prepare_cipher(&mut self) -> Option<BoxedCipher> {
        if !self.state.is_usable() {
            debug!(
                key = CREDENTIAL_KEY_NAME,
                state = ?self.state,
                "no usable credential key; skipping crypto binding"
            );
            return None;
        }

        match self.store.init_cipher(CREDENTIAL_KEY_NAME) {
            Ok(cipher) => {
                debug!(key = CREDENTIAL_KEY_NAME, "cipher bound to credential key");
                Some(cipher)
            }
            Err(KeyStoreError::PermanentlyInvalidated) => {
                warn!(
                    key = CREDENTIAL_KEY_NAME,
                    "credential key permanently invalidated; regenerating"
                );
                self.state = KeyState::PermanentlyInvalidated;
                self.ensure_key();
                None
            }
            Err(err) => {
                warn!(
                    key = CREDENTIAL_KEY_NAME,
                    %err,
                    "cipher init failed; proceeding without crypto binding"
                );
                None
            }
        }
    }
}
