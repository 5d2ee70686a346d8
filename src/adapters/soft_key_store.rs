//! Software key store
//!
//! In-memory stand-in for the platform's hardware-isolated store, for hosts
//! that lack one and for tests. Keys live in process memory only; ciphers
//! seal with AES-256-GCM and a random nonce per operation. Invalidation is
//! the platform's act in production; here it can be simulated directly.

use std::collections::HashMap;
use std::sync::Mutex;

use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM, NONCE_LEN};
use ring::rand::{SecureRandom, SystemRandom};
use tracing::debug;

use crate::error::KeyStoreError;
use crate::model::{BoxedCipher, CipherOp};
use crate::ports::{KeySpec, KeyStore};

struct KeyEntry {
    material: [u8; 32],
    invalidated: bool,
}

#[derive(Default)]
pub struct SoftKeyStore {
    keys: Mutex<HashMap<String, KeyEntry>>,
}

impl SoftKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the platform invalidating `name` after the enrolled
    /// biometric set changed. Unknown names are ignored.
    pub fn invalidate(&self, name: &str) {
        if let Ok(mut keys) = self.keys.lock() {
            if let Some(entry) = keys.get_mut(name) {
                entry.invalidated = true;
                debug!(key = name, "key marked permanently invalidated");
            }
        }
    }
}

fn lock_poisoned() -> KeyStoreError {
    KeyStoreError::StoreUnavailable {
        reason: "key table lock poisoned".to_string(),
    }
}

impl KeyStore for SoftKeyStore {
    fn generate_key(&self, spec: &KeySpec) -> Result<(), KeyStoreError> {
        let mut keys = self.keys.lock().map_err(|_| lock_poisoned())?;

        // Idempotent by name: only a missing or invalidated key is replaced.
        if keys.get(&spec.name).is_some_and(|entry| !entry.invalidated) {
            debug!(key = %spec.name, "key already present; generation skipped");
            return Ok(());
        }

        let mut material = [0u8; 32];
        SystemRandom::new()
            .fill(&mut material)
            .map_err(|_| KeyStoreError::AlgorithmUnavailable {
                reason: "system rng failure".to_string(),
            })?;

        keys.insert(
            spec.name.clone(),
            KeyEntry {
                material,
                invalidated: false,
            },
        );
        debug!(
            key = %spec.name,
            user_auth_required = spec.user_authentication_required,
            "generated AES-256-GCM key"
        );
        Ok(())
    }

    fn contains_key(&self, name: &str) -> Result<bool, KeyStoreError> {
        let keys = self.keys.lock().map_err(|_| lock_poisoned())?;
        Ok(keys.contains_key(name))
    }

    fn init_cipher(&self, name: &str) -> Result<BoxedCipher, KeyStoreError> {
        let keys = self.keys.lock().map_err(|_| lock_poisoned())?;
        let entry = keys.get(name).ok_or_else(|| KeyStoreError::KeyNotFound {
            name: name.to_string(),
        })?;

        if entry.invalidated {
            return Err(KeyStoreError::PermanentlyInvalidated);
        }

        Ok(Box::new(GcmCipher {
            material: entry.material,
            rng: SystemRandom::new(),
        }))
    }
}

/// AES-256-GCM encryption operation, nonce-prefixed output
struct GcmCipher {
    material: [u8; 32],
    rng: SystemRandom,
}

impl CipherOp for GcmCipher {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, KeyStoreError> {
        let unbound =
            UnboundKey::new(&AES_256_GCM, &self.material).map_err(|_| KeyStoreError::InvalidKey {
                reason: "key material rejected by AES-256-GCM".to_string(),
            })?;
        let key = LessSafeKey::new(unbound);

        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| KeyStoreError::Io {
                reason: "nonce generation failed".to_string(),
            })?;
        let nonce = Nonce::assume_unique_for_key(nonce_bytes);

        let mut sealed = plaintext.to_vec();
        key.seal_in_place_append_tag(nonce, Aad::empty(), &mut sealed)
            .map_err(|_| KeyStoreError::Io {
                reason: "seal failed".to_string(),
            })?;

        let mut out = nonce_bytes.to_vec();
        out.append(&mut sealed);
        Ok(out)
    }
}
