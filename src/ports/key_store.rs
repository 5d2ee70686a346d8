//! KeyStore trait - capability to hold the biometric-gated credential key

use crate::error::KeyStoreError;
use crate::model::BoxedCipher;

/// Parameters for generating the credential key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    /// Reserved entry name in the store
    pub name: String,
    /// Require a fresh user authentication for every use of the key
    pub user_authentication_required: bool,
}

/// Secure, hardware-isolated key store
///
/// The store holds symmetric keys for authenticated encryption. Generation
/// is idempotent-by-name: generating over an existing valid key is a no-op,
/// while generating over a permanently invalidated key replaces it. This
/// keeps redundant `ensure_key` calls from concurrent sessions safe.
pub trait KeyStore: Send + Sync {
    /// Generate the key described by `spec`, or do nothing if a valid key
    /// with that name already exists.
    fn generate_key(&self, spec: &KeySpec) -> Result<(), KeyStoreError>;

    /// Whether a key with `name` exists (valid or invalidated).
    fn contains_key(&self, name: &str) -> Result<bool, KeyStoreError>;

    /// Fetch the key and initialize an encryption operation bound to it.
    ///
    /// # Errors
    ///
    /// `PermanentlyInvalidated` when the enrolled biometric set changed
    /// since key creation; `KeyNotFound` when the key was never generated;
    /// the remaining variants for store-level failures.
    fn init_cipher(&self, name: &str) -> Result<BoxedCipher, KeyStoreError>;
}
