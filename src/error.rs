//! Error types for the bioprompt library
//!
//! Errors are organized hierarchically and use thiserror for implementation.
//! Key-store errors never cross the credential-key-manager boundary during
//! an authentication attempt; they are surfaced here for direct key-store
//! users and for adapters.

use thiserror::Error;

use crate::model::Permission;

/// Result type alias for bioprompt operations
pub type BioPromptResult<T> = Result<T, BioPromptError>;

/// Top-level error type for all bioprompt operations
#[derive(Error, Debug)]
pub enum BioPromptError {
    /// Prompt configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Precondition failures detected before any native call
    #[error("precondition not met: {0}")]
    Precondition(#[from] PreconditionError),

    /// Secure key store errors
    #[error("key store error: {0}")]
    KeyStore(#[from] KeyStoreError),
}

/// Errors raised while building a prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The native prompt rejects untitled dialogs, so building fails fast
    /// before any native call is made.
    #[error("a title is required to build the prompt")]
    MissingTitle,
}

/// Precondition failures
///
/// These are detected synchronously, never retried automatically, and never
/// reported through the authentication callback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// Platform version below the supported minimum
    #[error("platform version is below the supported minimum")]
    PlatformTooOld,

    /// No biometric sensor present on the device
    #[error("no biometric hardware detected")]
    NoHardware,

    /// No biometric credential enrolled
    #[error("no biometric credential is enrolled")]
    NotEnrolled,

    /// Required permission not granted by the host
    #[error("permission {permission} is not granted")]
    PermissionDenied { permission: Permission },
}

/// Secure key store errors
///
/// During authentication every variant is non-fatal: the credential key
/// manager logs it and the attempt proceeds without a crypto binding.
/// `PermanentlyInvalidated` additionally marks the key for regeneration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyStoreError {
    /// Requested algorithm or padding not available
    #[error("algorithm unavailable: {reason}")]
    AlgorithmUnavailable { reason: String },

    /// Key store could not be opened or loaded
    #[error("key store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// The enrolled biometric set changed since the key was created
    #[error("key permanently invalidated: enrolled biometrics changed since key creation")]
    PermanentlyInvalidated,

    /// Key exists but cannot be recovered from the store
    #[error("key unrecoverable: {reason}")]
    UnrecoverableKey { reason: String },

    /// Certificate chain error while loading the store
    #[error("certificate error: {reason}")]
    Certificate { reason: String },

    /// I/O error while loading the store
    #[error("key store I/O error: {reason}")]
    Io { reason: String },

    /// No key with the given name was ever generated
    #[error("no key named {name} in the store")]
    KeyNotFound { name: String },

    /// Key material rejected by the cipher
    #[error("invalid key material: {reason}")]
    InvalidKey { reason: String },
}
