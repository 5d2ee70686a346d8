//! Ports (traits) for the host platform
//!
//! The core depends on these abstractions, not on any concrete platform.
//! The host supplies implementations for its secure authentication
//! subsystem, secure key store, dialog rendering and navigation; the
//! adapters module ships software implementations where one makes sense.

mod capabilities;
mod dialog;
mod key_store;
mod navigator;
mod prompt;
mod sensor;

pub use capabilities::{Capabilities, MIN_SUPPORTED_API, UNIFIED_PROMPT_MIN_API};
pub use dialog::PromptDialog;
pub use key_store::{KeySpec, KeyStore};
pub use navigator::{
    HostNavigator, REQUEST_CODE_BIOMETRIC_PERMISSION, REQUEST_CODE_FINGERPRINT_ENROLLMENT,
    REQUEST_CODE_SECURITY_SETTINGS,
};
pub use prompt::{PromptCrypto, UnifiedPrompt, UnifiedPromptEvent, UnifiedPromptEventSink};
pub use sensor::{FingerprintSensor, SensorCrypto, SensorEvent, SensorEventSink};
