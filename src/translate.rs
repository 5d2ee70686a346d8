//! Result Translator
//!
//! Pure mapping from each backend's native callback shape onto the unified
//! outcome, one direction only, no business logic. The two native shapes
//! are interchangeable in content; they stay distinct types at the port
//! boundary and collapse here.

use crate::model::{AuthenticationCallback, AuthenticationOutcome, CryptoHandle};
use crate::ports::{PromptCrypto, SensorCrypto, SensorEvent, UnifiedPromptEvent};

impl From<PromptCrypto> for CryptoHandle {
    fn from(crypto: PromptCrypto) -> Self {
        match crypto {
            PromptCrypto::Cipher(cipher) => CryptoHandle::Cipher(cipher),
            PromptCrypto::Mac(mac) => CryptoHandle::Mac(mac),
            PromptCrypto::Signature(signature) => CryptoHandle::Signature(signature),
        }
    }
}

impl From<SensorCrypto> for CryptoHandle {
    fn from(crypto: SensorCrypto) -> Self {
        match crypto {
            SensorCrypto::Cipher(cipher) => CryptoHandle::Cipher(cipher),
            SensorCrypto::Mac(mac) => CryptoHandle::Mac(mac),
            SensorCrypto::Signature(signature) => CryptoHandle::Signature(signature),
        }
    }
}

/// Map a unified prompt signal onto the unified outcome.
pub fn from_unified(event: UnifiedPromptEvent) -> AuthenticationOutcome {
    match event {
        UnifiedPromptEvent::Help { code, message } => AuthenticationOutcome::Help { code, message },
        UnifiedPromptEvent::Failed => AuthenticationOutcome::Failed,
        UnifiedPromptEvent::Error { code, message } => {
            AuthenticationOutcome::Error { code, message }
        }
        UnifiedPromptEvent::Succeeded { crypto } => {
            AuthenticationOutcome::Succeeded(crypto.map(CryptoHandle::from))
        }
    }
}

/// Map a legacy sensor signal onto the unified outcome.
pub fn from_sensor(event: SensorEvent) -> AuthenticationOutcome {
    match event {
        SensorEvent::Help { code, message } => AuthenticationOutcome::Help { code, message },
        SensorEvent::Failed => AuthenticationOutcome::Failed,
        SensorEvent::Error { code, message } => AuthenticationOutcome::Error { code, message },
        SensorEvent::Succeeded { crypto } => {
            AuthenticationOutcome::Succeeded(crypto.map(CryptoHandle::from))
        }
    }
}

/// Dispatch an outcome to the caller's callback.
pub fn deliver(outcome: AuthenticationOutcome, callback: &dyn AuthenticationCallback) {
    match outcome {
        AuthenticationOutcome::Help { code, message } => {
            callback.on_authentication_help(code, &message)
        }
        AuthenticationOutcome::Failed => callback.on_authentication_failed(),
        AuthenticationOutcome::Error { code, message } => {
            callback.on_authentication_error(code, &message)
        }
        AuthenticationOutcome::Succeeded(crypto) => callback.on_authentication_succeeded(crypto),
    }
}
