//! Unified authentication outcome and the caller-facing callback contract

use crate::model::CryptoHandle;

/// Platform error codes surfaced verbatim through `Error` outcomes
///
/// Numeric values match the platform's biometric error constants; both
/// native backends historically share them.
pub mod error_code {
    /// The sensor is unavailable (busy or disabled)
    pub const HW_UNAVAILABLE: u32 = 1;
    /// The sensor could not process the reading
    pub const UNABLE_TO_PROCESS: u32 = 2;
    /// The attempt timed out at the native layer
    pub const TIMEOUT: u32 = 3;
    /// The session was canceled, by the caller or the platform
    pub const CANCELED: u32 = 5;
    /// Too many mismatches; the sensor is locked out
    pub const LOCKOUT: u32 = 7;
}

/// Result of one authentication callback delivery
///
/// `Succeeded` and `Error` are terminal for the session; `Failed` is a
/// recoverable sensor mismatch (more attempts may follow) and `Help` is
/// informational (the session continues).
#[derive(Debug)]
pub enum AuthenticationOutcome {
    /// Authentication succeeded, with the crypto object it was bound to, if any
    Succeeded(Option<CryptoHandle>),
    /// The sensor did not recognize the credential; the session stays open
    Failed,
    /// Terminal native error, surfaced verbatim
    Error { code: u32, message: String },
    /// Informational guidance from the sensor (e.g. "move finger slower")
    Help { code: u32, message: String },
}

impl AuthenticationOutcome {
    /// Whether this outcome ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AuthenticationOutcome::Succeeded(_) | AuthenticationOutcome::Error { .. }
        )
    }
}

/// Unified callback surface
///
/// The platform exposes two interchangeable native callback interfaces; this
/// is the single contract both are translated onto. Exactly one of
/// `on_authentication_succeeded` / `on_authentication_error` is delivered
/// per session, exactly once, on the caller-supplied executor.
pub trait AuthenticationCallback: Send + Sync {
    fn on_authentication_help(&self, code: u32, message: &str);
    fn on_authentication_failed(&self);
    fn on_authentication_error(&self, code: u32, message: &str);
    fn on_authentication_succeeded(&self, crypto: Option<CryptoHandle>);
}
