//! Lifecycle of the biometric-gated credential key

/// Process-wide credential key lifecycle
///
/// `Absent → Generated → PermanentlyInvalidated → (regenerate) → Generated`.
/// Mutated only by the credential key manager; read by the backend before
/// each attempt. The platform moves a key to `PermanentlyInvalidated` when
/// the enrolled biometric set changes after key creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// No key has been generated yet
    Absent,
    /// A key exists and is usable for crypto binding
    Generated,
    /// The enrolled biometric set changed; the key must be regenerated
    PermanentlyInvalidated,
}

impl KeyState {
    /// Whether a crypto binding can be prepared from the current key.
    pub fn is_usable(self) -> bool {
        matches!(self, KeyState::Generated)
    }

    /// Whether the next `ensure_key` call must generate a fresh key.
    pub fn needs_generation(self) -> bool {
        matches!(self, KeyState::Absent | KeyState::PermanentlyInvalidated)
    }
}
