//! Host permission kinds

use std::fmt;

/// Permission required before an authentication attempt
///
/// Which one applies follows the selected backend: the unified prompt wants
/// the biometric permission, the legacy sensor the fingerprint one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    UseBiometric,
    UseFingerprint,
}

impl Permission {
    /// Platform identifier of the permission.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::UseBiometric => "USE_BIOMETRIC",
            Permission::UseFingerprint => "USE_FINGERPRINT",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
