//! Capabilities trait - stateless queries over platform and hardware state

use crate::model::Permission;

/// First platform API level that supports biometric authentication at all.
pub const MIN_SUPPORTED_API: u32 = 23;

/// First platform API level that ships the OS-rendered unified prompt.
pub const UNIFIED_PROMPT_MIN_API: u32 = 28;

/// Pure queries over platform version, hardware and enrollment state
///
/// No side effects and no failure modes: absent hardware or enrollment is a
/// normal `false`, never an error.
pub trait Capabilities: Send + Sync {
    /// The platform ships the OS-rendered unified prompt.
    fn supports_unified_prompt(&self) -> bool;

    /// The platform version supports biometric authentication at all.
    fn meets_minimum_platform_version(&self) -> bool;

    /// A biometric sensor is present on the device.
    fn has_biometric_hardware(&self) -> bool;

    /// At least one biometric credential is enrolled.
    fn has_enrolled_credential(&self) -> bool;

    /// The host granted `permission`.
    fn is_permission_granted(&self, permission: Permission) -> bool;
}
