//! HostNavigator trait - fire-and-forget navigation into the host

use crate::model::Permission;

/// Request code for the permission request flow.
pub const REQUEST_CODE_BIOMETRIC_PERMISSION: u32 = 900;
/// Request code for the credential enrollment screen.
pub const REQUEST_CODE_FINGERPRINT_ENROLLMENT: u32 = 901;
/// Request code for the security settings screen.
pub const REQUEST_CODE_SECURITY_SETTINGS: u32 = 902;

/// Navigation call-outs to the host application
///
/// All calls are fire-and-forget: the core never observes their results.
/// The caller is expected to re-invoke `authenticate` once the user returns.
pub trait HostNavigator: Send + Sync {
    /// Ask the host to request `permission` from the user.
    fn request_permission(&self, permission: Permission, request_code: u32);

    /// Open the credential enrollment screen (unified-prompt platforms only).
    fn start_credential_enrollment(&self, request_code: u32);

    /// Open the security settings screen (legacy platforms).
    fn start_security_settings(&self, request_code: u32);
}
