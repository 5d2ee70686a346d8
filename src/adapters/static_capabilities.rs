//! Fixed capability table
//!
//! For hosts whose platform state is known at startup, and for tests. Real
//! hosts with dynamic state implement [`Capabilities`] directly.

use crate::model::Permission;
use crate::ports::{Capabilities, MIN_SUPPORTED_API, UNIFIED_PROMPT_MIN_API};

#[derive(Debug, Clone)]
pub struct StaticCapabilities {
    pub api_level: u32,
    pub hardware: bool,
    pub enrolled: bool,
    pub permission_granted: bool,
}

impl StaticCapabilities {
    /// A platform with the unified prompt, hardware, an enrolled credential
    /// and the permission granted.
    pub fn modern() -> Self {
        Self {
            api_level: UNIFIED_PROMPT_MIN_API,
            hardware: true,
            enrolled: true,
            permission_granted: true,
        }
    }

    /// A legacy-sensor platform with hardware, an enrolled credential and
    /// the permission granted.
    pub fn legacy() -> Self {
        Self {
            api_level: MIN_SUPPORTED_API,
            hardware: true,
            enrolled: true,
            permission_granted: true,
        }
    }
}

impl Capabilities for StaticCapabilities {
    fn supports_unified_prompt(&self) -> bool {
        self.api_level >= UNIFIED_PROMPT_MIN_API
    }

    fn meets_minimum_platform_version(&self) -> bool {
        self.api_level >= MIN_SUPPORTED_API
    }

    fn has_biometric_hardware(&self) -> bool {
        self.hardware
    }

    fn has_enrolled_credential(&self) -> bool {
        self.enrolled
    }

    fn is_permission_granted(&self, _permission: Permission) -> bool {
        self.permission_granted
    }
}
