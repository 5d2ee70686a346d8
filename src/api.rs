//! Public façade: the prompt builder and the authentication orchestrator

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::backend::{Backend, BackendSelection};
use crate::cancel::CancellationSignal;
use crate::error::{BioPromptResult, ConfigError, PreconditionError};
use crate::executor::Executor;
use crate::keys::CredentialKeyManager;
use crate::model::{
    AuthenticationCallback, KeyState, NegativeButton, NegativeButtonHandler, Permission,
    PromptConfig,
};
use crate::ports::{
    Capabilities, FingerprintSensor, HostNavigator, KeyStore, PromptDialog, UnifiedPrompt,
    REQUEST_CODE_BIOMETRIC_PERMISSION, REQUEST_CODE_FINGERPRINT_ENROLLMENT,
    REQUEST_CODE_SECURITY_SETTINGS,
};

/// Native services behind the two backends, supplied by the host
///
/// Both backend ports are required at build time; only the one matching the
/// platform capability is kept, the other is dropped.
pub struct PlatformPorts {
    pub capabilities: Arc<dyn Capabilities>,
    pub key_store: Arc<dyn KeyStore>,
    pub navigator: Arc<dyn HostNavigator>,
    pub unified_prompt: Box<dyn UnifiedPrompt>,
    pub fingerprint_sensor: Box<dyn FingerprintSensor>,
    pub dialog: Arc<Mutex<dyn PromptDialog>>,
}

/// Builder for [`BiometricPrompt`]
///
/// The title is required; building without one fails before any native call
/// is made. The backend is selected here, once, from platform capability.
pub struct Builder {
    platform: PlatformPorts,
    title: Option<String>,
    subtitle: Option<String>,
    description: Option<String>,
    negative_button: NegativeButton,
}

impl Builder {
    pub fn new(platform: PlatformPorts) -> Self {
        Self {
            platform,
            title: None,
            subtitle: None,
            description: None,
            negative_button: NegativeButton::None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Negative button with a custom click handler.
    pub fn negative_button(
        mut self,
        text: impl Into<String>,
        on_click: NegativeButtonHandler,
    ) -> Self {
        self.negative_button = NegativeButton::Handler {
            text: text.into(),
            on_click,
        };
        self
    }

    /// Negative button with a plain label and the default no-op handler.
    pub fn negative_button_text(mut self, text: impl Into<String>) -> Self {
        self.negative_button = NegativeButton::Label(text.into());
        self
    }

    /// Select the backend and assemble the prompt.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingTitle` if no non-empty title was set.
    pub fn build(self) -> BioPromptResult<BiometricPrompt> {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .ok_or(ConfigError::MissingTitle)?;

        let config = PromptConfig {
            title,
            subtitle: self.subtitle,
            description: self.description,
            negative_button: self.negative_button,
        };

        let backend = if self.platform.capabilities.supports_unified_prompt() {
            Backend::Modern {
                prompt: self.platform.unified_prompt,
            }
        } else {
            Backend::Legacy {
                sensor: self.platform.fingerprint_sensor,
                dialog: self.platform.dialog,
            }
        };
        info!(backend = ?backend.selection(), "prompt built");

        Ok(BiometricPrompt {
            config,
            backend,
            keys: CredentialKeyManager::new(self.platform.key_store),
            capabilities: self.platform.capabilities,
            navigator: self.platform.navigator,
        })
    }
}

/// One biometric authentication API over two incompatible platform backends
///
/// Checks permission and enrollment preconditions, then drives the selected
/// backend end-to-end. One active session per instance; results arrive only
/// through the caller's callback on the caller's executor.
pub struct BiometricPrompt {
    config: PromptConfig,
    backend: Backend,
    keys: CredentialKeyManager,
    capabilities: Arc<dyn Capabilities>,
    navigator: Arc<dyn HostNavigator>,
}

impl BiometricPrompt {
    pub fn builder(platform: PlatformPorts) -> Builder {
        Builder::new(platform)
    }

    /// Which backend this instance was built with. Fixed for the instance's
    /// lifetime.
    pub fn backend_selection(&self) -> BackendSelection {
        self.backend.selection()
    }

    /// Lifecycle state of the credential key.
    pub fn key_state(&self) -> KeyState {
        self.keys.key_state()
    }

    /// Permission the active backend requires.
    pub fn required_permission(&self) -> Permission {
        match self.backend.selection() {
            BackendSelection::Modern => Permission::UseBiometric,
            BackendSelection::Legacy => Permission::UseFingerprint,
        }
    }

    /// Check every authentication precondition without side effects.
    ///
    /// # Errors
    ///
    /// The first unmet precondition, in the order platform version,
    /// hardware, permission, enrollment.
    pub fn can_authenticate(&self) -> BioPromptResult<()> {
        if !self.capabilities.meets_minimum_platform_version() {
            return Err(PreconditionError::PlatformTooOld.into());
        }
        if !self.capabilities.has_biometric_hardware() {
            return Err(PreconditionError::NoHardware.into());
        }
        let permission = self.required_permission();
        if !self.capabilities.is_permission_granted(permission) {
            return Err(PreconditionError::PermissionDenied { permission }.into());
        }
        if !self.capabilities.has_enrolled_credential() {
            return Err(PreconditionError::NotEnrolled.into());
        }
        Ok(())
    }

    /// Run one authentication attempt.
    ///
    /// No return value; every result arrives through `callback` on
    /// `executor`. When a precondition fails the session never starts: the
    /// host is navigated toward the fix (permission request, enrollment or
    /// security settings) and no authentication callback is issued at all.
    pub fn authenticate(
        &mut self,
        cancel: CancellationSignal,
        executor: Arc<dyn Executor>,
        callback: Arc<dyn AuthenticationCallback>,
    ) {
        let permission = self.required_permission();
        debug!(%permission, "checking permission");

        if !self.capabilities.is_permission_granted(permission) {
            info!(%permission, "permission not granted; requesting from host");
            self.navigator
                .request_permission(permission, REQUEST_CODE_BIOMETRIC_PERMISSION);
            return;
        }

        if !self.capabilities.has_enrolled_credential() {
            // A precondition failure, not an authentication failure: steer
            // the user toward enrollment instead of reporting an error.
            match self.backend.selection() {
                BackendSelection::Modern => {
                    info!("no enrolled credential; opening enrollment");
                    self.navigator
                        .start_credential_enrollment(REQUEST_CODE_FINGERPRINT_ENROLLMENT);
                }
                BackendSelection::Legacy => {
                    info!("no enrolled credential; opening security settings");
                    self.navigator
                        .start_security_settings(REQUEST_CODE_SECURITY_SETTINGS);
                }
            }
            return;
        }

        debug!(backend = ?self.backend.selection(), "authenticating");
        self.backend
            .show_prompt(&mut self.keys, &self.config, &cancel, executor, callback);
    }
}
