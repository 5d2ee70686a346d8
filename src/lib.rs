//! bioprompt - one biometric authentication API over two incompatible
//! platform backends
//!
//! From one platform version onward the OS renders its own unified
//! biometric prompt; older versions only have a fingerprint-specific API
//! with no UI at all. This crate hides the split behind a single façade:
//! it selects a backend once per prompt instance, manages a
//! hardware-backed credential key whose validity is tied to the enrolled
//! biometric set, bridges the caller's cancellation token onto the active
//! backend's native primitive, and translates both native callback shapes
//! into one result contract.
//!
//! The host platform is reached exclusively through the traits in
//! [`ports`]; [`adapters`] ships a software key store and a static
//! capability table for hosts without the real thing.
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use bioprompt::{BiometricPrompt, CancellationSignal, DirectExecutor, PlatformPorts};
//! # use bioprompt::model::AuthenticationCallback;
//! # fn host_ports() -> PlatformPorts { unimplemented!() }
//! # fn host_callback() -> Arc<dyn AuthenticationCallback> { unimplemented!() }
//!
//! let mut prompt = BiometricPrompt::builder(host_ports())
//!     .title("Unlock")
//!     .subtitle("Confirm it is you")
//!     .negative_button_text("Cancel")
//!     .build()?;
//!
//! let cancel = CancellationSignal::new();
//! prompt.authenticate(cancel.clone(), Arc::new(DirectExecutor), host_callback());
//! # Ok::<(), bioprompt::BioPromptError>(())
//! ```

pub mod adapters;
pub mod api;
mod backend;
pub mod cancel;
pub mod error;
pub mod executor;
pub mod keys;
pub mod model;
pub mod ports;
pub mod translate;

pub use api::{BiometricPrompt, Builder, PlatformPorts};
pub use backend::BackendSelection;
pub use cancel::CancellationSignal;
pub use error::{BioPromptError, BioPromptResult};
pub use executor::{DirectExecutor, Executor};
pub use keys::{CredentialKeyManager, CREDENTIAL_KEY_NAME};
pub use model::{AuthenticationCallback, AuthenticationOutcome, CryptoHandle, KeyState};
