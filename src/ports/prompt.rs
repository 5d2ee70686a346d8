//! UnifiedPrompt trait - the OS-rendered biometric prompt backend

use std::fmt;
use std::sync::Arc;

use crate::cancel::NativeCancellationSignal;
use crate::executor::Executor;
use crate::model::{BoxedCipher, BoxedMac, BoxedSignature, PromptConfig};

/// Crypto object shape of the unified prompt API
pub enum PromptCrypto {
    Cipher(BoxedCipher),
    Mac(BoxedMac),
    Signature(BoxedSignature),
}

impl fmt::Debug for PromptCrypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            PromptCrypto::Cipher(_) => "cipher",
            PromptCrypto::Mac(_) => "mac",
            PromptCrypto::Signature(_) => "signature",
        };
        f.debug_tuple("PromptCrypto").field(&kind).finish()
    }
}

/// Native callback signals of the unified prompt
///
/// One of the platform's two interchangeable callback shapes; translated
/// onto the unified contract by `translate`.
#[derive(Debug)]
pub enum UnifiedPromptEvent {
    Help { code: u32, message: String },
    Failed,
    Error { code: u32, message: String },
    Succeeded { crypto: Option<PromptCrypto> },
}

pub type UnifiedPromptEventSink = Box<dyn FnMut(UnifiedPromptEvent) + Send>;

/// The OS-rendered biometric prompt, available from
/// [`UNIFIED_PROMPT_MIN_API`](crate::ports::UNIFIED_PROMPT_MIN_API) onward
///
/// The prompt draws its own dialog from the text configuration handed to
/// each `authenticate` call; the adapter forwards the negative-button
/// handler to the native button.
pub trait UnifiedPrompt: Send {
    /// Native cancellation primitive for one authentication session.
    fn create_cancellation(&self) -> Arc<NativeCancellationSignal>;

    /// Begin authentication, rendering `config` and bound to `crypto` if
    /// present. Events arrive asynchronously through `events` on
    /// `executor`; this call never blocks waiting for the sensor.
    fn authenticate(
        &mut self,
        config: &PromptConfig,
        crypto: Option<PromptCrypto>,
        cancel: Arc<NativeCancellationSignal>,
        executor: Arc<dyn Executor>,
        events: UnifiedPromptEventSink,
    );
}
