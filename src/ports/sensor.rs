//! FingerprintSensor trait - the legacy fingerprint-specific backend

use std::fmt;
use std::sync::Arc;

use crate::cancel::NativeCancellationSignal;
use crate::executor::Executor;
use crate::model::{BoxedCipher, BoxedMac, BoxedSignature};

/// Crypto object shape of the legacy fingerprint API
pub enum SensorCrypto {
    Cipher(BoxedCipher),
    Mac(BoxedMac),
    Signature(BoxedSignature),
}

impl fmt::Debug for SensorCrypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            SensorCrypto::Cipher(_) => "cipher",
            SensorCrypto::Mac(_) => "mac",
            SensorCrypto::Signature(_) => "signature",
        };
        f.debug_tuple("SensorCrypto").field(&kind).finish()
    }
}

/// Native callback signals of the legacy sensor
///
/// Identical in shape to the unified prompt's events but historically a
/// separate interface; kept distinct at the port boundary and collapsed by
/// `translate`.
#[derive(Debug)]
pub enum SensorEvent {
    Help { code: u32, message: String },
    Failed,
    Error { code: u32, message: String },
    Succeeded { crypto: Option<SensorCrypto> },
}

pub type SensorEventSink = Box<dyn FnMut(SensorEvent) + Send>;

/// The legacy fingerprint sensor API
///
/// Has no built-in UI: the backend shows the substitute dialog before
/// invoking this, and updates it as events arrive.
pub trait FingerprintSensor: Send {
    /// Begin authentication, bound to `crypto` if present. Events arrive
    /// asynchronously through `events` on `executor`.
    fn authenticate(
        &mut self,
        crypto: Option<SensorCrypto>,
        cancel: Arc<NativeCancellationSignal>,
        executor: Arc<dyn Executor>,
        events: SensorEventSink,
    );
}
