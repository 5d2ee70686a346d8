//! Crypto objects carried by a crypto-bound authentication result

use std::fmt;

use crate::error::KeyStoreError;

/// An authenticated-encryption operation bound to the credential key
///
/// Produced by a key store adapter; only usable once the authentication
/// that gated the key has succeeded.
pub trait CipherOp: Send {
    /// Encrypt `plaintext`, returning nonce-prefixed ciphertext.
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, KeyStoreError>;
}

/// A keyed MAC operation bound to the credential key
pub trait MacOp: Send {
    fn compute(&mut self, data: &[u8]) -> Result<Vec<u8>, KeyStoreError>;
}

/// A signing operation bound to the credential key
pub trait SignatureOp: Send {
    fn sign(&mut self, data: &[u8]) -> Result<Vec<u8>, KeyStoreError>;
}

pub type BoxedCipher = Box<dyn CipherOp>;
pub type BoxedMac = Box<dyn MacOp>;
pub type BoxedSignature = Box<dyn SignatureOp>;

/// Crypto object returned by a successful authentication that was bound to
/// a crypto-gated operation
///
/// The platform populates at most one of cipher, MAC or signature; the
/// closed variant set encodes that directly. An attempt that was not
/// crypto-bound carries no handle at all (`Option<CryptoHandle>` is `None`).
/// The handle is owned by the success outcome and consumed by the caller.
pub enum CryptoHandle {
    Cipher(BoxedCipher),
    Mac(BoxedMac),
    Signature(BoxedSignature),
}

impl CryptoHandle {
    /// Short name of the populated operation, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CryptoHandle::Cipher(_) => "cipher",
            CryptoHandle::Mac(_) => "mac",
            CryptoHandle::Signature(_) => "signature",
        }
    }

    /// Consume the handle, returning the cipher if that is what it holds.
    pub fn into_cipher(self) -> Option<BoxedCipher> {
        match self {
            CryptoHandle::Cipher(cipher) => Some(cipher),
            _ => None,
        }
    }
}

impl fmt::Debug for CryptoHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CryptoHandle").field(&self.kind()).finish()
    }
}
