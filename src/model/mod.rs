mod crypto;
mod key_state;
mod outcome;
mod permission;
mod prompt_config;

pub use crypto::{
    BoxedCipher, BoxedMac, BoxedSignature, CipherOp, CryptoHandle, MacOp, SignatureOp,
};
pub use key_state::KeyState;
pub use outcome::{error_code, AuthenticationCallback, AuthenticationOutcome};
pub use permission::Permission;
pub use prompt_config::{NegativeButton, NegativeButtonHandler, PromptConfig};
