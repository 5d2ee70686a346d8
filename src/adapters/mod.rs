//! Adapters - concrete implementations of the platform ports

mod soft_key_store;
mod static_capabilities;

#[cfg(test)]
pub mod fakes;

pub use soft_key_store::SoftKeyStore;
pub use static_capabilities::StaticCapabilities;
