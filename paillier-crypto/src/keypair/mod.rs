//! Key generation and key types.

pub mod keys;
pub mod params;

pub use keys::{PrivateKey, PublicKey, generate_key_pair};
pub use params::{DEFAULT_BIT_LENGTH, KeyGenParams, MIN_BIT_LENGTH, PRESET_BIT_LENGTHS};
