//! # Paillier Crypto
//!
//! Paillier public-key encryption with additive homomorphism: key generation,
//! encryption, decryption, public-key-only operators on ciphertexts, and the
//! text encodings used to move keys and ciphertexts in and out of storage.
//!
//! ```no_run
//! use num_bigint::BigUint;
//! use paillier_crypto::keypair::{KeyGenParams, PrivateKey};
//!
//! let params = KeyGenParams::try_with(1024)?;
//! let private_key = PrivateKey::try_with(&params)?;
//! let public_key = private_key.get_public_key();
//!
//! let c1 = public_key.encrypt(&BigUint::from(20u32))?;
//! let c2 = public_key.encrypt(&BigUint::from(22u32))?;
//! let total = public_key.add(&c1, &c2);
//!
//! assert_eq!(private_key.decrypt(&total)?, BigUint::from(42u32));
//! # Ok::<(), paillier_crypto::errors::PaillierError>(())
//! ```

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod homomorphic;
pub mod keypair;
pub mod record;
pub mod ring;

pub use cipher::Ciphertext;
pub use errors::PaillierError;
pub use keypair::{KeyGenParams, PrivateKey, PublicKey, generate_key_pair};
pub use record::MeterRecord;
