//! # Ring Crypto Module
//!
//! Provides the [`Ring`] view over Z_k for arbitrary-precision moduli, plus the
//! random sampling helpers used by key generation and encryption.

pub mod math;
pub mod random;

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::One;

lazy_static! {
    /// The integer 1, shared by every modular computation in the crate.
    pub static ref ONE: BigUint = BigUint::one();
}

pub use math::{Ring, l_function};
pub use random::{random_below, random_bits, random_prime, random_unit};
