//! # Homomorphic Operators
//!
//! Operations on ciphertexts that need only the public key:
//!
//! * `E(m1) · E(m2) mod n²` decrypts to `m1 + m2 mod n`
//! * `E(m) · g^k mod n²` decrypts to `m + k mod n`
//! * `E(m)^k mod n²` decrypts to `m · k mod n`
//!
//! The constant `k` is not range checked. Keeping results meaningful modulo `n`
//! is the caller's job.

use crate::cipher::Ciphertext;
use crate::keypair::PublicKey;
use crate::ring::ONE;

use num_bigint::BigUint;

impl PublicKey {
    /// Adds two encrypted values.
    pub fn add(&self, c1: &Ciphertext, c2: &Ciphertext) -> Ciphertext {
        Ciphertext::new(self.ciphertext_ring().mul(c1.value(), c2.value()))
    }

    /// Adds the plaintext constant `k` to an encrypted value.
    pub fn add_constant(&self, c: &Ciphertext, k: &BigUint) -> Ciphertext {
        let ring = self.ciphertext_ring();
        let gk = ring.pow(self.g(), k);

        Ciphertext::new(ring.mul(c.value(), &gk))
    }

    /// Multiplies an encrypted value by the plaintext constant `k`.
    pub fn mul_constant(&self, c: &Ciphertext, k: &BigUint) -> Ciphertext {
        Ciphertext::new(self.ciphertext_ring().pow(c.value(), k))
    }

    /// Adds up any number of encrypted values.
    ///
    /// An empty input yields `1`, the blinding-free encryption of zero.
    pub fn sum<'a, I>(&self, ciphertexts: I) -> Ciphertext
    where
        I: IntoIterator<Item = &'a Ciphertext>,
    {
        ciphertexts
            .into_iter()
            .fold(Ciphertext::new(ONE.clone()), |acc, c| self.add(&acc, c))
    }
}
