//! # Cipher Module
//!
//! Encryption under a [`PublicKey`] and decryption under a [`PrivateKey`].
//!
//! `E(m) = g^m · r^n mod n²` with a fresh blinding value `r` per call, and
//! `D(c) = L(c^l mod n²) · u mod n`.

use crate::errors::PaillierError;
use crate::keypair::{PrivateKey, PublicKey};
use crate::ring::{Ring, l_function, random_unit};

use num_bigint::BigUint;
use rand::TryCryptoRng;
use rand::rngs::OsRng;

/// A Paillier ciphertext, an element of `[0, n²)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_inner(self) -> BigUint {
        self.value
    }
}

impl From<BigUint> for Ciphertext {
    fn from(value: BigUint) -> Self {
        Self::new(value)
    }
}

impl PublicKey {
    /// Encrypts `plaintext`, drawing the blinding value from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns `PaillierError::MessageTooLarge` if `plaintext >= n`.
    pub fn encrypt(&self, plaintext: &BigUint) -> Result<Ciphertext, PaillierError> {
        self.encrypt_with_rng(&mut OsRng, plaintext)
    }

    /// Encrypts `plaintext`, drawing the blinding value from `rng`.
    ///
    /// The blinding value is sampled uniformly from the units of Z_n on every
    /// call, so two encryptions of the same plaintext differ with overwhelming
    /// probability.
    pub fn encrypt_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        plaintext: &BigUint,
    ) -> Result<Ciphertext, PaillierError> {
        if plaintext >= self.n() {
            return Err(PaillierError::MessageTooLarge);
        }

        let r = random_unit(rng, self.n())?;

        Ok(self.encrypt_with_blinding(plaintext, &r))
    }

    /// c = g^m · r^n mod n²
    pub(crate) fn encrypt_with_blinding(&self, plaintext: &BigUint, r: &BigUint) -> Ciphertext {
        let ring = self.ciphertext_ring();

        let gm = ring.pow(self.g(), plaintext);
        let rn = ring.pow(r, self.n());

        Ciphertext::new(ring.mul(&gm, &rn))
    }
}

impl PrivateKey {
    /// Decrypts `ciphertext` back to its plaintext in `[0, n)`.
    ///
    /// # Errors
    ///
    /// Returns `PaillierError::CiphertextTooLarge` if the ciphertext is not below `n²`,
    /// and `PaillierError::InvalidCiphertext` if it is not an encryption under this key.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint, PaillierError> {
        let public_key = self.public_key();
        if ciphertext.value() >= public_key.nsq() {
            return Err(PaillierError::CiphertextTooLarge);
        }

        // a = c^l mod n²
        let a = public_key.ciphertext_ring().pow(ciphertext.value(), self.l());

        // L(a) = (a - 1) / n, exact for valid ciphertexts
        let la = l_function(&a, public_key.n()).ok_or(PaillierError::InvalidCiphertext)?;

        Ok(Ring::of(public_key.n()).mul(&la, self.u()))
    }
}
