use crate::errors::PaillierError;
use crate::keypair::params::KeyGenParams;
use crate::ring::{ONE, Ring, random_prime};

use num_bigint::BigUint;
use rand::TryCryptoRng;
use rand::rngs::OsRng;

use std::fmt;

/// Public half of a Paillier key pair.
///
/// `n = p·q`, `g = n + 1` and `nsq = n²`. Everything that encrypts or combines
/// ciphertexts needs only this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    bit_length: usize,
    n: BigUint,
    g: BigUint,
    nsq: BigUint,
}

impl PublicKey {
    /// Builds the public key for modulus `n`, deriving `g` and `nsq`.
    pub fn try_with(bit_length: usize, n: BigUint) -> Result<Self, PaillierError> {
        Ring::try_with(&n)?;

        let g = &n + &*ONE;
        let nsq = &n * &n;

        Ok(Self {
            bit_length,
            n,
            g,
            nsq,
        })
    }

    /// Rebuilds a public key from all four stored fields, checking that they
    /// agree with each other.
    pub(crate) fn from_parts(
        bit_length: usize,
        n: BigUint,
        g: BigUint,
        nsq: BigUint,
    ) -> Result<Self, PaillierError> {
        let key = Self::try_with(bit_length, n)
            .map_err(|e| PaillierError::Parse(format!("Invalid public key: {}", e)))?;

        if key.g != g {
            return Err(PaillierError::Parse(
                "Invalid public key: G must equal N + 1".to_string(),
            ));
        }
        if key.nsq != nsq {
            return Err(PaillierError::Parse(
                "Invalid public key: Nsq must equal N^2".to_string(),
            ));
        }

        Ok(key)
    }

    /// Bit length the key was generated for.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Public modulus `n`; plaintexts live in `[0, n)`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Generator `g = n + 1`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// `n²`; ciphertexts live in `[0, n²)`.
    pub fn nsq(&self) -> &BigUint {
        &self.nsq
    }

    pub(crate) fn ciphertext_ring(&self) -> Ring<'_> {
        Ring::of(&self.nsq)
    }
}

/// Private half of a Paillier key pair.
///
/// `l = (p-1)(q-1)` and `u = l⁻¹ mod n`. The factors themselves are not kept.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    public_key: PublicKey,
    l: BigUint,
    u: BigUint,
}

impl PrivateKey {
    /// Generates a fresh key pair from operating system entropy.
    pub fn try_with(params: &KeyGenParams) -> Result<Self, PaillierError> {
        Self::try_with_rng(&mut OsRng, params)
    }

    /// Generates a fresh key pair, drawing both primes from `rng`.
    pub fn try_with_rng<R: TryCryptoRng + ?Sized>(
        rng: &mut R,
        params: &KeyGenParams,
    ) -> Result<Self, PaillierError> {
        params.validate()?;

        log::debug!("Generating {}-bit Paillier key pair", params.bit_length);

        let p = random_prime(rng, params.prime_bits())?;
        let q = random_prime(rng, params.prime_bits())?;

        let private_key = Self::from_primes(params.bit_length, &p, &q)?;

        log::debug!(
            "Generated key pair with a {}-bit modulus",
            private_key.public_key.n.bits()
        );

        Ok(private_key)
    }

    /// Derives the key pair for the primes `p` and `q`.
    ///
    /// `p·q` must have exactly `bit_length` bits. The caller is responsible
    /// for `p` and `q` being prime.
    pub fn from_primes(
        bit_length: usize,
        p: &BigUint,
        q: &BigUint,
    ) -> Result<Self, PaillierError> {
        if p == q {
            // n = p² leaves no valid u
            return Err(PaillierError::KeyGeneration(
                "Primes must be distinct".to_string(),
            ));
        }
        if p <= &*ONE || q <= &*ONE {
            return Err(PaillierError::KeyGeneration(
                "Primes must be greater than 1".to_string(),
            ));
        }

        let n = p * q;
        if n.bits() != bit_length as u64 {
            return Err(PaillierError::KeyGeneration(format!(
                "Modulus has {} bits, expected {}",
                n.bits(),
                bit_length
            )));
        }

        let public_key = PublicKey::try_with(bit_length, n)?;

        let l = (p - &*ONE) * (q - &*ONE);
        let u = Ring::of(public_key.n())
            .inv(&l)
            .map_err(|e| PaillierError::KeyGeneration(e.to_string()))?;

        Ok(Self { public_key, l, u })
    }

    /// Rebuilds a private key from stored fields, checking `l·u ≡ 1 (mod n)`.
    pub(crate) fn from_parts(
        public_key: PublicKey,
        l: BigUint,
        u: BigUint,
    ) -> Result<Self, PaillierError> {
        if Ring::of(public_key.n()).mul(&l, &u) != *ONE {
            return Err(PaillierError::Parse(
                "Invalid private key: U is not the inverse of L mod N".to_string(),
            ));
        }

        Ok(Self { public_key, l, u })
    }

    /// Returns an owned copy of the public key.
    pub fn get_public_key(&self) -> PublicKey {
        self.public_key.clone()
    }

    /// Borrows the embedded public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub(crate) fn l(&self) -> &BigUint {
        &self.l
    }

    pub(crate) fn u(&self) -> &BigUint {
        &self.u
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// Generates a key pair of `bit_length` bits from `rng`.
///
/// `bit_length` must be even and at least [`MIN_BIT_LENGTH`](crate::keypair::params::MIN_BIT_LENGTH).
pub fn generate_key_pair<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    bit_length: usize,
) -> Result<(PublicKey, PrivateKey), PaillierError> {
    let params = KeyGenParams::try_with(bit_length)?;
    let private_key = PrivateKey::try_with_rng(rng, &params)?;

    Ok((private_key.get_public_key(), private_key))
}
