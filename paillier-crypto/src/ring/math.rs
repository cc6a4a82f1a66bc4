//! Implementation of ring ops using modular arithmetic over big integers.

use crate::errors::PaillierError;

use super::ONE;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Represents the finite ring Z_k for a borrowed modulus k.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring<'a> {
    modulus: &'a BigUint,
}

impl<'a> Ring<'a> {
    /// Create a new Ring over the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: &'a BigUint) -> Result<Self, PaillierError> {
        if modulus <= &*ONE {
            return Err(PaillierError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Builds a ring without checking the modulus. Only used for moduli taken
    /// from keys, which are validated on construction.
    pub(crate) fn of(modulus: &'a BigUint) -> Self {
        Ring { modulus }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use num_bigint::BigUint;
    /// # use paillier_crypto::ring::Ring;
    /// let k = BigUint::from(13u32);
    /// let ring = Ring::try_with(&k).unwrap();
    /// assert_eq!(ring.modulus(), &k);
    /// ```
    pub fn modulus(&self) -> &BigUint {
        self.modulus
    }

    /// Reduces a value into `[0, modulus - 1]`.
    pub fn normalize(&self, value: &BigUint) -> BigUint {
        value % self.modulus
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use num_bigint::BigUint;
    /// # use paillier_crypto::ring::Ring;
    /// let k = BigUint::from(10u32);
    /// let ring = Ring::try_with(&k).unwrap();
    /// assert_eq!(ring.mul(&BigUint::from(7u32), &BigUint::from(5u32)), BigUint::from(5u32));
    /// ```
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.modulus
    }

    /// Computes `base^exponent mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use num_bigint::BigUint;
    /// # use paillier_crypto::ring::Ring;
    /// let k = BigUint::from(11u32);
    /// let ring = Ring::try_with(&k).unwrap();
    /// assert_eq!(ring.pow(&BigUint::from(2u32), &BigUint::from(10u32)), BigUint::from(1u32));
    /// ```
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, self.modulus)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `PaillierError::NoInverse` if `gcd(a, modulus) != 1` or `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use num_bigint::BigUint;
    /// # use paillier_crypto::ring::Ring;
    /// let k = BigUint::from(10u32);
    /// let ring = Ring::try_with(&k).unwrap();
    /// assert_eq!(ring.inv(&BigUint::from(3u32)).unwrap(), BigUint::from(7u32));
    /// assert!(ring.inv(&BigUint::from(2u32)).is_err());
    /// ```
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, PaillierError> {
        let a_norm = self.normalize(a);
        let g = a_norm.gcd(self.modulus);
        if a_norm.is_zero() || g != *ONE {
            return Err(PaillierError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        a_norm.modinv(self.modulus).ok_or_else(|| {
            PaillierError::NoInverse(format!("Modular inverse does not exist mod {}", self.modulus))
        })
    }
}

/// L(x) = (x - 1) / n
///
/// Returns `None` when `x - 1` is not an exact multiple of `n`, which only
/// happens for values outside the image of `c^l mod n²`.
pub fn l_function(x: &BigUint, n: &BigUint) -> Option<BigUint> {
    if x.is_zero() {
        return None;
    }

    let (quotient, remainder) = (x - &*ONE).div_rem(n);
    remainder.is_zero().then_some(quotient)
}
