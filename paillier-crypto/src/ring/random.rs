//! Sampling of big integers from a cryptographic random source.

use crate::errors::PaillierError;

use super::{ONE, Ring};

use num_bigint::BigUint;
use num_integer::Integer;
use num_prime::PrimalityTestConfig;
use num_prime::nt_funcs::is_prime;
use num_traits::Zero;
use rand::TryCryptoRng;

/// Draws a uniformly random integer in `[0, 2^bits)`.
pub fn random_bits<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> Result<BigUint, PaillierError> {
    if bits == 0 {
        return Ok(BigUint::zero());
    }

    let byte_len = bits.div_ceil(8);
    let mut buffer = vec![0u8; byte_len];
    rng.try_fill_bytes(&mut buffer)
        .map_err(|e| PaillierError::RandomSource(e.to_string()))?;

    // drop the surplus low bits of the last byte
    Ok(BigUint::from_bytes_be(&buffer) >> (byte_len * 8 - bits))
}

/// Draws a uniformly random integer in `[0, bound)` by rejection sampling.
pub fn random_below<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    bound: &BigUint,
) -> Result<BigUint, PaillierError> {
    if bound.is_zero() {
        return Err(PaillierError::InvalidModulus(
            "Sampling bound must be positive".to_string(),
        ));
    }

    let bits = bound.bits() as usize;
    loop {
        let candidate = random_bits(rng, bits)?;
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

/// Draws a uniformly random unit of Z_n, i.e. `r ∈ [1, n)` with `gcd(r, n) = 1`.
pub fn random_unit<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    n: &BigUint,
) -> Result<BigUint, PaillierError> {
    Ring::try_with(n)?;

    loop {
        let candidate = random_below(rng, n)?;
        if !candidate.is_zero() && candidate.gcd(n) == *ONE {
            return Ok(candidate);
        }
    }
}

/// Draws a random prime of exactly `bits` bits.
///
/// The two most significant bits are forced to 1, so the product of two such
/// primes has exactly `2 * bits` bits.
pub fn random_prime<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> Result<BigUint, PaillierError> {
    if bits < 2 {
        return Err(PaillierError::InvalidBitLength(format!(
            "Prime size must be at least 2 bits, got {}",
            bits
        )));
    }

    let high_bits = (&*ONE << (bits - 1)) | (&*ONE << (bits - 2));
    loop {
        let candidate = random_bits(rng, bits)? | &high_bits | &*ONE;
        if is_prime(&candidate, Some(PrimalityTestConfig::strict())).probably() {
            return Ok(candidate);
        }
    }
}
