use crate::errors::PaillierError;

use serde::{Deserialize, Serialize};

/// Smallest accepted modulus size, in bits.
pub const MIN_BIT_LENGTH: usize = 512;

/// Modulus size used when nothing else is configured.
pub const DEFAULT_BIT_LENGTH: usize = 2048;

/// The modulus sizes offered to callers out of the box.
pub const PRESET_BIT_LENGTHS: [usize; 4] = [512, 1024, 2048, 4096];

/// Parameters for key generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenParams {
    /// Bit length of the public modulus n. Each prime factor gets half of it.
    pub bit_length: usize,
}

impl KeyGenParams {
    /// Creates validated key generation parameters.
    ///
    /// The bit length must be even and at least [`MIN_BIT_LENGTH`].
    pub fn try_with(bit_length: usize) -> Result<Self, PaillierError> {
        if bit_length < MIN_BIT_LENGTH {
            return Err(PaillierError::InvalidBitLength(format!(
                "Bit length must be at least {}, got {}",
                MIN_BIT_LENGTH, bit_length
            )));
        }

        if bit_length % 2 != 0 {
            return Err(PaillierError::InvalidBitLength(format!(
                "Bit length must be even, got {}",
                bit_length
            )));
        }

        Ok(Self { bit_length })
    }

    /// Bit length of each of the two prime factors.
    pub fn prime_bits(&self) -> usize {
        self.bit_length / 2
    }

    /// Re-checks parameters that may have been deserialized without validation.
    pub fn validate(&self) -> Result<(), PaillierError> {
        Self::try_with(self.bit_length).map(|_| ())
    }
}

impl Default for KeyGenParams {
    fn default() -> Self {
        Self {
            bit_length: DEFAULT_BIT_LENGTH,
        }
    }
}
