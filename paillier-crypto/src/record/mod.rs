//! # Meter Record
//!
//! The fixed-shape record kept per meter by the storage layer. The crate only
//! builds and updates the record value; persisting it is up to the caller.
//!
//! ```json
//! {"publickey": "<bitLength>,<N>,<G>,<Nsq>", "plainmeasure": 0, "encrypmeasure": "<ciphertext>"}
//! ```

use crate::cipher::Ciphertext;
use crate::errors::PaillierError;
use crate::keypair::PublicKey;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::TryCryptoRng;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterRecord {
    /// Public key text, empty for meters that only report in plaintext.
    #[serde(rename = "publickey")]
    pub public_key: String,
    /// Running plaintext total.
    #[serde(rename = "plainmeasure")]
    pub plain_measure: i64,
    /// Running encrypted total, empty when there is no public key.
    #[serde(rename = "encrypmeasure")]
    pub encrypted_measure: String,
}

impl MeterRecord {
    /// Creates the record of a newly registered meter, with both totals at zero.
    pub fn register(public_key: Option<&PublicKey>) -> Result<Self, PaillierError> {
        Self::register_with_rng(&mut OsRng, public_key)
    }

    pub fn register_with_rng<R: TryCryptoRng + ?Sized>(
        rng: &mut R,
        public_key: Option<&PublicKey>,
    ) -> Result<Self, PaillierError> {
        let (public_key, encrypted_measure) = match public_key {
            Some(key) => {
                let zero = key.encrypt_with_rng(rng, &BigUint::zero())?;
                (key.to_string(), zero.to_string())
            }
            None => (String::new(), String::new()),
        };

        log::debug!(
            "Registered meter record (encrypted: {})",
            !public_key.is_empty()
        );

        Ok(Self {
            public_key,
            plain_measure: 0,
            encrypted_measure,
        })
    }

    /// Parses the stored public key; `None` for plaintext-only meters.
    pub fn public_key(&self) -> Result<Option<PublicKey>, PaillierError> {
        if self.public_key.is_empty() {
            return Ok(None);
        }

        self.public_key.parse().map(Some)
    }

    /// Parses the stored encrypted total.
    pub fn encrypted_measure(&self) -> Result<Ciphertext, PaillierError> {
        self.encrypted_measure.parse()
    }

    /// Adds an encrypted measurement to the encrypted total.
    pub fn accumulate(&mut self, measurement: &Ciphertext) -> Result<(), PaillierError> {
        let public_key = self.public_key()?.ok_or(PaillierError::MissingPublicKey)?;
        let total = self.encrypted_measure()?;

        self.encrypted_measure = public_key.add(&total, measurement).to_string();

        log::trace!("Accumulated encrypted measurement");
        Ok(())
    }

    /// Adds a plaintext measurement to the plaintext total.
    pub fn accumulate_plain(&mut self, measurement: i64) -> Result<(), PaillierError> {
        self.plain_measure = self
            .plain_measure
            .checked_add(measurement)
            .ok_or(PaillierError::MeasureOverflow)?;

        log::trace!("Accumulated plaintext measurement {}", measurement);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, PaillierError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(encoded: &str) -> Result<Self, PaillierError> {
        Ok(serde_json::from_str(encoded)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::keypair::PrivateKey;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    // n = 143
    fn toy_key() -> PrivateKey {
        PrivateKey::from_primes(8, &big(11), &big(13)).unwrap()
    }

    #[test]
    fn test_register_with_key_starts_at_encrypted_zero() -> Result<(), PaillierError> {
        let private_key = toy_key();
        let mut rng = StdRng::seed_from_u64(3);
        let record = MeterRecord::register_with_rng(&mut rng, Some(private_key.public_key()))?;

        assert_eq!(record.public_key, "8,143,144,20449");
        assert_eq!(record.plain_measure, 0);
        assert_eq!(private_key.decrypt(&record.encrypted_measure()?)?, big(0));
        Ok(())
    }

    #[test]
    fn test_register_without_key() -> Result<(), PaillierError> {
        let record = MeterRecord::register(None)?;
        assert!(record.public_key()?.is_none());
        assert!(record.encrypted_measure.is_empty());
        Ok(())
    }

    #[test]
    fn test_accumulate_encrypted() -> Result<(), PaillierError> {
        let private_key = toy_key();
        let public_key = private_key.public_key();
        let mut rng = StdRng::seed_from_u64(3);
        let mut record = MeterRecord::register_with_rng(&mut rng, Some(public_key))?;

        for measurement in [12u64, 30, 7] {
            let c = public_key.encrypt_with_rng(&mut rng, &big(measurement))?;
            record.accumulate(&c)?;
        }

        assert_eq!(private_key.decrypt(&record.encrypted_measure()?)?, big(49));
        Ok(())
    }

    #[test]
    fn test_accumulate_without_key_fails() -> Result<(), PaillierError> {
        let mut record = MeterRecord::register(None)?;
        let result = record.accumulate(&Ciphertext::new(big(1)));
        assert!(matches!(result, Err(PaillierError::MissingPublicKey)));
        Ok(())
    }

    #[test]
    fn test_accumulate_plain() -> Result<(), PaillierError> {
        let mut record = MeterRecord::register(None)?;
        record.accumulate_plain(40)?;
        record.accumulate_plain(2)?;
        assert_eq!(record.plain_measure, 42);

        record.plain_measure = i64::MAX;
        assert!(matches!(
            record.accumulate_plain(1),
            Err(PaillierError::MeasureOverflow)
        ));
        assert_eq!(record.plain_measure, i64::MAX);
        Ok(())
    }

    #[test]
    fn test_json_field_names() -> Result<(), PaillierError> {
        let record = MeterRecord {
            public_key: "8,143,144,20449".to_string(),
            plain_measure: 5,
            encrypted_measure: "1".to_string(),
        };

        let json = record.to_json()?;
        assert_eq!(
            json,
            r#"{"publickey":"8,143,144,20449","plainmeasure":5,"encrypmeasure":"1"}"#
        );
        assert_eq!(MeterRecord::from_json(&json)?, record);
        Ok(())
    }
}
