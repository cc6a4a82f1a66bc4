//! `serde` support.
//!
//! Public keys and ciphertexts serialize as their text forms, so they embed
//! unchanged into JSON records. Private keys serialize as an object holding the
//! public key text plus `l` and `u` as decimal strings.

use crate::cipher::Ciphertext;
use crate::codec::text::parse_decimal;
use crate::errors::PaillierError;
use crate::keypair::{PrivateKey, PublicKey};

use num_bigint::BigUint;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        encoded.parse().map_err(de::Error::custom)
    }
}

impl Serialize for Ciphertext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ciphertext {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        encoded.parse().map_err(de::Error::custom)
    }
}

fn deserialize_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    parse_decimal(&encoded, "field").map_err(de::Error::custom)
}

impl Serialize for PrivateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PrivateKey", 3)?;
        state.serialize_field("public_key", self.public_key())?;
        state.serialize_field("l", &self.l().to_string())?;
        state.serialize_field("u", &self.u().to_string())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for PrivateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Fields {
            public_key: PublicKey,
            #[serde(deserialize_with = "deserialize_decimal")]
            l: BigUint,
            #[serde(deserialize_with = "deserialize_decimal")]
            u: BigUint,
        }

        let fields = Fields::deserialize(deserializer)?;
        PrivateKey::from_parts(fields.public_key, fields.l, fields.u).map_err(de::Error::custom)
    }
}

/// Serializes a private key to JSON.
pub fn private_key_to_json(private_key: &PrivateKey) -> Result<String, PaillierError> {
    Ok(serde_json::to_string_pretty(private_key)?)
}

/// Loads a private key written by [`private_key_to_json`].
pub fn json_to_private_key(encoded: &str) -> Result<PrivateKey, PaillierError> {
    Ok(serde_json::from_str(encoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    fn toy_key() -> PrivateKey {
        PrivateKey::from_primes(6, &big(5), &big(7)).unwrap()
    }

    #[test]
    fn test_public_key_serializes_as_text() -> Result<(), PaillierError> {
        let public_key = toy_key().get_public_key();
        let json = serde_json::to_string(&public_key)?;
        assert_eq!(json, r#""6,35,36,1225""#);

        let decoded: PublicKey = serde_json::from_str(&json)?;
        assert_eq!(decoded, public_key);
        Ok(())
    }

    #[test]
    fn test_ciphertext_serializes_as_text() -> Result<(), PaillierError> {
        let json = serde_json::to_string(&Ciphertext::new(big(683)))?;
        assert_eq!(json, r#""683""#);

        assert!(serde_json::from_str::<Ciphertext>(r#""-683""#).is_err());
        assert!(serde_json::from_str::<Ciphertext>("683").is_err());
        Ok(())
    }

    #[test]
    fn test_private_key_round_trip() -> Result<(), PaillierError> {
        let private_key = toy_key();
        let json = private_key_to_json(&private_key)?;
        let decoded = json_to_private_key(&json)?;
        assert_eq!(decoded, private_key);
        Ok(())
    }

    #[test]
    fn test_private_key_rejects_mismatched_inverse() {
        let json = r#"{"public_key":"6,35,36,1225","l":"24","u":"18"}"#;
        assert!(matches!(
            json_to_private_key(json),
            Err(PaillierError::SerializationError(_))
        ));
    }

    #[test]
    fn test_private_key_rejects_bad_public_key() {
        let json = r#"{"public_key":"6,35,36","l":"24","u":"19"}"#;
        assert!(json_to_private_key(json).is_err());

        let json = r#"{"public_key":"6,35,36,1225","l":"2x4","u":"19"}"#;
        assert!(json_to_private_key(json).is_err());
    }
}
