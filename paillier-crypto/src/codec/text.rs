//! Fixed textual encodings of keys and ciphertexts.
//!
//! Public key: `"<bit_length>,<n>,<g>,<nsq>"`. Ciphertext: its base-10 digits.

use crate::cipher::Ciphertext;
use crate::errors::PaillierError;
use crate::keypair::PublicKey;

use itertools::Itertools;
use num_bigint::BigUint;

use std::fmt;
use std::str::FromStr;

/// Separator between the fields of an encoded public key.
pub const FIELD_DELIMITER: char = ',';

/// Number of fields of an encoded public key.
pub const PUBLIC_KEY_FIELDS: usize = 4;

fn ensure_digits(field: &str, name: &str) -> Result<(), PaillierError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PaillierError::Parse(format!(
            "{} is not a base-10 integer: {:?}",
            name, field
        )));
    }

    Ok(())
}

/// Parses an unsigned base-10 integer. Signs, whitespace and separators are rejected.
pub fn parse_decimal(field: &str, name: &str) -> Result<BigUint, PaillierError> {
    ensure_digits(field, name)?;

    BigUint::parse_bytes(field.as_bytes(), 10)
        .ok_or_else(|| PaillierError::Parse(format!("{} is not a base-10 integer", name)))
}

fn parse_bit_length(field: &str) -> Result<usize, PaillierError> {
    ensure_digits(field, "bitLength")?;

    field
        .parse::<usize>()
        .map_err(|e| PaillierError::Parse(format!("bitLength out of range: {}", e)))
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.bit_length(),
            self.n(),
            self.g(),
            self.nsq(),
            d = FIELD_DELIMITER
        )
    }
}

impl FromStr for PublicKey {
    type Err = PaillierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((bit_length, n, g, nsq)) = s.split(FIELD_DELIMITER).collect_tuple() else {
            return Err(PaillierError::Parse(format!(
                "Public key must have exactly {} fields, got {}",
                PUBLIC_KEY_FIELDS,
                s.split(FIELD_DELIMITER).count()
            )));
        };

        PublicKey::from_parts(
            parse_bit_length(bit_length)?,
            parse_decimal(n, "N")?,
            parse_decimal(g, "G")?,
            parse_decimal(nsq, "Nsq")?,
        )
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Ciphertext {
    type Err = PaillierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s, "Ciphertext").map(Ciphertext::new)
    }
}

/// Encodes a public key as `"<bit_length>,<n>,<g>,<nsq>"`.
pub fn public_key_to_string(public_key: &PublicKey) -> String {
    public_key.to_string()
}

/// Decodes a public key produced by [`public_key_to_string`].
pub fn string_to_public_key(encoded: &str) -> Result<PublicKey, PaillierError> {
    encoded.parse()
}

/// Encodes a ciphertext as base-10 digits.
pub fn ciphertext_to_string(ciphertext: &Ciphertext) -> String {
    ciphertext.to_string()
}

/// Decodes a ciphertext produced by [`ciphertext_to_string`].
pub fn string_to_ciphertext(encoded: &str) -> Result<Ciphertext, PaillierError> {
    encoded.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::keypair::PrivateKey;

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    fn toy_public_key() -> PublicKey {
        PrivateKey::from_primes(6, &big(5), &big(7))
            .unwrap()
            .get_public_key()
    }

    #[test]
    fn test_public_key_text_form() {
        assert_eq!(public_key_to_string(&toy_public_key()), "6,35,36,1225");
    }

    #[test]
    fn test_public_key_round_trip() -> Result<(), PaillierError> {
        let public_key = toy_public_key();
        let decoded = string_to_public_key(&public_key_to_string(&public_key))?;
        assert_eq!(decoded, public_key);
        Ok(())
    }

    #[test]
    fn test_public_key_field_count() {
        for encoded in ["6,35,36", "6,35,36,1225,1", "", "6"] {
            assert!(
                matches!(string_to_public_key(encoded), Err(PaillierError::Parse(_))),
                "{:?} should not parse",
                encoded
            );
        }
    }

    #[test]
    fn test_public_key_rejects_malformed_numbers() {
        for encoded in [
            "6,35,36,12x5",
            "six,35,36,1225",
            "6,-35,36,1225",
            "6,+35,36,1225",
            "6, 35,36,1225",
            "6,,36,1225",
            "6,3_5,36,1225",
        ] {
            assert!(
                matches!(string_to_public_key(encoded), Err(PaillierError::Parse(_))),
                "{:?} should not parse",
                encoded
            );
        }
    }

    #[test]
    fn test_public_key_rejects_inconsistent_fields() {
        // G != N + 1
        assert!(string_to_public_key("6,35,37,1225").is_err());
        // Nsq != N^2
        assert!(string_to_public_key("6,35,36,1224").is_err());
        // N too small
        assert!(string_to_public_key("6,1,2,1").is_err());
    }

    #[test]
    fn test_ciphertext_round_trip() -> Result<(), PaillierError> {
        let ciphertext = Ciphertext::new(big(683));
        assert_eq!(ciphertext_to_string(&ciphertext), "683");
        assert_eq!(string_to_ciphertext("683")?, ciphertext);
        assert_eq!(string_to_ciphertext("0")?, Ciphertext::new(big(0)));
        Ok(())
    }

    #[test]
    fn test_ciphertext_rejects_malformed() {
        for encoded in ["", "-1", "+1", "12a", " 12", "1,2", "0x1f"] {
            assert!(
                matches!(string_to_ciphertext(encoded), Err(PaillierError::Parse(_))),
                "{:?} should not parse",
                encoded
            );
        }
    }
}
