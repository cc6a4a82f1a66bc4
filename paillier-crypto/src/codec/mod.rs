//! Encodings used wherever keys or ciphertexts leave the crate as text.

pub mod json;
pub mod text;

pub use json::{json_to_private_key, private_key_to_json};
pub use text::{
    FIELD_DELIMITER, PUBLIC_KEY_FIELDS, ciphertext_to_string, public_key_to_string,
    string_to_ciphertext, string_to_public_key,
};
