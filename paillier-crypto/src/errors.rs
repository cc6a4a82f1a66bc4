#[derive(thiserror::Error, Debug)]
pub enum PaillierError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    /// The requested modulus size is odd or below the supported minimum.
    #[error("InvalidBitLength: {0}")]
    InvalidBitLength(String),
    /// The random source failed while sampling primes or blinding values.
    #[error("RandomSource: {0}")]
    RandomSource(String),
    /// The sampled primes do not produce a usable key (p == q or gcd(l, n) != 1).
    #[error("KeyGeneration: {0}")]
    KeyGeneration(String),

    #[error("Plaintext must be smaller than the public modulus n")]
    MessageTooLarge,
    #[error("Ciphertext must be smaller than n^2")]
    CiphertextTooLarge,
    #[error("Ciphertext is not a valid encryption under this key")]
    InvalidCiphertext,

    #[error("Parse: {0}")]
    Parse(String),

    #[error("Plaintext measure overflowed i64")]
    MeasureOverflow,
    #[error("Record has no public key registered")]
    MissingPublicKey,

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
