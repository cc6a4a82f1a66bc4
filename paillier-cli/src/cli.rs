use clap::{Parser, Subcommand};
use paillier_crypto::keypair::DEFAULT_BIT_LENGTH;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "paillier",
    about = "Paillier keys, encryption and homomorphic operations on meter readings",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct PaillierCli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a key pair into <OUT>/<ID>.pub and <OUT>/<ID>.priv
    ///
    /// Examples:
    ///   paillier keygen meter-01 --bits 1024
    Keygen {
        /// Identifier used as the key file name
        #[arg(value_name = "ID")]
        id: String,
        /// Modulus size in bits (even, at least 512)
        #[arg(long, default_value_t = DEFAULT_BIT_LENGTH)]
        bits: usize,
        /// Directory that receives the key files
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },

    /// Encrypt a non-negative integer
    Encrypt {
        /// Public key file
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Decrypt a ciphertext
    Decrypt {
        /// Private key file
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        #[arg(value_name = "CIPHERTEXT")]
        ciphertext: String,
    },

    /// Add two ciphertexts
    Add {
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        c1: String,
        c2: String,
    },

    /// Add a plaintext constant to a ciphertext
    AddConst {
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        ciphertext: String,
        constant: String,
    },

    /// Multiply a ciphertext by a plaintext constant
    MulConst {
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        ciphertext: String,
        constant: String,
    },

    /// Print the JSON record of a newly registered meter
    Register {
        /// Public key file; omit for a plaintext-only meter
        #[arg(long, value_name = "FILE")]
        key: Option<PathBuf>,
    },

    /// Add a measurement to a meter record and print the updated record
    Accumulate {
        /// Meter record JSON file
        #[arg(long, value_name = "FILE")]
        record: PathBuf,
        /// Encrypted measurement, or a plain integer with --plain
        #[arg(allow_hyphen_values = true)]
        measurement: String,
        /// Treat the measurement as a plaintext reading
        #[arg(long)]
        plain: bool,
    },
}
