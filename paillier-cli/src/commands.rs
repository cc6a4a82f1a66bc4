use crate::cli::Command;

use anyhow::{Context, Result};
use paillier_crypto::codec::text::parse_decimal;
use paillier_crypto::codec::{
    ciphertext_to_string, json_to_private_key, private_key_to_json, public_key_to_string,
    string_to_ciphertext, string_to_public_key,
};
use paillier_crypto::keypair::{KeyGenParams, PrivateKey, PublicKey};
use paillier_crypto::record::MeterRecord;

use std::fs;
use std::path::Path;

fn read_trimmed(path: &Path) -> Result<String> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(contents.trim().to_string())
}

fn load_public_key(path: &Path) -> Result<PublicKey> {
    let encoded = read_trimmed(path)?;
    string_to_public_key(&encoded).with_context(|| format!("parsing {}", path.display()))
}

fn load_private_key(path: &Path) -> Result<PrivateKey> {
    let encoded = read_trimmed(path)?;
    json_to_private_key(&encoded).with_context(|| format!("parsing {}", path.display()))
}

/// Runs one command and returns what should be printed.
pub fn run(command: Command) -> Result<String> {
    match command {
        Command::Keygen { id, bits, out } => {
            let params = KeyGenParams::try_with(bits)?;
            log::info!("Generating a {}-bit key pair for {}", bits, id);

            let private_key = PrivateKey::try_with(&params)?;

            fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
            let pub_path = out.join(format!("{}.pub", id));
            let priv_path = out.join(format!("{}.priv", id));

            fs::write(&pub_path, public_key_to_string(private_key.public_key()))
                .with_context(|| format!("writing {}", pub_path.display()))?;
            fs::write(&priv_path, private_key_to_json(&private_key)?)
                .with_context(|| format!("writing {}", priv_path.display()))?;

            Ok(format!(
                "The keys were saved into {} and {}",
                pub_path.display(),
                priv_path.display()
            ))
        }

        Command::Encrypt { key, value } => {
            let public_key = load_public_key(&key)?;
            let plaintext = parse_decimal(&value, "VALUE")?;

            Ok(ciphertext_to_string(&public_key.encrypt(&plaintext)?))
        }

        Command::Decrypt { key, ciphertext } => {
            let private_key = load_private_key(&key)?;
            let ciphertext = string_to_ciphertext(&ciphertext)?;

            Ok(private_key.decrypt(&ciphertext)?.to_string())
        }

        Command::Add { key, c1, c2 } => {
            let public_key = load_public_key(&key)?;
            let c1 = string_to_ciphertext(&c1)?;
            let c2 = string_to_ciphertext(&c2)?;

            Ok(ciphertext_to_string(&public_key.add(&c1, &c2)))
        }

        Command::AddConst {
            key,
            ciphertext,
            constant,
        } => {
            let public_key = load_public_key(&key)?;
            let ciphertext = string_to_ciphertext(&ciphertext)?;
            let constant = parse_decimal(&constant, "CONSTANT")?;

            Ok(ciphertext_to_string(
                &public_key.add_constant(&ciphertext, &constant),
            ))
        }

        Command::MulConst {
            key,
            ciphertext,
            constant,
        } => {
            let public_key = load_public_key(&key)?;
            let ciphertext = string_to_ciphertext(&ciphertext)?;
            let constant = parse_decimal(&constant, "CONSTANT")?;

            Ok(ciphertext_to_string(
                &public_key.mul_constant(&ciphertext, &constant),
            ))
        }

        Command::Register { key } => {
            let public_key = key.as_deref().map(load_public_key).transpose()?;
            let record = MeterRecord::register(public_key.as_ref())?;

            Ok(record.to_json()?)
        }

        Command::Accumulate {
            record,
            measurement,
            plain,
        } => {
            let encoded = read_trimmed(&record)?;
            let mut meter = MeterRecord::from_json(&encoded)
                .with_context(|| format!("parsing {}", record.display()))?;

            if plain {
                let reading: i64 = measurement
                    .parse()
                    .with_context(|| format!("{:?} is not a proper int64 input", measurement))?;
                meter.accumulate_plain(reading)?;
            } else {
                meter.accumulate(&string_to_ciphertext(&measurement)?)?;
            }

            Ok(meter.to_json()?)
        }
    }
}
