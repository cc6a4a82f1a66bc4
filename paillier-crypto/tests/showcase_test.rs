use paillier_crypto::errors::PaillierError;
use paillier_crypto::keypair::{KeyGenParams, PrivateKey};
use paillier_crypto::record::MeterRecord;

use num_bigint::BigUint;
use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    });
}

#[test]
fn showcase_meter_accumulates_encrypted_readings() -> Result<(), PaillierError> {
    init_logging();

    let private_key = PrivateKey::try_with(&KeyGenParams::try_with(512)?)?;
    let public_key = private_key.get_public_key();

    // registration only ever sees the public key
    let mut record = MeterRecord::register(Some(&public_key))?;
    let mut stored = record.to_json()?;

    let readings = [120u32, 75, 310, 5];
    for reading in readings {
        let c = public_key.encrypt(&BigUint::from(reading))?;

        record = MeterRecord::from_json(&stored)?;
        record.accumulate(&c)?;
        record.accumulate_plain(i64::from(reading))?;
        stored = record.to_json()?;
    }

    let record = MeterRecord::from_json(&stored)?;
    let total = private_key.decrypt(&record.encrypted_measure()?)?;

    dbg!(&total);
    assert_eq!(total, BigUint::from(510u32));
    assert_eq!(record.plain_measure, 510);

    Ok(())
}
