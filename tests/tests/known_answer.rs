//! Known-answer tests through the public engine surface

use accrypt_api::{BlockCipher, CipherParameters, Direction, IvParameter, KeyParameter, Mode, Padding};
use accrypt_engine::{BlockCipherEngine, CipherSpec};
use accrypt_tests::vectors::{
    Vector, CBC_NOPADDING_128, CBC_NOPADDING_256, CBC_PKCS5, CTR_128, ECB_128,
};
use accrypt_tests::{crypt_chunked, crypt_once, init_tracing, unhex};

fn engine_for(spec: &str, vector: &Vector, direction: Direction) -> BlockCipherEngine {
    let spec: CipherSpec = spec.parse().unwrap();
    let mut engine = BlockCipherEngine::from_spec(spec);
    let key = KeyParameter::new(&unhex(vector.key));
    let params = if vector.iv.is_empty() {
        CipherParameters::Key(key)
    } else {
        CipherParameters::with_iv(key, IvParameter::new(&unhex(vector.iv)))
    };
    engine.init(direction, params).unwrap();
    engine
}

fn check_both_directions(spec: &str, vector: &Vector) {
    let mut enc = engine_for(spec, vector, Direction::Encrypt);
    let ct = crypt_once(&mut enc, &unhex(vector.plaintext)).unwrap();
    assert_eq!(hex::encode(&ct), vector.ciphertext.to_lowercase(), "{} encrypt", spec);

    let mut dec = engine_for(spec, vector, Direction::Decrypt);
    let pt = crypt_once(&mut dec, &ct).unwrap();
    assert_eq!(hex::encode(&pt), vector.plaintext, "{} decrypt", spec);
}

#[test]
fn cbc_nopadding_aes128_chain() {
    init_tracing();
    for vector in &CBC_NOPADDING_128 {
        check_both_directions("AES/CBC/NoPadding", vector);
    }
}

#[test]
fn cbc_nopadding_aes256_chain() {
    for vector in &CBC_NOPADDING_256 {
        check_both_directions("AES/CBC/NoPadding", vector);
    }
}

#[test]
fn chained_blocks_with_one_engine() {
    // Feed each ciphertext back in as the next IV and reset
    let mut engine = engine_for("AES/CBC/NoPadding", &CBC_NOPADDING_128[0], Direction::Encrypt);
    for vector in &CBC_NOPADDING_128 {
        engine.set_iv(&unhex(vector.iv));
        engine.reset().unwrap();

        let mut out = [0u8; 16];
        let n = engine
            .process_block(&unhex(vector.plaintext), 0, 16, &mut out, 0)
            .unwrap();
        assert_eq!(n, 16);
        assert_eq!(hex::encode(out), vector.ciphertext);
    }
}

#[test]
fn cbc_four_blocks_as_one_message() {
    let plaintext: String = CBC_NOPADDING_128.iter().map(|v| v.plaintext).collect();
    let ciphertext: String = CBC_NOPADDING_128.iter().map(|v| v.ciphertext).collect();

    let mut engine = engine_for("AES/CBC/NoPadding", &CBC_NOPADDING_128[0], Direction::Encrypt);
    let out = crypt_chunked(&mut engine, &unhex(&plaintext), 7).unwrap();
    assert_eq!(hex::encode(out), ciphertext);
}

#[test]
fn cbc_pkcs5_vectors() {
    for vector in &CBC_PKCS5 {
        check_both_directions("AES/CBC/PKCS5Padding", vector);
    }
}

#[test]
fn cbc_pkcs5_vectors_streamed() {
    for vector in &CBC_PKCS5 {
        for chunk in [1, 5, 16, 17] {
            let mut enc = engine_for("AES/CBC/PKCS5Padding", vector, Direction::Encrypt);
            let ct = crypt_chunked(&mut enc, &unhex(vector.plaintext), chunk).unwrap();
            assert_eq!(hex::encode(&ct), vector.ciphertext);

            let mut dec = engine_for("AES/CBC/PKCS5Padding", vector, Direction::Decrypt);
            let pt = crypt_chunked(&mut dec, &ct, chunk).unwrap();
            assert_eq!(hex::encode(pt), vector.plaintext);
        }
    }
}

#[test]
fn full_block_plaintext_gains_a_padding_block() {
    let vector = &CBC_PKCS5[4];
    let mut engine = engine_for("AES/CBC/PKCS5Padding", vector, Direction::Encrypt);
    let ct = crypt_once(&mut engine, &unhex(vector.plaintext)).unwrap();
    assert_eq!(unhex(vector.plaintext).len(), 16);
    assert_eq!(ct.len(), 32);
}

#[test]
fn ecb_vector() {
    check_both_directions("AES/ECB/NoPadding", &ECB_128);
}

#[test]
fn ctr_vector() {
    check_both_directions("AES/CTR/NoPadding", &CTR_128);

    // Odd-sized chunks see the same keystream
    let mut engine = engine_for("CTR", &CTR_128, Direction::Encrypt);
    let ct = crypt_chunked(&mut engine, &unhex(CTR_128.plaintext), 3).unwrap();
    assert_eq!(hex::encode(ct), CTR_128.ciphertext);
}

#[test]
fn ctr_truncated_message_is_a_prefix() {
    let mut engine = engine_for("CTR", &CTR_128, Direction::Encrypt);
    let pt = unhex(CTR_128.plaintext);
    let ct = crypt_once(&mut engine, &pt[..21]).unwrap();
    assert_eq!(hex::encode(ct), &CTR_128.ciphertext[..42]);
}

#[test]
fn engine_reports_aes_parameters() {
    let engine = BlockCipherEngine::with_padding(Mode::Cbc, Padding::Pkcs5Padding).unwrap();
    assert_eq!(engine.algorithm_name(), "AES");
    assert_eq!(engine.block_size(), 16);
    assert_eq!(engine.head_length(), 0);
    assert_eq!(engine.mode().name(), "CBC");
    assert_eq!(engine.padding().name(), "PKCS5Padding");
}
