//! Lifecycle of the native context behind an engine

use accrypt_api::{BlockCipher, CipherParameters, Direction, Error, IvParameter, KeyParameter, Mode, Padding};
use accrypt_engine::{BlockCipherEngine, CipherSpec, EngineState};
use accrypt_tests::counting::{CountingBackend, Counters};
use accrypt_tests::vectors::CBC_PKCS5;
use accrypt_tests::{crypt_chunked, crypt_once, init_tracing, random_bytes, seeded_rng, unhex};

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const IV: &str = "000102030405060708090a0b0c0d0e0f";

fn params() -> CipherParameters {
    CipherParameters::with_iv(KeyParameter::new(&unhex(KEY)), IvParameter::new(&unhex(IV)))
}

fn counted(mode: Mode, padding: Padding) -> (BlockCipherEngine<CountingBackend>, Counters) {
    let (backend, counters) = CountingBackend::new();
    let spec = CipherSpec::new(mode, padding).unwrap();
    (BlockCipherEngine::with_backend(spec, backend), counters)
}

#[test]
fn init_allocates_once_and_reset_reconfigures() {
    init_tracing();
    let (mut engine, counters) = counted(Mode::Cbc, Padding::Pkcs5Padding);

    engine.init(Direction::Encrypt, params()).unwrap();
    assert_eq!(counters.allocations(), 1);
    assert_eq!(counters.reconfigurations(), 0);

    engine.reset().unwrap();
    engine.init(Direction::Decrypt, params()).unwrap();
    assert_eq!(counters.allocations(), 1);
    assert_eq!(counters.reconfigurations(), 2);
    assert_eq!(counters.live(), 1);
}

#[test]
fn drop_releases_the_context() {
    let (mut engine, counters) = counted(Mode::Cbc, Padding::NoPadding);
    engine.init(Direction::Encrypt, params()).unwrap();
    assert_eq!(counters.live(), 1);

    drop(engine);
    assert_eq!(counters.releases(), 1);
    assert_eq!(counters.live(), 0);
}

#[test]
fn explicit_release_is_not_repeated_on_drop() {
    let (mut engine, counters) = counted(Mode::Cbc, Padding::NoPadding);
    engine.init(Direction::Encrypt, params()).unwrap();
    engine.release().unwrap();
    assert_eq!(engine.state(), EngineState::Uninitialized);

    drop(engine);
    assert_eq!(counters.releases(), 1);
}

#[test]
fn dropping_an_uninitialised_engine_touches_nothing() {
    let (engine, counters) = counted(Mode::Ecb, Padding::NoPadding);
    drop(engine);
    assert_eq!(counters.allocations(), 0);
    assert_eq!(counters.releases(), 0);
}

#[test]
fn release_after_error_paths() {
    let (mut engine, counters) = counted(Mode::Cbc, Padding::Pkcs5Padding);
    engine.init(Direction::Decrypt, params()).unwrap();

    // A failing finalisation must not leak the context
    let mut out = [0u8; 32];
    engine.process_block(&[0u8; 16], 0, 16, &mut out, 0).unwrap();
    assert!(matches!(engine.do_final(&mut out, 0), Err(Error::Integrity { .. })));

    drop(engine);
    assert_eq!(counters.live(), 0);
}

#[test]
fn non_key_parameter_never_reaches_the_backend() {
    let (mut engine, counters) = counted(Mode::Cbc, Padding::NoPadding);
    let err = engine
        .init(Direction::Encrypt, CipherParameters::Iv(IvParameter::new(&unhex(IV))))
        .unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(counters.allocations(), 0);
    assert_eq!(engine.state(), EngineState::Uninitialized);

    engine.init(Direction::Encrypt, params()).unwrap();
    let err = engine
        .init(Direction::Decrypt, CipherParameters::Iv(IvParameter::new(&unhex(IV))))
        .unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(counters.reconfigurations(), 0);
    assert_eq!(engine.direction(), Some(Direction::Encrypt));
}

#[test]
fn reset_matches_a_fresh_engine() {
    let mut rng = seeded_rng(7);
    let first = random_bytes(&mut rng, 45);
    let second = random_bytes(&mut rng, 70);

    let (mut used, _) = counted(Mode::Cbc, Padding::Pkcs5Padding);
    used.init(Direction::Encrypt, params()).unwrap();
    // Leave a partial block buffered, then reset
    let mut scratch = vec![0u8; 64];
    used.process_block(&first, 0, first.len(), &mut scratch, 0).unwrap();
    used.reset().unwrap();
    let after_reset = crypt_chunked(&mut used, &second, 13).unwrap();

    let (mut fresh, _) = counted(Mode::Cbc, Padding::Pkcs5Padding);
    fresh.init(Direction::Encrypt, params()).unwrap();
    let expected = crypt_chunked(&mut fresh, &second, 13).unwrap();

    assert_eq!(after_reset, expected);
}

#[test]
fn successive_messages_restart_from_the_iv() {
    let (mut engine, _) = counted(Mode::Cbc, Padding::Pkcs5Padding);
    engine.init(Direction::Encrypt, params()).unwrap();
    let a = crypt_once(&mut engine, b"same message").unwrap();
    let b = crypt_once(&mut engine, b"same message").unwrap();
    assert_eq!(a, b);
}

#[test]
fn pending_reconfiguration_blocks_transforms() {
    let (mut engine, counters) = counted(Mode::Cbc, Padding::NoPadding);
    engine.init(Direction::Encrypt, params()).unwrap();

    engine.set_iv(&[0x11; 16]);
    assert_eq!(engine.state(), EngineState::PendingReconfiguration);
    assert_eq!(engine.iv(), Some(&[0x11u8; 16][..]));

    let mut out = [0u8; 16];
    assert!(matches!(
        engine.process_block(&[0u8; 16], 0, 16, &mut out, 0),
        Err(Error::State { .. })
    ));
    assert_eq!(counters.transforms(), 0);

    engine.clear_iv();
    assert!(engine.reset().unwrap_err().is_configuration());
    assert_eq!(engine.state(), EngineState::PendingReconfiguration);

    engine.set_iv(&unhex(IV));
    engine.reset().unwrap();
    assert_eq!(engine.state(), EngineState::Active);
    engine.process_block(&[0u8; 16], 0, 16, &mut out, 0).unwrap();
}

#[test]
fn tampered_ciphertext_always_fails_integrity() {
    let vector = &CBC_PKCS5[4];
    let key = unhex(vector.key);
    let iv = unhex(vector.iv);
    let ct = unhex(vector.ciphertext);

    let (mut engine, _) = counted(Mode::Cbc, Padding::Pkcs5Padding);
    let init = |engine: &mut BlockCipherEngine<CountingBackend>| {
        engine
            .init(
                Direction::Decrypt,
                CipherParameters::with_iv(KeyParameter::new(&key), IvParameter::new(&iv)),
            )
            .unwrap()
    };
    init(&mut engine);

    for index in 0..ct.len() {
        for flip in [0x01u8, 0x80, 0xff] {
            let mut tampered = ct.clone();
            tampered[index] ^= flip;

            let mut out = vec![0u8; 32];
            let n = engine
                .process_block(&tampered, 0, tampered.len(), &mut out, 0)
                .unwrap();
            let err = engine.do_final(&mut out, n).unwrap_err();
            assert_eq!(err.to_string(), "invalid ciphertext in do_final");

            // Context keeps the tampered block; start the next message cleanly
            engine.reset().unwrap();
        }
    }

    // Intact ciphertext still decrypts on the same engine
    let pt = crypt_once(&mut engine, &ct).unwrap();
    assert_eq!(hex::encode(pt), vector.plaintext);
}

#[test]
fn concurrent_engines_are_independent() {
    let handles: Vec<_> = (0u8..4)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut engine =
                    BlockCipherEngine::with_padding(Mode::Cbc, Padding::Pkcs5Padding).unwrap();
                engine.init(Direction::Encrypt, params()).unwrap();
                let input = vec![seed; 100 + seed as usize];
                crypt_once(&mut engine, &input).unwrap()
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let ct = handle.join().unwrap();
        let mut engine = BlockCipherEngine::with_padding(Mode::Cbc, Padding::Pkcs5Padding).unwrap();
        engine.init(Direction::Decrypt, params()).unwrap();
        let pt = crypt_once(&mut engine, &ct).unwrap();
        assert_eq!(pt, vec![seed as u8; 100 + seed]);
    }
}
