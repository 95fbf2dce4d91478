//! End to end recovery against fixed vectors and independent signers.
use eth_pubkey_recovery::{
    hash_message, hex, recover_public_key, CompactSignature, PublicKey, Recoverer, RecoveryError,
    U256,
};
use k256::ecdsa::SigningKey;
use rstest::rstest;
use secp256k1::{All, Message, Secp256k1, SecretKey, VerifyOnly};

/// A signature vector: message, `v`, `r`, `s` and the expected raw public key.
struct Vector {
    message: &'static [u8],
    v: u8,
    r: &'static str,
    s: &'static str,
    public_key: &'static str,
}

const HELLO_WORLD: Vector = Vector {
    message: b"hello world",
    v: 0,
    r: "650acf9d3f5f0a2c799776a1254355d5f4061762a237396a99a0e0e3fc2bcd67",
    s: "29514a0dacb2e623ac4abd157cb18163ff942280db4d5caad66ddf941ba12e03",
    public_key: "0xab16b8c7fc1febb74ceedf1349944ffd4a04d11802451d02e808f08cb3b0c1c1a9c4e1efb7d309a762baa4c9c8da08890b3b712d1666b5b630d6c6a09cbba171",
};

// signed by 0x4646..46
const HELLO_ETHEREUM: Vector = Vector {
    message: b"Hello, Ethereum!",
    v: 0,
    r: "f2797df51af15e9b0433d9c4bb730114c7a397a9b94dbc0c78581915523150f4",
    s: "665b9ff772be2737f54183a48a50222391ea9503b4bc03af6a57577e3d664544",
    public_key: "0x4bc2a31265153f07e70e0bab08724e6b85e217f8cd628ceb62974247bb493382ce28cab79ad7119ee1ad3ebcdb98a16805211530ecc6cfefa1b88e6dff99232a",
};

fn uint(hex_str: &str) -> U256 {
    U256::from_str_radix(hex_str, 16).unwrap()
}

fn recover_vector(vector: &Vector) -> Result<PublicKey, RecoveryError> {
    recover_public_key::<VerifyOnly>(
        vector.message,
        vector.v,
        uint(vector.r),
        uint(vector.s),
        None,
    )
}

#[rstest]
#[case::hello_world(HELLO_WORLD)]
#[case::hello_ethereum(HELLO_ETHEREUM)]
fn recovers_reference_vectors(#[case] vector: Vector) {
    let key = recover_vector(&vector).unwrap();
    assert_eq!(key.hex(), vector.public_key);
    assert_eq!(key.hex(), key.hex());
    assert_eq!(key.hex().len(), 130);
}

#[test]
fn recovered_key_hashes_to_known_address() {
    let key = recover_vector(&HELLO_WORLD).unwrap();
    let hash = hash_message(key.as_bytes());
    assert_eq!(
        hex::encode(&hash[12..]),
        "c08b5542d177ac6686946920409741463a15dddb"
    );
}

#[test]
fn accepts_byte_and_uint_components_alike() {
    let r = hex::decode(HELLO_ETHEREUM.r).unwrap();
    let s = hex::decode(HELLO_ETHEREUM.s).unwrap();
    let secp = Secp256k1::verification_only();
    let from_bytes =
        recover_public_key(HELLO_ETHEREUM.message, 0u64, &r, &s, Some(&secp)).unwrap();
    let from_uint = PublicKey::recover(
        HELLO_ETHEREUM.message,
        U256::ZERO,
        uint(HELLO_ETHEREUM.r),
        uint(HELLO_ETHEREUM.s),
        Some(&secp),
    )
    .unwrap();
    assert_eq!(from_bytes, from_uint);
}

#[test]
fn wrong_message_recovers_different_key() {
    let vector = Vector {
        message: b"hello world!",
        ..HELLO_WORLD
    };
    match recover_vector(&vector) {
        Ok(key) => assert_ne!(key.hex(), HELLO_WORLD.public_key),
        Err(err) => assert_eq!(err, RecoveryError::SignatureMalformed),
    }
}

#[rstest]
#[case::legacy_v_27(27)]
#[case::legacy_v_28(28)]
#[case::eip155_v(37)]
fn legacy_recovery_ids_are_malformed(#[case] v: u8) {
    let vector = Vector { v, ..HELLO_WORLD };
    assert_eq!(
        recover_vector(&vector),
        Err(RecoveryError::SignatureMalformed)
    );
}

#[test]
fn oversized_components_are_malformed() {
    let mut wide_r = vec![0x01];
    wide_r.extend(hex::decode(HELLO_WORLD.r).unwrap());
    assert_eq!(
        recover_public_key::<VerifyOnly>(b"hello world", 0u8, &wide_r, uint(HELLO_WORLD.s), None),
        Err(RecoveryError::SignatureMalformed)
    );

    let v = U256::from(i32::MAX as u64 + 1);
    assert_eq!(
        recover_public_key::<VerifyOnly>(
            b"hello world",
            v,
            uint(HELLO_WORLD.r),
            uint(HELLO_WORLD.s),
            None
        ),
        Err(RecoveryError::SignatureMalformed)
    );
}

#[test]
fn matches_k256_signer() {
    let signing_key = SigningKey::from_slice(&[0x11; 32]).unwrap();
    let message = b"signed by an independent implementation";
    let hash = hash_message(message);
    let (signature, recid) = signing_key.sign_prehash_recoverable(hash.as_slice()).unwrap();
    let compact = signature.to_bytes();

    let key = recover_public_key::<VerifyOnly>(
        message,
        recid.to_byte(),
        &compact[..32],
        &compact[32..],
        None,
    )
    .unwrap();

    let expected = signing_key.verifying_key().to_encoded_point(false);
    assert_eq!(key.as_bytes()[..], expected.as_bytes()[1..]);
}

#[test]
fn matches_secp256k1_signer_for_many_keys() {
    let secp = Secp256k1::<All>::new();
    let recoverer = Recoverer::with_context(&secp);
    for seed in 1u8..=16 {
        let secret = SecretKey::from_slice(&[seed; 32]).unwrap();
        let message = [seed; 7];
        let hash = hash_message(&message);
        let (recid, compact) = secp
            .sign_ecdsa_recoverable(&Message::from_digest(hash.0), &secret)
            .serialize_compact();

        let signature =
            CompactSignature::from_parts(recid.to_i32() as u32, &compact[..32], &compact[32..])
                .unwrap();
        let key = recoverer.recover_prehash(&hash, &signature).unwrap();
        let expected = secp256k1::PublicKey::from_secret_key(&secp, &secret);
        assert_eq!(key.as_bytes()[..], expected.serialize_uncompressed()[1..]);
    }
}

#[test]
fn shared_context_across_threads() {
    let secp = Secp256k1::verification_only();
    let recoverer = Recoverer::with_context(&secp);
    std::thread::scope(|scope| {
        for vector in [&HELLO_WORLD, &HELLO_ETHEREUM] {
            let recoverer = &recoverer;
            scope.spawn(move || {
                for _ in 0..8 {
                    let key = recoverer
                        .recover(vector.message, vector.v, uint(vector.r), uint(vector.s))
                        .unwrap();
                    assert_eq!(key.hex(), vector.public_key);
                }
            });
        }
    });
    drop(recoverer);
    // the caller still owns the context
    assert_eq!(
        recover_public_key(
            HELLO_WORLD.message,
            HELLO_WORLD.v,
            uint(HELLO_WORLD.r),
            uint(HELLO_WORLD.s),
            Some(&secp)
        )
        .unwrap()
        .hex(),
        HELLO_WORLD.public_key
    );
}
