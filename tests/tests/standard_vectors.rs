//! Known-answer tests against the GM/T 0003 and GM/T 0004 worked examples

use gmcrypt_algorithms::ec::{PointFormat, PrimeFieldCurve};
use gmcrypt_algorithms::hash::{HashFunction, Sm3};
use gmcrypt_algorithms::sm2::{identity_hash, KeyPair, PrivateKey};
use gmcrypt_kem::{KeyExchangeSession, SessionState, Sm2KeyExchange};
use gmcrypt_pke::{Sm2Ciphertext, Sm2Encryptor};
use gmcrypt_sign::Sm2Signer;
use gmcrypt_tests::vectors::{self, encryption, key_exchange, signature};
use gmcrypt_tests::{hex_int, init_tracing, FixedRng};

fn example_curve() -> PrimeFieldCurve {
    PrimeFieldCurve::sm2_example().unwrap()
}

fn keypair(curve: &PrimeFieldCurve, d: &str) -> KeyPair {
    let private_key = PrivateKey::new(curve, &hex_int(d)).unwrap();
    KeyPair::from_private_key(curve, private_key).unwrap()
}

#[test]
fn sm3_vectors() {
    assert_eq!(Sm3::digest(b"abc").unwrap().to_hex(), vectors::SM3_ABC);
    assert_eq!(
        Sm3::digest(&b"abcd".repeat(16)).unwrap().to_hex(),
        vectors::SM3_ABCD_X16
    );
    assert_eq!(Sm3::digest(b"").unwrap().to_hex(), vectors::SM3_EMPTY);

    let mut hasher = Sm3::new();
    for chunk in b"abcd".repeat(16).chunks(7) {
        hasher.update(chunk).unwrap();
    }
    assert_eq!(hasher.finalize().unwrap().to_hex(), vectors::SM3_ABCD_X16);
}

#[test]
fn identity_hash_vector() {
    let curve = example_curve();
    let alice = keypair(&curve, signature::D);
    let z = identity_hash(&curve, signature::ID, alice.public_key()).unwrap();
    assert_eq!(z.to_hex(), signature::Z);
}

#[test]
fn signature_vector() {
    init_tracing();
    let curve = example_curve();
    let signer = Sm2Signer::new(&curve);
    let alice = keypair(&curve, signature::D)
        .with_identity(&curve, signature::ID)
        .unwrap();

    let e = Sm2Signer::digest_message(alice.z().unwrap(), signature::MESSAGE).unwrap();
    assert_eq!(e.to_hex(), signature::E);

    let mut rng = FixedRng::from_hex(&[signature::K]);
    let sig = signer
        .sign_with_identity(&alice, signature::MESSAGE, &mut rng)
        .unwrap();
    assert_eq!(rng.remaining(), 0);
    assert_eq!(sig.r(), &hex_int(signature::R));
    assert_eq!(sig.s(), &hex_int(signature::S));

    let bytes = sig.to_bytes(&curve).unwrap();
    assert_eq!(
        hex::encode(&bytes),
        format!("{}{}", signature::R, signature::S)
    );
    assert!(signer.verify_with_identity(
        alice.public_key(),
        signature::ID,
        &sig,
        signature::MESSAGE
    ));
    assert!(!signer.verify_with_identity(
        alice.public_key(),
        b"BILL456@YAHOO.COM",
        &sig,
        signature::MESSAGE
    ));
}

#[test]
fn encryption_vector() {
    init_tracing();
    let curve = example_curve();
    let engine = Sm2Encryptor::new(&curve);
    let bob = keypair(&curve, encryption::D);

    let mut rng = FixedRng::from_hex(&[encryption::K]);
    let ciphertext = engine
        .encrypt(bob.public_key(), encryption::MESSAGE, &mut rng)
        .unwrap();

    let expected = format!(
        "04{}{}{}{}",
        encryption::C1_X,
        encryption::C1_Y,
        encryption::C2,
        encryption::C3
    );
    assert_eq!(hex::encode(&ciphertext), expected);

    let parsed = Sm2Ciphertext::parse(&curve, &ciphertext).unwrap();
    assert_eq!(hex::encode(parsed.c2()), encryption::C2);
    assert_eq!(hex::encode(parsed.c3()), encryption::C3);

    let plaintext = engine.decrypt(bob.private_key(), &ciphertext).unwrap();
    assert_eq!(plaintext, encryption::MESSAGE);
}

#[test]
fn encryption_vector_with_compressed_c1() {
    let curve = example_curve();
    let engine = Sm2Encryptor::new(&curve).with_point_format(PointFormat::Compressed);
    let bob = keypair(&curve, encryption::D);

    let mut rng = FixedRng::from_hex(&[encryption::K]);
    let ciphertext = engine
        .encrypt(bob.public_key(), encryption::MESSAGE, &mut rng)
        .unwrap();

    // C1.y ends in 0xb8, so the even prefix is used
    let expected = format!(
        "02{}{}{}",
        encryption::C1_X,
        encryption::C2,
        encryption::C3
    );
    assert_eq!(hex::encode(&ciphertext), expected);
    assert_eq!(
        engine.decrypt(bob.private_key(), &ciphertext).unwrap(),
        encryption::MESSAGE
    );
}

#[test]
fn key_exchange_vector() {
    init_tracing();
    let curve = example_curve();
    let kx = Sm2KeyExchange::new(&curve);
    let alice = keypair(&curve, key_exchange::DA)
        .with_identity(&curve, key_exchange::ID_A)
        .unwrap();
    let bill = keypair(&curve, key_exchange::DB)
        .with_identity(&curve, key_exchange::ID_B)
        .unwrap();
    let alice_eph = keypair(&curve, key_exchange::RA);
    let bill_eph = keypair(&curve, key_exchange::RB);

    let alice_info = kx
        .public_info(&alice, &alice_eph, true, key_exchange::KEY_LEN, None)
        .unwrap();
    let bill_result = kx.agree(&bill, &bill_eph, &alice_info).unwrap();
    assert_eq!(
        hex::encode(bill_result.shared_secret().as_slice()),
        key_exchange::KEY
    );
    assert_eq!(hex::encode(bill_result.tag()), key_exchange::SB);

    let bill_info = kx
        .public_info(
            &bill,
            &bill_eph,
            false,
            key_exchange::KEY_LEN,
            Some(*bill_result.tag()),
        )
        .unwrap();
    let alice_result = kx.agree(&alice, &alice_eph, &bill_info).unwrap();
    assert_eq!(
        hex::encode(alice_result.shared_secret().as_slice()),
        key_exchange::KEY
    );
    assert_eq!(hex::encode(alice_result.tag()), key_exchange::SA);
}

#[test]
fn key_exchange_vector_through_sessions() {
    let curve = example_curve();
    let alice = keypair(&curve, key_exchange::DA)
        .with_identity(&curve, key_exchange::ID_A)
        .unwrap();
    let bill = keypair(&curve, key_exchange::DB)
        .with_identity(&curve, key_exchange::ID_B)
        .unwrap();

    let mut a = KeyExchangeSession::new(&curve, &alice, true, key_exchange::KEY_LEN).unwrap();
    let mut b = KeyExchangeSession::new(&curve, &bill, false, key_exchange::KEY_LEN).unwrap();

    let a_info = a.start(&mut FixedRng::from_hex(&[key_exchange::RA])).unwrap();
    b.start(&mut FixedRng::from_hex(&[key_exchange::RB])).unwrap();

    b.derive(&a_info).unwrap();
    let b_info = b.public_info(true).unwrap();
    assert_eq!(hex::encode(b_info.tag.unwrap()), key_exchange::SB);

    a.derive(&b_info).unwrap();
    assert_eq!(a.state(), SessionState::Verified);
    let a_reply = a.public_info(true).unwrap();
    assert_eq!(hex::encode(a_reply.tag.unwrap()), key_exchange::SA);

    b.confirm(&a_reply.tag.unwrap()).unwrap();
    assert_eq!(b.state(), SessionState::Verified);
    assert_eq!(
        hex::encode(a.shared_secret().unwrap().as_slice()),
        key_exchange::KEY
    );
    assert_eq!(a.shared_secret(), b.shared_secret());
}
