//! Property-based tests for the SM2 engines

use gmcrypt_algorithms::ec::PrimeFieldCurve;
use gmcrypt_algorithms::sm2::KeyPair;
use gmcrypt_kem::Sm2KeyExchange;
use gmcrypt_pke::{Error as PkeError, Sm2Encryptor};
use gmcrypt_sign::Sm2Signer;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn identity() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=64)
}

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn sign_verify_roundtrip(seed in any::<u64>(), id in identity(), msg in message()) {
        let curve = PrimeFieldCurve::sm2().unwrap();
        let signer = Sm2Signer::new(&curve);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keypair = KeyPair::generate(&curve, &mut rng)
            .unwrap()
            .with_identity(&curve, &id)
            .unwrap();

        let sig = signer.sign_with_identity(&keypair, &msg, &mut rng).unwrap();
        prop_assert!(signer.verify_with_identity(keypair.public_key(), &id, &sig, &msg));

        let der = sig.to_der();
        let decoded = gmcrypt_sign::Signature::from_der(&der).unwrap();
        prop_assert_eq!(&decoded, &sig);
    }

    #[test]
    fn signature_rejects_modified_message(
        seed in any::<u64>(),
        msg in message(),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let curve = PrimeFieldCurve::sm2().unwrap();
        let signer = Sm2Signer::new(&curve);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keypair = KeyPair::generate(&curve, &mut rng)
            .unwrap()
            .with_identity(&curve, b"1234567812345678")
            .unwrap();
        let sig = signer.sign_with_identity(&keypair, &msg, &mut rng).unwrap();

        let mut tampered = msg.clone();
        let i = index.index(tampered.len());
        tampered[i] ^= flip;
        prop_assert!(!signer.verify_with_identity(
            keypair.public_key(),
            b"1234567812345678",
            &sig,
            &tampered
        ));
    }

    #[test]
    fn encrypt_decrypt_roundtrip(seed in any::<u64>(), msg in message()) {
        let curve = PrimeFieldCurve::sm2().unwrap();
        let engine = Sm2Encryptor::new(&curve);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keypair = KeyPair::generate(&curve, &mut rng).unwrap();

        let ct = engine.encrypt(keypair.public_key(), &msg, &mut rng).unwrap();
        prop_assert_eq!(ct.len(), 65 + msg.len() + 32);
        let pt = engine.decrypt(keypair.private_key(), &ct).unwrap();
        prop_assert_eq!(pt, msg);
    }

    #[test]
    fn decryption_detects_tampered_body(
        seed in any::<u64>(),
        msg in message(),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let curve = PrimeFieldCurve::sm2().unwrap();
        let engine = Sm2Encryptor::new(&curve);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keypair = KeyPair::generate(&curve, &mut rng).unwrap();
        let mut ct = engine.encrypt(keypair.public_key(), &msg, &mut rng).unwrap();

        // Flip a byte of C2 or C3, leaving C1 intact
        let i = 65 + index.index(ct.len() - 65);
        ct[i] ^= flip;
        prop_assert_eq!(
            engine.decrypt(keypair.private_key(), &ct),
            Err(PkeError::IntegrityCheckFailed)
        );
    }

    #[test]
    fn key_exchange_is_symmetric(
        seed in any::<u64>(),
        key_len in 1usize..=96,
        responder_first in any::<bool>(),
    ) {
        let curve = PrimeFieldCurve::sm2().unwrap();
        let kx = Sm2KeyExchange::new(&curve);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let alice = KeyPair::generate(&curve, &mut rng).unwrap().with_identity(&curve, b"alice").unwrap();
        let bill = KeyPair::generate(&curve, &mut rng).unwrap().with_identity(&curve, b"bill").unwrap();
        let alice_eph = KeyPair::generate(&curve, &mut rng).unwrap();
        let bill_eph = KeyPair::generate(&curve, &mut rng).unwrap();

        let (alice_result, bill_result) = if responder_first {
            let alice_info = kx.public_info(&alice, &alice_eph, true, key_len, None).unwrap();
            let bill_result = kx.agree(&bill, &bill_eph, &alice_info).unwrap();
            let bill_info = kx
                .public_info(&bill, &bill_eph, false, key_len, Some(*bill_result.tag()))
                .unwrap();
            (kx.agree(&alice, &alice_eph, &bill_info).unwrap(), bill_result)
        } else {
            let bill_info = kx.public_info(&bill, &bill_eph, false, key_len, None).unwrap();
            let alice_result = kx.agree(&alice, &alice_eph, &bill_info).unwrap();
            let alice_info = kx
                .public_info(&alice, &alice_eph, true, key_len, Some(*alice_result.tag()))
                .unwrap();
            (alice_result, kx.agree(&bill, &bill_eph, &alice_info).unwrap())
        };

        prop_assert_eq!(alice_result.shared_secret().len(), key_len);
        prop_assert_eq!(alice_result.shared_secret(), bill_result.shared_secret());
        let mut alice_result = alice_result;
        let mut bill_result = bill_result;
        prop_assert!(alice_result.confirm(bill_result.tag()).is_ok());
        prop_assert!(bill_result.confirm(alice_result.tag()).is_ok());
    }
}
