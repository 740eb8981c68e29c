//! The three SM2 engines driven through the generic API traits

use gmcrypt_algorithms::ec::PrimeFieldCurve;
use gmcrypt_api::{Error, KeyAgreement, Pke, Signature};
use gmcrypt_kem::Sm2KeyExchange;
use gmcrypt_pke::Sm2Encryptor;
use gmcrypt_sign::Sm2Signer;
use rand::rngs::OsRng;

fn sign_then_verify<S: Signature>(scheme: &S, message: &[u8]) -> Result<(), Error> {
    let keypair = scheme.keypair(&mut OsRng)?;
    let public_key = scheme.public_key(&keypair)?;
    let signature = scheme.sign(message, &keypair, &mut OsRng)?;
    scheme.verify(message, &signature, &public_key)?;

    let mut other = message.to_vec();
    other.push(0);
    assert!(scheme.verify(&other, &signature, &public_key).is_err());
    Ok(())
}

fn encrypt_then_decrypt<P: Pke>(scheme: &P, message: &[u8]) -> Result<Vec<u8>, Error> {
    let (pk, sk) = scheme.keypair(&mut OsRng)?;
    let ciphertext = scheme.encrypt(&pk, message, &mut OsRng)?;
    scheme.decrypt(&sk, ciphertext.as_ref())
}

#[test]
fn signature_trait() {
    let curve = PrimeFieldCurve::sm2().unwrap();
    let signer = Sm2Signer::new(&curve);
    assert_eq!(signer.name(), "SM2");
    sign_then_verify(&signer, b"through the trait").unwrap();
}

#[test]
fn pke_trait() {
    let curve = PrimeFieldCurve::sm2().unwrap();
    let engine = Sm2Encryptor::new(&curve);
    assert_eq!(Pke::name(&engine), "SM2-ENC");
    assert_eq!(
        encrypt_then_decrypt(&engine, b"through the trait").unwrap(),
        b"through the trait"
    );
    assert!(matches!(
        encrypt_then_decrypt(&engine, b""),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn key_agreement_trait() {
    let curve = PrimeFieldCurve::sm2().unwrap();
    let kx = Sm2KeyExchange::new(&curve);
    let alice = gmcrypt_algorithms::sm2::KeyPair::generate(&curve, &mut OsRng)
        .unwrap()
        .with_identity(&curve, b"alice")
        .unwrap();
    let bill = gmcrypt_algorithms::sm2::KeyPair::generate(&curve, &mut OsRng)
        .unwrap()
        .with_identity(&curve, b"bill")
        .unwrap();
    let alice_eph = kx.ephemeral(&mut OsRng).unwrap();
    let bill_eph = kx.ephemeral(&mut OsRng).unwrap();

    let alice_info = kx.public_info(&alice, &alice_eph, true, 32, None).unwrap();
    let bill_out = KeyAgreement::agree(&kx, &bill, &bill_eph, &alice_info).unwrap();
    let bill_info = kx
        .public_info(&bill, &bill_eph, false, 32, Some(*bill_out.tag()))
        .unwrap();
    let alice_out = KeyAgreement::agree(&kx, &alice, &alice_eph, &bill_info).unwrap();
    assert_eq!(alice_out.shared_secret(), bill_out.shared_secret());

    // An off-curve ephemeral key surfaces as a key agreement failure
    let mut bad = alice_info;
    bad.ephemeral_public_key = gmcrypt_algorithms::ec::CurvePoint::new(1u32.into(), 1u32.into());
    match KeyAgreement::agree(&kx, &bill, &bill_eph, &bad) {
        Err(Error::KeyAgreement { message, .. }) => assert_eq!(message, "curve mismatch"),
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}
