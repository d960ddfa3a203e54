use super::*;
use crate::error::Error;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn check_kat(key_hex: &str, pt_hex: &str, ct_hex: &str) {
    let key = hex::decode(key_hex).unwrap();
    let cipher = Twofish::new(&key).unwrap();

    let mut block = hex::decode(pt_hex).unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), ct_hex.to_lowercase());

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), pt_hex.to_lowercase());
}

#[test]
fn test_schneier_ival_vectors() {
    // ecb_ival.txt from the Twofish submission package
    check_kat(
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "9F589F5CF6122C32B6BFEC2F2AE8C35A",
    );
    check_kat(
        "0123456789ABCDEFFEDCBA98765432100011223344556677",
        "00000000000000000000000000000000",
        "CFD1D2E5A9BE9CDF501F13B892BD2248",
    );
    check_kat(
        "0123456789ABCDEFFEDCBA987654321000112233445566778899AABBCCDDEEFF",
        "00000000000000000000000000000000",
        "37527BE0052334B89F0CFCCAE87CFA20",
    );
}

#[test]
fn test_schneier_tbl_vectors() {
    // ecb_tbl.txt, all-zero keys per size
    check_kat(
        "000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "EFA71F788965BD4453F860178FC19101",
    );
    check_kat(
        "0000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "57FF739D4DC92C1BD7FC01700CC8216F",
    );
}

#[test]
fn test_schneier_variable_key_vectors() {
    // ecb_vk.txt, a single high bit set in the key
    check_kat(
        "80000000000000000000000000000000",
        "00000000000000000000000000000000",
        "6BFD32804A1C3206C4BF85EB11241F89",
    );
    check_kat(
        "800000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "B5AED133641004F4121B66E7DB8F2FF0",
    );
    check_kat(
        "8000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "785229B51B515F30A1FCC88B969A4E47",
    );
}

#[test]
fn test_schneier_variable_text_vectors() {
    // ecb_vt.txt, a single high bit set in the plaintext
    check_kat(
        "00000000000000000000000000000000",
        "80000000000000000000000000000000",
        "73B9FF14CF2589901FF52A0D6F4B7EDE",
    );
    check_kat(
        "000000000000000000000000000000000000000000000000",
        "80000000000000000000000000000000",
        "62EF193EDB7D399ACA50EC1CBE5398D8",
    );
    check_kat(
        "0000000000000000000000000000000000000000000000000000000000000000",
        "80000000000000000000000000000000",
        "23A385F617F313DAC05BCB7EABD61807",
    );
}

#[test]
fn test_zero_key_subkeys() {
    // First words of the published zero-key schedule
    let cipher = Twofish::new(&[0u8; 16]).unwrap();
    assert_eq!(
        &cipher.subkeys[..8],
        &[
            0x52C54DDE, 0x11F0626D, 0x7CAC9D4A, 0x4D1B4AAA,
            0xB7B83A10, 0x1E7D0BEB, 0xEE9C341F, 0xCFE14BE4,
        ]
    );
}

#[test]
fn test_q_permutations() {
    // Leading bytes of the fixed q0/q1 tables from the specification
    assert_eq!(&Q0[..8], &[0xA9, 0x67, 0xB3, 0xE8, 0x04, 0xFD, 0xA3, 0x76]);
    assert_eq!(&Q1[..8], &[0x75, 0xF3, 0xC6, 0xF4, 0xDB, 0x7B, 0xFB, 0xC8]);
}

#[test]
fn test_roundtrip_all_key_sizes() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for &len in Twofish::key_sizes() {
        let mut key = vec![0u8; len];
        rng.fill(&mut key[..]);
        let cipher = Twofish::new(&key).unwrap();

        for _ in 0..64 {
            let mut block = [0u8; 16];
            rng.fill(&mut block);
            let original = block;

            cipher.encrypt_block(&mut block).unwrap();
            assert_ne!(block, original);
            cipher.decrypt_block(&mut block).unwrap();
            assert_eq!(block, original);
        }
    }
}

#[test]
fn test_determinism() {
    let key = [0xC3u8; 24];
    let cipher = Twofish::new(&key).unwrap();

    let mut a = [0x42u8; 16];
    let mut b = [0x42u8; 16];
    cipher.encrypt_block(&mut a).unwrap();
    cipher.encrypt_block(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_key_length() {
    for len in [0, 15, 17, 23, 31, 33] {
        let key = vec![0u8; len];
        match Twofish::new(&key) {
            Err(Error::InvalidKeyLength { cipher, actual }) => {
                assert_eq!(cipher, "Twofish");
                assert_eq!(actual, len);
            }
            other => panic!("expected InvalidKeyLength for {} bytes, got {:?}", len, other.map(|_| ())),
        }
    }
}

#[test]
fn test_invalid_block_length() {
    let cipher = Twofish::new(&[0u8; 16]).unwrap();

    let mut short = [0u8; 15];
    assert!(matches!(
        cipher.encrypt_block(&mut short),
        Err(Error::InvalidBlockLength { expected: 16, actual: 15, .. })
    ));

    let mut long = [0u8; 17];
    assert!(matches!(
        cipher.decrypt_block(&mut long),
        Err(Error::InvalidBlockLength { expected: 16, actual: 17, .. })
    ));
}
