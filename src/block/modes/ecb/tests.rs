use super::*;
use crate::block::{Camellia, Twofish};
use crate::error::Error;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn test_camellia128_multi_block() {
    // The four ECB-CAMELLIA128 blocks as one message
    let key = hex::decode("2B7E151628AED2A6ABF7158809CF4F3C").unwrap();
    let plaintext = hex::decode(concat!(
        "6BC1BEE22E409F96E93D7E117393172A",
        "AE2D8A571E03AC9C9EB76FAC45AF8E51",
        "30C81C46A35CE411E5FBC1191A0A52EF",
        "F69F2445DF4F9B17AD2B417BE66C3710",
    ))
    .unwrap();
    let expected = concat!(
        "432fc5dcd628115b7c388d770b270c96",
        "0be1f14023782a22e8384c5abb7fab2b",
        "a0a1abcd1893ab6fe0fe5b65df5f8636",
        "e61925e0d5dfaa9bb29f815b3076e51a",
    );

    let mode = Ecb::new(Camellia::new(&key).unwrap());
    let ciphertext = mode.encrypt(&plaintext).unwrap();
    assert_eq!(hex::encode(&ciphertext), expected);
    assert_eq!(mode.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_equal_blocks_encrypt_equally() {
    // The defining (and damning) ECB property
    let mode = Ecb::new(Twofish::new(&[0u8; 16]).unwrap());
    let ciphertext = mode.encrypt(&[0u8; 32]).unwrap();
    assert_eq!(ciphertext[..16], ciphertext[16..]);
}

#[test]
fn test_roundtrip_random_messages() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key = [0u8; 24];
    rng.fill(&mut key);
    let mode = Ecb::new(Twofish::new(&key).unwrap());

    for blocks in [0usize, 1, 3, 9] {
        let mut message = vec![0u8; blocks * 16];
        rng.fill(&mut message[..]);

        let ciphertext = mode.encrypt(&message).unwrap();
        assert_eq!(mode.decrypt(&ciphertext).unwrap(), message);
    }
}

#[test]
fn test_input_length_must_be_block_multiple() {
    let mode = Ecb::new(Camellia::new(&[0u8; 16]).unwrap());

    for len in [1usize, 15, 17, 31] {
        let err = mode.encrypt(&vec![0u8; len]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInputLength { mode: "ECB", block_size: 16, .. }
        ));
    }
}
