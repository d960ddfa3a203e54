//! Camellia block cipher
//!
//! This module implements the Camellia block cipher as specified in
//! RFC 3713, for 128-, 192- and 256-bit keys. The 128-bit tier runs 18
//! Feistel rounds, the larger tiers 24, with the FL/FL⁻¹ diffusion layer
//! inserted every six rounds.
//!
//! The whole subkey schedule (whitening, round and FL keys) is derived
//! once when the instance is built and held as plain 64-bit words that are
//! zeroized on drop.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};

/// Camellia block size in bytes
pub const CAMELLIA_BLOCK_SIZE: usize = 16;

/// Key sizes in bytes accepted by [`Camellia::new`]
pub const CAMELLIA_KEY_SIZES: &[usize] = &[16, 24, 32];

/// Key schedule constants Σ1..Σ6 from RFC 3713
const SIGMA: [u64; 6] = [
    0xA09E667F3BCC908B,
    0xB67AE8584CAA73B2,
    0xC6EF372FE94F82BE,
    0x54FF53A5F1D36F1C,
    0x10E527FADE682D1D,
    0xB05688C2B3E6C1FD,
];

/// The s1 substitution table; s2..s4 are byte-rotated variants of it
const SBOX1: [u8; 256] = [
    0x70, 0x82, 0x2c, 0xec, 0xb3, 0x27, 0xc0, 0xe5,
    0xe4, 0x85, 0x57, 0x35, 0xea, 0x0c, 0xae, 0x41,
    0x23, 0xef, 0x6b, 0x93, 0x45, 0x19, 0xa5, 0x21,
    0xed, 0x0e, 0x4f, 0x4e, 0x1d, 0x65, 0x92, 0xbd,
    0x86, 0xb8, 0xaf, 0x8f, 0x7c, 0xeb, 0x1f, 0xce,
    0x3e, 0x30, 0xdc, 0x5f, 0x5e, 0xc5, 0x0b, 0x1a,
    0xa6, 0xe1, 0x39, 0xca, 0xd5, 0x47, 0x5d, 0x3d,
    0xd9, 0x01, 0x5a, 0xd6, 0x51, 0x56, 0x6c, 0x4d,
    0x8b, 0x0d, 0x9a, 0x66, 0xfb, 0xcc, 0xb0, 0x2d,
    0x74, 0x12, 0x2b, 0x20, 0xf0, 0xb1, 0x84, 0x99,
    0xdf, 0x4c, 0xcb, 0xc2, 0x34, 0x7e, 0x76, 0x05,
    0x6d, 0xb7, 0xa9, 0x31, 0xd1, 0x17, 0x04, 0xd7,
    0x14, 0x58, 0x3a, 0x61, 0xde, 0x1b, 0x11, 0x1c,
    0x32, 0x0f, 0x9c, 0x16, 0x53, 0x18, 0xf2, 0x22,
    0xfe, 0x44, 0xcf, 0xb2, 0xc3, 0xb5, 0x7a, 0x91,
    0x24, 0x08, 0xe8, 0xa8, 0x60, 0xfc, 0x69, 0x50,
    0xaa, 0xd0, 0xa0, 0x7d, 0xa1, 0x89, 0x62, 0x97,
    0x54, 0x5b, 0x1e, 0x95, 0xe0, 0xff, 0x64, 0xd2,
    0x10, 0xc4, 0x00, 0x48, 0xa3, 0xf7, 0x75, 0xdb,
    0x8a, 0x03, 0xe6, 0xda, 0x09, 0x3f, 0xdd, 0x94,
    0x87, 0x5c, 0x83, 0x02, 0xcd, 0x4a, 0x90, 0x33,
    0x73, 0x67, 0xf6, 0xf3, 0x9d, 0x7f, 0xbf, 0xe2,
    0x52, 0x9b, 0xd8, 0x26, 0xc8, 0x37, 0xc6, 0x3b,
    0x81, 0x96, 0x6f, 0x4b, 0x13, 0xbe, 0x63, 0x2e,
    0xe9, 0x79, 0xa7, 0x8c, 0x9f, 0x6e, 0xbc, 0x8e,
    0x29, 0xf5, 0xf9, 0xb6, 0x2f, 0xfd, 0xb4, 0x59,
    0x78, 0x98, 0x06, 0x6a, 0xe7, 0x46, 0x71, 0xba,
    0xd4, 0x25, 0xab, 0x42, 0x88, 0xa2, 0x8d, 0xfa,
    0x72, 0x07, 0xb9, 0x55, 0xf8, 0xee, 0xac, 0x0a,
    0x36, 0x49, 0x2a, 0x68, 0x3c, 0x38, 0xf1, 0xa4,
    0x40, 0x28, 0xd3, 0x7b, 0xbb, 0xc9, 0x43, 0xc1,
    0x15, 0xe3, 0xad, 0xf4, 0x77, 0xc7, 0x80, 0x9e,
];

#[inline(always)]
fn s1(x: u8) -> u8 {
    SBOX1[x as usize]
}

#[inline(always)]
fn s2(x: u8) -> u8 {
    SBOX1[x as usize].rotate_left(1)
}

#[inline(always)]
fn s3(x: u8) -> u8 {
    SBOX1[x as usize].rotate_left(7)
}

#[inline(always)]
fn s4(x: u8) -> u8 {
    SBOX1[x.rotate_left(1) as usize]
}

/// The F round function: S-layer over the eight input bytes, then the
/// P-layer XOR network
fn f(input: u64, subkey: u64) -> u64 {
    let x = input ^ subkey;

    let t1 = s1((x >> 56) as u8);
    let t2 = s2((x >> 48) as u8);
    let t3 = s3((x >> 40) as u8);
    let t4 = s4((x >> 32) as u8);
    let t5 = s2((x >> 24) as u8);
    let t6 = s3((x >> 16) as u8);
    let t7 = s4((x >> 8) as u8);
    let t8 = s1(x as u8);

    let y1 = t1 ^ t3 ^ t4 ^ t6 ^ t7 ^ t8;
    let y2 = t1 ^ t2 ^ t4 ^ t5 ^ t7 ^ t8;
    let y3 = t1 ^ t2 ^ t3 ^ t5 ^ t6 ^ t8;
    let y4 = t2 ^ t3 ^ t4 ^ t5 ^ t6 ^ t7;
    let y5 = t1 ^ t2 ^ t6 ^ t7 ^ t8;
    let y6 = t2 ^ t3 ^ t5 ^ t7 ^ t8;
    let y7 = t3 ^ t4 ^ t5 ^ t6 ^ t8;
    let y8 = t1 ^ t4 ^ t5 ^ t6 ^ t7;

    ((y1 as u64) << 56)
        | ((y2 as u64) << 48)
        | ((y3 as u64) << 40)
        | ((y4 as u64) << 32)
        | ((y5 as u64) << 24)
        | ((y6 as u64) << 16)
        | ((y7 as u64) << 8)
        | (y8 as u64)
}

/// The FL diffusion layer
fn fl(input: u64, subkey: u64) -> u64 {
    let mut x1 = (input >> 32) as u32;
    let mut x2 = input as u32;
    let k1 = (subkey >> 32) as u32;
    let k2 = subkey as u32;

    x2 ^= (x1 & k1).rotate_left(1);
    x1 ^= x2 | k2;

    ((x1 as u64) << 32) | (x2 as u64)
}

/// The FL⁻¹ layer; exactly inverts [`fl`] under the same subkey
fn fl_inv(input: u64, subkey: u64) -> u64 {
    let mut y1 = (input >> 32) as u32;
    let mut y2 = input as u32;
    let k1 = (subkey >> 32) as u32;
    let k2 = subkey as u32;

    y1 ^= y2 | k2;
    y2 ^= (y1 & k1).rotate_left(1);

    ((y1 as u64) << 32) | (y2 as u64)
}

/// 128-bit circular left rotation over a (hi, lo) pair of 64-bit words
fn rotl128(hi: u64, lo: u64, n: u32) -> (u64, u64) {
    match n {
        0 => (hi, lo),
        1..=63 => (
            (hi << n) | (lo >> (64 - n)),
            (lo << n) | (hi >> (64 - n)),
        ),
        64 => (lo, hi),
        _ => rotl128(lo, hi, n - 64),
    }
}

/// Camellia block cipher
///
/// Holds the derived subkey schedule. Construction validates the key
/// length; block operations validate the buffer length and are otherwise
/// pure functions of the schedule and the block.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Camellia {
    /// Whitening keys kw1..kw4
    kw: [u64; 4],
    /// Round keys k1..k18 (128-bit keys) or k1..k24; tail unused for the
    /// short schedule
    k: [u64; 24],
    /// FL-layer keys ke1..ke4 or ke1..ke6
    ke: [u64; 6],
    rounds: usize,
}

impl CipherAlgorithm for Camellia {
    const BLOCK_SIZE: usize = CAMELLIA_BLOCK_SIZE;
    const KEY_SIZES: &'static [usize] = CAMELLIA_KEY_SIZES;

    fn name() -> &'static str {
        "Camellia"
    }
}

impl Camellia {
    /// Number of FL-layer keys in use for this schedule
    fn ke_len(&self) -> usize {
        (self.rounds / 6 - 1) * 2
    }
}

impl BlockCipher for Camellia {
    fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(Self::name(), key.len(), CAMELLIA_KEY_SIZES)?;

        let kl_hi = BigEndian::read_u64(&key[0..8]);
        let kl_lo = BigEndian::read_u64(&key[8..16]);
        let (kr_hi, kr_lo) = match key.len() {
            16 => (0, 0),
            24 => {
                let hi = BigEndian::read_u64(&key[16..24]);
                (hi, !hi)
            }
            _ => (
                BigEndian::read_u64(&key[16..24]),
                BigEndian::read_u64(&key[24..32]),
            ),
        };

        // Derive KA from KL and KR (RFC 3713 section 2.2)
        let mut d1 = kl_hi ^ kr_hi;
        let mut d2 = kl_lo ^ kr_lo;
        d2 ^= f(d1, SIGMA[0]);
        d1 ^= f(d2, SIGMA[1]);
        d1 ^= kl_hi;
        d2 ^= kl_lo;
        d2 ^= f(d1, SIGMA[2]);
        d1 ^= f(d2, SIGMA[3]);
        let (ka_hi, ka_lo) = (d1, d2);

        let kl = |n| rotl128(kl_hi, kl_lo, n);
        let ka = |n| rotl128(ka_hi, ka_lo, n);

        let mut kw = [0u64; 4];
        let mut k = [0u64; 24];
        let mut ke = [0u64; 6];

        let rounds = if key.len() == 16 {
            (kw[0], kw[1]) = kl(0);
            (kw[2], kw[3]) = ka(111);

            (k[0], k[1]) = ka(0);
            (k[2], k[3]) = kl(15);
            (k[4], k[5]) = ka(15);
            (k[6], k[7]) = kl(45);
            k[8] = ka(45).0;
            k[9] = kl(60).1;
            (k[10], k[11]) = ka(60);
            (k[12], k[13]) = kl(94);
            (k[14], k[15]) = ka(94);
            (k[16], k[17]) = kl(111);

            (ke[0], ke[1]) = ka(30);
            (ke[2], ke[3]) = kl(77);

            18
        } else {
            // Derive KB for the longer key tiers
            let mut d1 = ka_hi ^ kr_hi;
            let mut d2 = ka_lo ^ kr_lo;
            d2 ^= f(d1, SIGMA[4]);
            d1 ^= f(d2, SIGMA[5]);
            let (kb_hi, kb_lo) = (d1, d2);

            let kr = |n| rotl128(kr_hi, kr_lo, n);
            let kb = |n| rotl128(kb_hi, kb_lo, n);

            (kw[0], kw[1]) = kl(0);
            (kw[2], kw[3]) = kb(111);

            (k[0], k[1]) = kb(0);
            (k[2], k[3]) = kr(15);
            (k[4], k[5]) = ka(15);
            (k[6], k[7]) = kb(30);
            (k[8], k[9]) = kl(45);
            (k[10], k[11]) = ka(45);
            (k[12], k[13]) = kr(60);
            (k[14], k[15]) = kb(60);
            (k[16], k[17]) = kl(77);
            (k[18], k[19]) = kr(94);
            (k[20], k[21]) = ka(94);
            (k[22], k[23]) = kl(111);

            (ke[0], ke[1]) = kr(30);
            (ke[2], ke[3]) = kl(60);
            (ke[4], ke[5]) = ka(77);

            24
        };

        Ok(Camellia { kw, k, ke, rounds })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length(Self::name(), block.len(), CAMELLIA_BLOCK_SIZE)?;

        let mut d1 = BigEndian::read_u64(&block[0..8]) ^ self.kw[0];
        let mut d2 = BigEndian::read_u64(&block[8..16]) ^ self.kw[1];

        for i in 0..self.rounds {
            if i % 2 == 0 {
                d2 ^= f(d1, self.k[i]);
            } else {
                d1 ^= f(d2, self.k[i]);
            }

            if (i + 1) % 6 == 0 && i + 1 != self.rounds {
                let layer = (i + 1) / 6 - 1;
                d1 = fl(d1, self.ke[2 * layer]);
                d2 = fl_inv(d2, self.ke[2 * layer + 1]);
            }
        }

        // Halves swap at the end (RFC 3713 section 2.1)
        BigEndian::write_u64(&mut block[0..8], d2 ^ self.kw[2]);
        BigEndian::write_u64(&mut block[8..16], d1 ^ self.kw[3]);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length(Self::name(), block.len(), CAMELLIA_BLOCK_SIZE)?;

        // Same network as encryption with the whitening pairs swapped and
        // the round and FL keys read in reverse (RFC 3713 section 2.3)
        let mut d1 = BigEndian::read_u64(&block[0..8]) ^ self.kw[2];
        let mut d2 = BigEndian::read_u64(&block[8..16]) ^ self.kw[3];

        let rounds = self.rounds;
        let ke_len = self.ke_len();

        for i in 0..rounds {
            if i % 2 == 0 {
                d2 ^= f(d1, self.k[rounds - 1 - i]);
            } else {
                d1 ^= f(d2, self.k[rounds - 1 - i]);
            }

            if (i + 1) % 6 == 0 && i + 1 != rounds {
                let layer = (i + 1) / 6 - 1;
                d1 = fl(d1, self.ke[ke_len - 1 - 2 * layer]);
                d2 = fl_inv(d2, self.ke[ke_len - 2 - 2 * layer]);
            }
        }

        BigEndian::write_u64(&mut block[0..8], d2 ^ self.kw[0]);
        BigEndian::write_u64(&mut block[8..16], d1 ^ self.kw[1]);
        Ok(())
    }
}
