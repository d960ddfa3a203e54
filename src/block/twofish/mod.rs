//! Twofish block cipher
//!
//! This module implements the Twofish block cipher (Schneier et al.) for
//! 128-, 192- and 256-bit keys: 16 Feistel rounds over four 32-bit words,
//! with key-dependent S-boxes and an MDS diffusion matrix in the g
//! function and a pseudo-Hadamard transform combining the two g outputs
//! with the round subkeys.
//!
//! Building the schedule precomputes the full byte-substitution path of
//! each of the four S-boxes fused with its MDS matrix column, so the g
//! function at block time is four table lookups and three XORs.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};

/// Twofish block size in bytes
pub const TWOFISH_BLOCK_SIZE: usize = 16;

/// Key sizes in bytes accepted by [`Twofish::new`]
pub const TWOFISH_KEY_SIZES: &[usize] = &[16, 24, 32];

const ROUNDS: usize = 16;

/// Subkey generation constant ρ = 2²⁴ + 2¹⁶ + 2⁸ + 1
const RHO: u32 = 0x0101_0101;

/// Feedback byte of the MDS field polynomial x⁸ + x⁶ + x⁵ + x³ + 1
const MDS_POLY: u8 = 0x69;

/// Feedback byte of the RS field polynomial x⁸ + x⁶ + x³ + x² + 1
const RS_POLY: u8 = 0x4D;

const MDS: [[u8; 4]; 4] = [
    [0x01, 0xEF, 0x5B, 0x5B],
    [0x5B, 0xEF, 0xEF, 0x01],
    [0xEF, 0x5B, 0x01, 0xEF],
    [0xEF, 0x01, 0xEF, 0x5B],
];

const RS: [[u8; 8]; 4] = [
    [0x01, 0xA4, 0x55, 0x87, 0x5A, 0x58, 0xDB, 0x9E],
    [0xA4, 0x56, 0x82, 0xF3, 0x1E, 0xC6, 0x68, 0xE5],
    [0x02, 0xA1, 0xFC, 0xC1, 0x47, 0xAE, 0x3D, 0x19],
    [0xA4, 0x55, 0x87, 0x5A, 0x58, 0xDB, 0x9E, 0x03],
];

/// Builds a q permutation from its four 4-bit tables, following the
/// nibble network in the Twofish specification
const fn build_q(t: [[u8; 16]; 4]) -> [u8; 256] {
    let mut q = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        let a0 = (x >> 4) as u8;
        let b0 = (x & 0xF) as u8;
        let a1 = a0 ^ b0;
        let b1 = (a0 ^ ((b0 >> 1) | ((b0 << 3) & 0xF)) ^ ((a0 << 3) & 0xF)) & 0xF;
        let a2 = t[0][a1 as usize];
        let b2 = t[1][b1 as usize];
        let a3 = a2 ^ b2;
        let b3 = (a2 ^ ((b2 >> 1) | ((b2 << 3) & 0xF)) ^ ((a2 << 3) & 0xF)) & 0xF;
        let a4 = t[2][a3 as usize];
        let b4 = t[3][b3 as usize];
        q[x] = (b4 << 4) | a4;
        x += 1;
    }
    q
}

static Q0: [u8; 256] = build_q([
    [0x8, 0x1, 0x7, 0xD, 0x6, 0xF, 0x3, 0x2, 0x0, 0xB, 0x5, 0x9, 0xE, 0xC, 0xA, 0x4],
    [0xE, 0xC, 0xB, 0x8, 0x1, 0x2, 0x3, 0x5, 0xF, 0x4, 0xA, 0x6, 0x7, 0x0, 0x9, 0xD],
    [0xB, 0xA, 0x5, 0xE, 0x6, 0xD, 0x9, 0x0, 0xC, 0x8, 0xF, 0x3, 0x2, 0x4, 0x7, 0x1],
    [0xD, 0x7, 0xF, 0x4, 0x1, 0x2, 0x6, 0xE, 0x9, 0xB, 0x3, 0x0, 0x8, 0x5, 0xC, 0xA],
]);

static Q1: [u8; 256] = build_q([
    [0x2, 0x8, 0xB, 0xD, 0xF, 0x7, 0x6, 0xE, 0x3, 0x1, 0x9, 0x4, 0x0, 0xA, 0xC, 0x5],
    [0x1, 0xE, 0x2, 0xB, 0x4, 0xC, 0x3, 0x7, 0x6, 0xD, 0xA, 0x5, 0xF, 0x9, 0x0, 0x8],
    [0x4, 0xC, 0x7, 0x5, 0x1, 0x6, 0x9, 0xA, 0x0, 0xE, 0xD, 0x8, 0x2, 0xB, 0x3, 0xF],
    [0xB, 0x9, 0x5, 0x1, 0xC, 0x3, 0xD, 0xE, 0x6, 0x4, 0x7, 0xF, 0x2, 0x0, 0x8, 0xA],
]);

#[inline(always)]
fn q0(x: u8) -> u8 {
    Q0[x as usize]
}

#[inline(always)]
fn q1(x: u8) -> u8 {
    Q1[x as usize]
}

/// Multiply two bytes in GF(2⁸) under the given reduction polynomial
#[inline(always)]
fn gf_mul(a: u8, b: u8, poly: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * poly;
        b >>= 1;
    }
    p
}

#[inline(always)]
fn key_byte(word: u32, i: usize) -> u8 {
    (word >> (8 * i)) as u8
}

/// The byte-substitution stage of the h function
///
/// `l` holds the key words with `l[0]` applied outermost; its length (2,
/// 3 or 4) selects how many q stages run, per the key-length tier.
fn h_bytes(x: [u8; 4], l: &[u32]) -> [u8; 4] {
    let mut y = x;

    if l.len() == 4 {
        y[0] = q1(y[0]) ^ key_byte(l[3], 0);
        y[1] = q0(y[1]) ^ key_byte(l[3], 1);
        y[2] = q0(y[2]) ^ key_byte(l[3], 2);
        y[3] = q1(y[3]) ^ key_byte(l[3], 3);
    }
    if l.len() >= 3 {
        y[0] = q1(y[0]) ^ key_byte(l[2], 0);
        y[1] = q1(y[1]) ^ key_byte(l[2], 1);
        y[2] = q0(y[2]) ^ key_byte(l[2], 2);
        y[3] = q0(y[3]) ^ key_byte(l[2], 3);
    }

    y[0] = q1(q0(q0(y[0]) ^ key_byte(l[1], 0)) ^ key_byte(l[0], 0));
    y[1] = q0(q0(q1(y[1]) ^ key_byte(l[1], 1)) ^ key_byte(l[0], 1));
    y[2] = q1(q1(q0(y[2]) ^ key_byte(l[1], 2)) ^ key_byte(l[0], 2));
    y[3] = q0(q1(q1(y[3]) ^ key_byte(l[1], 3)) ^ key_byte(l[0], 3));

    y
}

/// One column of the MDS matrix applied to a substituted byte
fn mds_column(col: usize, y: u8) -> u32 {
    let mut out = 0u32;
    for row in 0..4 {
        out |= (gf_mul(MDS[row][col], y, MDS_POLY) as u32) << (8 * row);
    }
    out
}

/// The full h function: byte substitution then MDS multiply
fn h(x: u32, l: &[u32]) -> u32 {
    let y = h_bytes(x.to_le_bytes(), l);
    mds_column(0, y[0]) ^ mds_column(1, y[1]) ^ mds_column(2, y[2]) ^ mds_column(3, y[3])
}

/// Reed-Solomon encode of one 8-byte key chunk into an S-box key word
fn rs_encode(chunk: &[u8]) -> u32 {
    let mut out = 0u32;
    for row in 0..4 {
        let mut z = 0u8;
        for (col, &b) in chunk.iter().enumerate() {
            z ^= gf_mul(RS[row][col], b, RS_POLY);
        }
        out |= (z as u32) << (8 * row);
    }
    out
}

/// Twofish block cipher
///
/// Holds the 40 expanded subkey words and the four key-dependent S-box
/// tables (fused with the MDS columns), all derived once by [`new`] and
/// zeroized on drop.
///
/// [`new`]: BlockCipher::new
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Twofish {
    /// K[0..4] input whitening, K[4..8] output whitening, K[8..40] round keys
    subkeys: [u32; 40],
    sbox: [[u32; 256]; 4],
}

impl CipherAlgorithm for Twofish {
    const BLOCK_SIZE: usize = TWOFISH_BLOCK_SIZE;
    const KEY_SIZES: &'static [usize] = TWOFISH_KEY_SIZES;

    fn name() -> &'static str {
        "Twofish"
    }
}

impl Twofish {
    /// The g function over the precomputed key-dependent tables
    #[inline(always)]
    fn g(&self, x: u32) -> u32 {
        let b = x.to_le_bytes();
        self.sbox[0][b[0] as usize]
            ^ self.sbox[1][b[1] as usize]
            ^ self.sbox[2][b[2] as usize]
            ^ self.sbox[3][b[3] as usize]
    }
}

impl BlockCipher for Twofish {
    fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(Self::name(), key.len(), TWOFISH_KEY_SIZES)?;

        // Split the key into even words, odd words and the RS-encoded
        // S-box words; s holds S_{k-1} first, the order g consumes
        let k64 = key.len() / 8;
        let mut me = [0u32; 4];
        let mut mo = [0u32; 4];
        let mut s = [0u32; 4];
        for i in 0..k64 {
            me[i] = LittleEndian::read_u32(&key[8 * i..8 * i + 4]);
            mo[i] = LittleEndian::read_u32(&key[8 * i + 4..8 * i + 8]);
            s[k64 - 1 - i] = rs_encode(&key[8 * i..8 * i + 8]);
        }
        let me = &me[..k64];
        let mo = &mo[..k64];
        let s = &s[..k64];

        // 40 subkey words via the pseudo-Hadamard transform
        let mut subkeys = [0u32; 40];
        for i in 0..20 {
            let a = h((2 * i as u32).wrapping_mul(RHO), me);
            let b = h((2 * i as u32 + 1).wrapping_mul(RHO), mo).rotate_left(8);
            subkeys[2 * i] = a.wrapping_add(b);
            subkeys[2 * i + 1] = a.wrapping_add(b.wrapping_mul(2)).rotate_left(9);
        }

        // Key-dependent S-boxes, fused with the MDS columns
        let mut sbox = [[0u32; 256]; 4];
        for x in 0..256usize {
            let y = h_bytes([x as u8; 4], s);
            for col in 0..4 {
                sbox[col][x] = mds_column(col, y[col]);
            }
        }

        Ok(Twofish { subkeys, sbox })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length(Self::name(), block.len(), TWOFISH_BLOCK_SIZE)?;

        let mut x = [0u32; 4];
        for (i, word) in x.iter_mut().enumerate() {
            *word = LittleEndian::read_u32(&block[4 * i..4 * i + 4]) ^ self.subkeys[i];
        }

        for r in 0..ROUNDS {
            let t0 = self.g(x[0]);
            let t1 = self.g(x[1].rotate_left(8));
            let f0 = t0.wrapping_add(t1).wrapping_add(self.subkeys[8 + 2 * r]);
            let f1 = t0
                .wrapping_add(t1.wrapping_mul(2))
                .wrapping_add(self.subkeys[9 + 2 * r]);

            x[2] = (x[2] ^ f0).rotate_right(1);
            x[3] = x[3].rotate_left(1) ^ f1;

            // Halves swap between rounds, not after the last
            if r != ROUNDS - 1 {
                x.swap(0, 2);
                x.swap(1, 3);
            }
        }

        for (i, &word) in x.iter().enumerate() {
            LittleEndian::write_u32(&mut block[4 * i..4 * i + 4], word ^ self.subkeys[4 + i]);
        }
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length(Self::name(), block.len(), TWOFISH_BLOCK_SIZE)?;

        let mut x = [0u32; 4];
        for (i, word) in x.iter_mut().enumerate() {
            *word = LittleEndian::read_u32(&block[4 * i..4 * i + 4]) ^ self.subkeys[4 + i];
        }

        // Identical round structure with the traversal reversed and the
        // 1-bit rotations inverted
        for r in (0..ROUNDS).rev() {
            let t0 = self.g(x[0]);
            let t1 = self.g(x[1].rotate_left(8));
            let f0 = t0.wrapping_add(t1).wrapping_add(self.subkeys[8 + 2 * r]);
            let f1 = t0
                .wrapping_add(t1.wrapping_mul(2))
                .wrapping_add(self.subkeys[9 + 2 * r]);

            x[2] = x[2].rotate_left(1) ^ f0;
            x[3] = (x[3] ^ f1).rotate_right(1);

            if r != 0 {
                x.swap(0, 2);
                x.swap(1, 3);
            }
        }

        for (i, &word) in x.iter().enumerate() {
            LittleEndian::write_u32(&mut block[4 * i..4 * i + 4], word ^ self.subkeys[i]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
