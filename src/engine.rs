//! The CSS block cipher and its keystream generator.
//!
//! Two LFSRs (seeded from the input) generate streams of pseudo-random bits
//! which are combined by adding with carry. The first LFSR is of degree 25
//! (x^13 + x^5 + x^4 + x^1 + 1), the second of degree 17 (x^15 + x^1 + 1).
//! The output of each LFSR is the newly shifted-in bit, not the shifted-out
//! one, so both are run in bit-reversed order.
//!
//! On top of the generator sits a 40-bit block cipher with 32 selectable
//! variants, used for the drive handshake (key1/key2/bus key). Each of the
//! three handshake transforms reorders the challenge bytes through a fixed
//! permutation first; the reordering differs per transform and two of them
//! also remap the variant index.

use crate::tables::{SECRET, TAB0, TAB1, TAB2, TAB3, VARIANTS};
use crate::{Block, Challenge, CHALLENGE_SIZE, KEY_SIZE};

/// Fill `output` with pseudo-random bytes derived from a 5-byte seed.
///
/// The buffer is filled back to front: the last byte holds the first eight
/// generated bits. Bits are packed LSB-first within each byte.
pub(crate) fn generate_bits(seed: &[u8; KEY_SIZE], output: &mut [u8]) {
    // Force a bit set in each register so neither LFSR can start at zero.
    let mut lfsr0: u32 = (seed[0] as u32) << 17
        | (seed[1] as u32) << 9
        | ((seed[2] & !7) as u32) << 1
        | 8
        | (seed[2] & 7) as u32;
    let mut lfsr1: u32 = (seed[3] as u32) << 9 | 0x100 | seed[4] as u32;

    let mut carry = 0u8;
    for byte in output.iter_mut().rev() {
        let mut val = 0u8;
        for bit in 0..8 {
            let o_lfsr0 = ((lfsr0 >> 24) ^ (lfsr0 >> 21) ^ (lfsr0 >> 20) ^ (lfsr0 >> 12)) as u8 & 1;
            lfsr0 = (lfsr0 << 1) | o_lfsr0 as u32;

            let o_lfsr1 = ((lfsr1 >> 16) ^ (lfsr1 >> 2)) as u8 & 1;
            lfsr1 = (lfsr1 << 1) | o_lfsr1 as u32;

            let combined = (o_lfsr1 ^ 1) + carry + (o_lfsr0 ^ 1);
            carry = (combined >> 1) & 1;
            val |= (combined & 1) << bit;
        }
        *byte = val;
    }
}

/// Encrypt a 40-bit value under one of 32 variants.
///
/// `input` is 80 bits: the 40-bit value to transform followed by a 40-bit
/// seed for the keystream generator. Six 5-byte substitution rounds, each
/// consuming a 5-byte slice of the keystream high-to-low; the middle two
/// rounds push the result through one more table layer.
pub(crate) fn engine(variant: u8, input: &[u8; CHALLENGE_SIZE]) -> [u8; KEY_SIZE] {
    let mut seed = [0u8; KEY_SIZE];
    for i in 0..KEY_SIZE {
        seed[i] = input[KEY_SIZE + i] ^ SECRET[i] ^ TAB2[i];
    }
    let mut bits = [0u8; 30];
    generate_bits(&seed, &mut bits);

    // selects one of the 32 variations on the algorithm
    let cse = VARIANTS[variant as usize] ^ TAB2[variant as usize];

    let round = |bits: &[u8], src: &[u8; KEY_SIZE], deep: bool| -> [u8; KEY_SIZE] {
        let mut dst = [0u8; KEY_SIZE];
        let mut term = 0u8;
        for i in (0..KEY_SIZE).rev() {
            let mut index = (bits[i] ^ src[i]) as usize;
            index = (TAB1[index] ^ !TAB2[index] ^ cse) as usize;
            if deep {
                index = (TAB2[index] ^ TAB3[index] ^ term) as usize;
                dst[i] = TAB0[index] ^ TAB2[index];
            } else {
                dst[i] = TAB2[index] ^ TAB3[index] ^ term;
            }
            term = src[i];
        }
        dst
    };

    let mut value = [0u8; KEY_SIZE];
    value.copy_from_slice(&input[..KEY_SIZE]);

    let mut a = round(&bits[25..], &value, false);
    a[4] ^= a[0];
    let mut b = round(&bits[20..25], &a, false);
    b[4] ^= b[0];
    let mut a = round(&bits[15..20], &b, true);
    a[4] ^= a[0];
    let mut b = round(&bits[10..15], &a, true);
    b[4] ^= b[0];
    let mut a = round(&bits[5..10], &b, false);
    a[4] ^= a[0];
    round(&bits[..5], &a, false)
}

/// Compute the host's check value for the drive's key1.
pub(crate) fn crypt_key1(variant: u8, challenge: &Challenge) -> Block {
    const PERM_CHALLENGE: [usize; CHALLENGE_SIZE] = [1, 3, 0, 7, 5, 2, 9, 6, 4, 8];

    let mut scratch = [0u8; CHALLENGE_SIZE];
    for i in 0..CHALLENGE_SIZE {
        scratch[i] = challenge.0[PERM_CHALLENGE[i]];
    }
    Block(engine(variant, &scratch))
}

/// Compute key2, the host's answer to the drive's challenge.
///
/// The variant bits are shuffled such that
/// ```text
///               4 -> !3
///               3 ->  4
/// variant bits: 2 ->  0  remapped variant bits
///               1 ->  2
///               0 -> !1
/// ```
pub(crate) fn crypt_key2(variant: u8, challenge: &Challenge) -> Block {
    const PERM_CHALLENGE: [usize; CHALLENGE_SIZE] = [6, 1, 9, 3, 8, 5, 7, 4, 0, 2];
    const PERM_VARIANT: [u8; 32] = [
        0x0a, 0x08, 0x0e, 0x0c, 0x0b, 0x09, 0x0f, 0x0d, 0x1a, 0x18, 0x1e, 0x1c, 0x1b, 0x19, 0x1f,
        0x1d, 0x02, 0x00, 0x06, 0x04, 0x03, 0x01, 0x07, 0x05, 0x12, 0x10, 0x16, 0x14, 0x13, 0x11,
        0x17, 0x15,
    ];

    let mut scratch = [0u8; CHALLENGE_SIZE];
    for i in 0..CHALLENGE_SIZE {
        scratch[i] = challenge.0[PERM_CHALLENGE[i]];
    }
    Block(engine(PERM_VARIANT[variant as usize], &scratch))
}

/// Derive the bus key from key1 and key2.
///
/// The variant bits are shuffled such that
/// ```text
///               4 ->  0
///               3 -> !1
/// variant bits: 2 -> !4  remapped variant bits
///               1 ->  2
///               0 ->  3
/// ```
pub(crate) fn crypt_bus_key(variant: u8, challenge: &Challenge) -> Block {
    const PERM_CHALLENGE: [usize; CHALLENGE_SIZE] = [4, 0, 3, 5, 7, 2, 8, 6, 1, 9];
    const PERM_VARIANT: [u8; 32] = [
        0x12, 0x1a, 0x16, 0x1e, 0x02, 0x0a, 0x06, 0x0e, 0x10, 0x18, 0x14, 0x1c, 0x00, 0x08, 0x04,
        0x0c, 0x13, 0x1b, 0x17, 0x1f, 0x03, 0x0b, 0x07, 0x0f, 0x11, 0x19, 0x15, 0x1d, 0x01, 0x09,
        0x05, 0x0d,
    ];

    let mut scratch = [0u8; CHALLENGE_SIZE];
    for i in 0..CHALLENGE_SIZE {
        scratch[i] = challenge.0[PERM_CHALLENGE[i]];
    }
    Block(engine(PERM_VARIANT[variant as usize], &scratch))
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn keystream_known_vectors() {
        let mut out = [0u8; 10];
        generate_bits(&[0x51, 0x67, 0x67, 0xc5, 0xe0], &mut out);
        assert_eq!(out, hex!("dfdae23db9f74d72a926"));

        let mut out = [0u8; 8];
        generate_bits(&[0; 5], &mut out);
        assert_eq!(out, hex!("cbef684e5907b4fe"));
    }

    #[test]
    fn keystream_is_deterministic() {
        let seed = [0x12, 0x34, 0x56, 0x78, 0x9a];
        let mut a = [0u8; 30];
        let mut b = [0u8; 30];
        generate_bits(&seed, &mut a);
        generate_bits(&seed, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn engine_known_vectors() {
        assert_eq!(engine(0, &[0; 10]), hex!("b7ce4b19c7"));
        assert_eq!(engine(31, &[0; 10]), hex!("764945f19b"));
        assert_eq!(
            engine(0, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
            hex!("f4b066d3e1")
        );
    }

    #[test]
    fn engine_injective_spot_check() {
        let mut outputs = std::collections::HashSet::new();
        for x in 0..8u8 {
            let input = [x, 0, 0, 0, 0, 0, 0, 0, 0, 0];
            assert!(outputs.insert(engine(0, &input)));
        }
    }

    #[test]
    fn permuter_known_vectors() {
        let zero = Challenge::default();
        assert_eq!(crypt_key1(0, &zero), Block(hex!("b7ce4b19c7")));
        assert_eq!(crypt_key2(0, &zero), Block(hex!("4f7d3e5b7b")));
        assert_eq!(crypt_bus_key(0, &zero), Block(hex!("9c255c4307")));
    }

    #[test]
    fn key1_for_fixed_challenge() {
        let challenge = Challenge([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(crypt_key1(7, &challenge), Block(hex!("ebe911ba8a")));
    }
}
