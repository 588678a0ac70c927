//! Title key derivation: the dual-LFSR mix shared with the sector
//! descrambler, and recovery of the title key from a disk key structure via
//! the built-in player keys.

use crate::tables::{BIT_REVERSE, LFSR1_BITS_HI, LFSR1_BITS_LO, MANGLE, PLAYER_KEYS};
use crate::{Block, Error, DISK_KEY_SIZE, KEY_SIZE};

/// The LFSR pair driving both the title-key mix and sector descrambling.
///
/// Distinct from the block cipher's generator: a 17-bit register split into
/// a 9-bit low and 8-bit high half stepped through lookup tables, and a
/// 32-bit register holding the 25-bit LFSR in bit-reversed byte order.
pub(crate) struct KeyLfsr {
    lo: u32,
    hi: u32,
    lfsr0: u32,
}

impl KeyLfsr {
    pub fn seed(seed: &[u8; KEY_SIZE]) -> Self {
        let lo = seed[0] as u32 | 0x100;
        let hi = seed[1] as u32;

        let lfsr0 = ((seed[4] as u32) << 17 | (seed[3] as u32) << 9 | (seed[2] as u32) << 1)
            + 8
            - (seed[2] & 7) as u32;
        let lfsr0 = (BIT_REVERSE[(lfsr0 & 0xff) as usize] as u32) << 24
            | (BIT_REVERSE[(lfsr0 >> 8) as usize & 0xff] as u32) << 16
            | (BIT_REVERSE[(lfsr0 >> 16) as usize & 0xff] as u32) << 8
            | BIT_REVERSE[(lfsr0 >> 24) as usize & 0xff] as u32;

        KeyLfsr { lo, hi, lfsr0 }
    }

    /// Advance both registers one step, returning their feedback bytes.
    pub fn step(&mut self) -> (u8, u8) {
        let mut o_lfsr1 = LFSR1_BITS_HI[self.hi as usize] ^ LFSR1_BITS_LO[self.lo as usize];
        self.hi = self.lo >> 1;
        self.lo = ((self.lo & 1) << 8) ^ o_lfsr1 as u32;
        o_lfsr1 = BIT_REVERSE[o_lfsr1 as usize];

        let l = self.lfsr0;
        // taps at bits 7, 10, 11 and 19 of the byte-reversed register
        let o_lfsr0 = ((((((l >> 8) ^ l) >> 1 ^ l) >> 3 ^ l) >> 7) & 0xff) as u8;
        self.lfsr0 = (l >> 8) | (o_lfsr0 as u32) << 24;

        (o_lfsr0, o_lfsr1)
    }
}

/// Mix `key` in place under `seed`.
///
/// Five generator rounds produce one combined byte each (feedback of both
/// registers, XORed with `invert`, with the carry accumulating across
/// rounds), then the five bytes are folded into `key` through two passes of
/// the mangle table. Both directions of the title-key transform are this one
/// function; `invert` is 0 to encrypt a verification value and 0xff to
/// decrypt.
pub(crate) fn mix_key(key: &mut [u8; KEY_SIZE], seed: &[u8; KEY_SIZE], invert: u8) {
    let mut lfsr = KeyLfsr::seed(seed);
    let mut combined: u32 = 0;
    let mut k = [0u8; KEY_SIZE];
    for slot in k.iter_mut() {
        let (o_lfsr0, o_lfsr1) = lfsr.step();
        combined += (o_lfsr0 ^ invert) as u32 + o_lfsr1 as u32;
        *slot = combined as u8;
        combined >>= 8;
    }

    key[4] = k[4] ^ MANGLE[key[4] as usize] ^ key[3];
    key[3] = k[3] ^ MANGLE[key[3] as usize] ^ key[2];
    key[2] = k[2] ^ MANGLE[key[2] as usize] ^ key[1];
    key[1] = k[1] ^ MANGLE[key[1] as usize] ^ key[0];
    key[0] = k[0] ^ MANGLE[key[0] as usize] ^ key[4];

    key[4] = k[4] ^ MANGLE[key[4] as usize] ^ key[3];
    key[3] = k[3] ^ MANGLE[key[3] as usize] ^ key[2];
    key[2] = k[2] ^ MANGLE[key[2] as usize] ^ key[1];
    key[1] = k[1] ^ MANGLE[key[1] as usize] ^ key[0];
    key[0] = k[0] ^ MANGLE[key[0] as usize];
}

/// Recover the title key from the disk key structure.
///
/// Each player key candidate extracts a pre-title key from its slot in the
/// disk key; the candidate is confirmed by re-encrypting the head of the
/// disk key under the pre-title key and comparing. The first confirmed
/// candidate decrypts `title_key`; if none verifies the disc cannot be
/// unlocked with the keys we know.
pub(crate) fn decrypt_title_key(
    disk_key: &[u8; DISK_KEY_SIZE],
    title_key: &Block,
) -> Result<Block, Error> {
    for (i, candidate) in PLAYER_KEYS.iter().enumerate() {
        let mut pre = [0u8; KEY_SIZE];
        pre.copy_from_slice(&disk_key[candidate.offset..candidate.offset + KEY_SIZE]);
        mix_key(&mut pre, &candidate.key, 0);

        let mut check = [0u8; KEY_SIZE];
        check.copy_from_slice(&disk_key[..KEY_SIZE]);
        mix_key(&mut check, &pre, 0);

        if check == pre {
            log::debug!("player key {i} confirmed");
            let mut key = title_key.0;
            mix_key(&mut key, &pre, 0xff);
            return Ok(Block(key));
        }
    }

    Err(Error::NoMatchingPlayerKey)
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn mix_known_vectors() {
        let seed = hex!("516767c5e0");
        let mut key = hex!("1122334455");
        mix_key(&mut key, &seed, 0);
        assert_eq!(key, hex!("ffb5072946"));

        let mut key = hex!("1122334455");
        mix_key(&mut key, &seed, 0xff);
        assert_eq!(key, hex!("a058727ba3"));
    }

    #[test]
    fn recovers_title_key_from_fixture() {
        let disk_key: &[u8; DISK_KEY_SIZE] =
            include_bytes!("../tests/fixtures/disk_key_plain.bin");
        let title_key = decrypt_title_key(disk_key, &Block(hex!("9a3c5e7012"))).unwrap();
        assert_eq!(title_key, Block(hex!("81603650e7")));
    }

    #[test]
    fn every_player_key_unlocks_its_own_structure() {
        // One synthetic disk key structure per built-in key: the shared
        // verification head plus a slot at that key's offset holding the
        // same pre-title key under that key, everything else zero. Keys
        // sharing an offset get distinct slot bytes, so in each structure
        // only its own candidate verifies.
        const HEAD: [u8; KEY_SIZE] = hex!("85f66914df");
        const SLOTS: [[u8; KEY_SIZE]; 10] = [
            hex!("b6dd43505d"),
            hex!("249f9fa3a5"),
            hex!("81ea44a6a2"),
            hex!("b6dd43505d"),
            hex!("249f9fa3a5"),
            hex!("81ea44a6a2"),
            hex!("b6dd43505d"),
            hex!("81ea44a6a2"),
            hex!("7abd4522dd"),
            hex!("22930809ac"),
        ];

        for (candidate, slot) in PLAYER_KEYS.iter().zip(SLOTS) {
            let mut disk_key = [0u8; DISK_KEY_SIZE];
            disk_key[..KEY_SIZE].copy_from_slice(&HEAD);
            disk_key[candidate.offset..candidate.offset + KEY_SIZE].copy_from_slice(&slot);
            let title_key = decrypt_title_key(&disk_key, &Block(hex!("9a3c5e7012"))).unwrap();
            assert_eq!(title_key, Block(hex!("7f18c178bb")));
        }
    }

    #[test]
    fn rejects_unknown_disk_key() {
        let disk_key = [0u8; DISK_KEY_SIZE];
        let err = decrypt_title_key(&disk_key, &Block(hex!("9a3c5e7012"))).unwrap_err();
        assert!(matches!(err, Error::NoMatchingPlayerKey));
    }
}
