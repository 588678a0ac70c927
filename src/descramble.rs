//! In-place descrambling of 2048-byte sectors under a resolved title key.

use crate::tables::MANGLE;
use crate::titlekey::KeyLfsr;
use crate::{KEY_SIZE, SECTOR_SIZE};

/// Position of the key salt within an unshifted sector.
const SALT_POS: usize = 0x54;
/// First scrambled byte of an unshifted sector.
const SCRAMBLE_START: usize = 0x80;

/// Descramble `sector` in place.
///
/// `offset` is how many leading bytes of the sector the caller has already
/// consumed; the salt and scrambled region shift down accordingly. Offsets
/// past the salt position indicate a confused caller: they are logged and
/// clamped rather than rejected.
pub(crate) fn descramble(sector: &mut [u8; SECTOR_SIZE], key: &[u8; KEY_SIZE], offset: usize) {
    let offset = if offset > SALT_POS {
        log::warn!("descramble offset {offset:#x} exceeds {SALT_POS:#x}, clamping");
        SALT_POS
    } else {
        offset
    };

    let mut salted = [0u8; KEY_SIZE];
    for i in 0..KEY_SIZE {
        salted[i] = key[i] ^ sector[SALT_POS - offset + i];
    }

    let mut lfsr = KeyLfsr::seed(&salted);
    let mut combined: u32 = 0;
    for byte in &mut sector[SCRAMBLE_START - offset..SECTOR_SIZE - offset] {
        let (o_lfsr0, o_lfsr1) = lfsr.step();
        combined += o_lfsr0 as u32 + (!o_lfsr1) as u32;
        *byte = MANGLE[*byte as usize] ^ combined as u8;
        combined >>= 8;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    const TITLE_KEY: [u8; KEY_SIZE] = hex!("81603650e7");

    fn scrambled() -> [u8; SECTOR_SIZE] {
        *include_bytes!("../tests/fixtures/scrambled_sector.bin")
    }

    #[test]
    fn descrambles_fixture_sector() {
        let mut sector = scrambled();
        descramble(&mut sector, &TITLE_KEY, 0);
        assert_eq!(
            &sector[..],
            &include_bytes!("../tests/fixtures/plain_sector.bin")[..]
        );
    }

    #[test]
    fn is_not_an_involution() {
        // pure decryption: applying it twice does not restore the input
        let mut sector = scrambled();
        descramble(&mut sector, &TITLE_KEY, 0);
        descramble(&mut sector, &TITLE_KEY, 0);
        assert_ne!(&sector[..], &scrambled()[..]);
    }

    #[test]
    fn honors_offset() {
        let mut sector = scrambled();
        descramble(&mut sector, &TITLE_KEY, 4);
        assert_eq!(sector[0x7c..0x84], hex!("9ac069775e61ec75"));
    }

    #[test]
    fn tolerates_out_of_range_offset() {
        let mut sector = scrambled();
        descramble(&mut sector, &TITLE_KEY, 0x1ff);
    }
}
