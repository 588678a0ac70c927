//! The drive authentication protocol: challenge/response exchange, variant
//! resolution, bus key derivation and disk/title key acquisition.
//!
//! The device transport (the ioctl channel on a real system) is abstracted
//! behind [`AuthChannel`] and [`StructureChannel`]; this module plays the
//! host role and sequences the exchange. Frames cross the trait boundary in
//! drive wire order (least significant byte first) and are reversed here,
//! exactly where the reference host implementation did.

use std::io;

use crate::descramble::descramble;
use crate::engine::{crypt_bus_key, crypt_key1, crypt_key2};
use crate::titlekey::decrypt_title_key;
use crate::{
    Block, Challenge, Error, KeyClass, CHALLENGE_SIZE, DISK_KEY_SIZE, KEY_SIZE, SECTOR_SIZE,
};

/// Authentication grant id handed out by the drive (AGID, 0..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub u8);

/// What the drive reports back for the host's key2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum AuthStatus {
    #[strum(serialize = "established")]
    Established,
    #[strum(serialize = "rejected")]
    Failed,
}

/// The drive's authentication command channel.
///
/// An implementation forwards each call to the physical drive; tests script
/// one in memory. Key and challenge frames are in wire order.
pub trait AuthChannel {
    /// Probe whether the device exposes the authentication channel at all.
    /// `false` means an unencrypted source, not a failure.
    fn probe(&mut self) -> bool;
    fn open_session(&mut self) -> io::Result<SessionId>;
    fn invalidate_session(&mut self, session: SessionId);
    fn send_challenge(&mut self, session: SessionId, challenge: &Challenge) -> io::Result<()>;
    fn receive_key1(&mut self, session: SessionId) -> io::Result<Block>;
    fn receive_challenge(&mut self, session: SessionId) -> io::Result<Challenge>;
    fn send_key2(&mut self, session: SessionId, key2: &Block) -> io::Result<AuthStatus>;
}

/// Raw key-structure reads, protected on the wire by the bus key.
pub trait StructureChannel {
    fn read_disk_key(&mut self, session: SessionId) -> io::Result<Box<[u8; DISK_KEY_SIZE]>>;
    fn read_title_key(&mut self, session: SessionId, lba: u32) -> io::Result<Block>;
}

const GRANT_TRIES: u32 = 3;

/// Per-disc session state, owned by exactly one acquisition at a time.
struct CssContext {
    challenge: Challenge,
    key1: Block,
    key2: Block,
    bus_key: Block,
    variant: Option<u8>,
    title_key: Block,
    disk_key: Box<[u8; DISK_KEY_SIZE]>,
}

impl CssContext {
    fn new() -> Self {
        CssContext {
            challenge: Challenge::default(),
            key1: Block::default(),
            key2: Block::default(),
            bus_key: Block::default(),
            variant: None,
            title_key: Block::default(),
            disk_key: Box::new([0; DISK_KEY_SIZE]),
        }
    }

    /// Host step: produce the initial challenge (bytes set to their own
    /// index, as in the reference) and its wire form.
    fn host_challenge(&mut self) -> Challenge {
        let mut wire = Challenge::default();
        for (i, byte) in self.challenge.0.iter_mut().enumerate() {
            *byte = i as u8;
            wire.0[CHALLENGE_SIZE - 1 - i] = *byte;
        }
        wire
    }

    /// Host step: take the drive's key1 off the wire and brute-force the
    /// cipher variant against it.
    fn host_verify_key1(&mut self, wire: &Block) -> Result<u8, Error> {
        for i in 0..KEY_SIZE {
            self.key1.0[i] = wire.0[KEY_SIZE - 1 - i];
        }
        self.variant = (0..32).find(|&v| crypt_key1(v, &self.challenge) == self.key1);
        let variant = self.variant.ok_or(Error::VariantResolution)?;
        log::debug!("resolved cipher variant {variant}");
        Ok(variant)
    }

    /// Host step: answer the drive's challenge with key2, in wire form.
    fn host_key2(&mut self, variant: u8, wire: &Challenge) -> Block {
        for i in 0..CHALLENGE_SIZE {
            self.challenge.0[i] = wire.0[CHALLENGE_SIZE - 1 - i];
        }
        self.key2 = crypt_key2(variant, &self.challenge);

        let mut out = Block::default();
        for i in 0..KEY_SIZE {
            out.0[KEY_SIZE - 1 - i] = self.key2.0[i];
        }
        out
    }

    /// Host step: both sides agreed, derive the bus key from key1 + key2.
    fn derive_bus_key(&mut self, variant: u8) {
        self.challenge.0[..KEY_SIZE].copy_from_slice(&self.key1.0);
        self.challenge.0[KEY_SIZE..].copy_from_slice(&self.key2.0);
        self.bus_key = crypt_bus_key(variant, &self.challenge);
    }

    /// One full authentication pass against the drive, fetching the key
    /// structure named by `class` at the end. Returns `false` when the
    /// device has no authentication channel (an unencrypted source).
    fn validate<D>(&mut self, drive: &mut D, class: KeyClass, lba: u32) -> Result<bool, Error>
    where
        D: AuthChannel + StructureChannel,
    {
        if !drive.probe() {
            log::debug!("no authentication channel, treating source as unencrypted");
            return Ok(false);
        }

        let mut session = None;
        for attempt in 1..=GRANT_TRIES {
            match drive.open_session() {
                Ok(id) => {
                    session = Some(id);
                    break;
                }
                Err(err) => {
                    log::debug!("session grant attempt {attempt} failed: {err}");
                    // a stuck pending grant blocks further requests
                    drive.invalidate_session(SessionId(0));
                }
            }
        }
        let session = session.ok_or(Error::SessionGrant(GRANT_TRIES))?;

        let wire = self.host_challenge();
        drive.send_challenge(session, &wire)?;

        let key1 = drive.receive_key1(session)?;
        let variant = self.host_verify_key1(&key1)?;

        let drive_challenge = drive.receive_challenge(session)?;
        let key2 = self.host_key2(variant, &drive_challenge);
        let status = drive.send_key2(session, &key2)?;
        log::debug!("key2 exchange {status}");
        if status == AuthStatus::Failed {
            return Err(Error::DriveAuth);
        }

        self.derive_bus_key(variant);

        // some drives want the channel probed again before structure reads
        let _ = drive.probe();

        match class {
            KeyClass::Disk => {
                let mut buf = drive
                    .read_disk_key(session)
                    .map_err(|source| Error::StructureRead { class, source })?;
                for (i, byte) in buf.iter_mut().enumerate() {
                    *byte ^= self.bus_key.0[4 - i % KEY_SIZE];
                }
                self.disk_key = buf;
            }
            KeyClass::Title => {
                let mut key = drive
                    .read_title_key(session, lba)
                    .map_err(|source| Error::StructureRead { class, source })?;
                for (i, byte) in key.0.iter_mut().enumerate() {
                    *byte ^= self.bus_key.0[4 - i % KEY_SIZE];
                }
                self.title_key = key;
            }
        }

        Ok(true)
    }
}

/// A resolved title key.
///
/// Only a successful [`acquire_keys`] produces one, so descrambling can
/// never run against unresolved key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleKey(Block);

impl TitleKey {
    /// Descramble one 2048-byte sector in place. `offset` is the count of
    /// leading sector bytes the caller has already consumed.
    pub fn descramble_sector(&self, sector: &mut [u8; SECTOR_SIZE], offset: usize) {
        descramble(sector, &self.0 .0, offset);
    }
}

/// Whether a source needs descrambling, and the key to do it with.
#[derive(Debug)]
pub enum EncryptionState {
    Unencrypted,
    Encrypted(TitleKey),
}

impl EncryptionState {
    pub fn is_encrypted(&self) -> bool {
        matches!(self, EncryptionState::Encrypted(_))
    }

    /// Descramble one sector in place; a no-op for unencrypted sources.
    pub fn descramble_sector(&self, sector: &mut [u8; SECTOR_SIZE], offset: usize) {
        match self {
            EncryptionState::Unencrypted => {}
            EncryptionState::Encrypted(key) => key.descramble_sector(sector, offset),
        }
    }
}

/// Authenticate with the drive and recover the title key for the title at
/// `lba`.
///
/// Runs the handshake twice, once for the disk key and once for the title
/// key, then decrypts the title key against the built-in player keys. A
/// device whose very first probe finds no authentication channel is an
/// unencrypted source; any failure past that probe, including the channel
/// going away between the two passes, aborts with its typed error and
/// leaves nothing descrambleable behind.
pub fn acquire_keys<D>(drive: &mut D, lba: u32) -> Result<EncryptionState, Error>
where
    D: AuthChannel + StructureChannel,
{
    let mut ctx = CssContext::new();

    if !ctx.validate(drive, KeyClass::Disk, 0)? {
        return Ok(EncryptionState::Unencrypted);
    }
    // the channel answered the disk key pass, so it cannot be absent now
    if !ctx.validate(drive, KeyClass::Title, lba)? {
        return Err(Error::ChannelLost);
    }

    let title_key = decrypt_title_key(&ctx.disk_key, &ctx.title_key)?;
    Ok(EncryptionState::Encrypted(TitleKey(title_key)))
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn host_challenge_is_fixed_and_reversed_on_wire() {
        let mut ctx = CssContext::new();
        let wire = ctx.host_challenge();
        assert_eq!(ctx.challenge, Challenge([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert_eq!(wire, Challenge([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]));
    }

    #[test]
    fn key1_resolves_variant() {
        let mut ctx = CssContext::new();
        ctx.host_challenge();
        let variant = ctx.host_verify_key1(&Block(hex!("8aba11e9eb"))).unwrap();
        assert_eq!(variant, 7);
        assert_eq!(ctx.key1, Block(hex!("ebe911ba8a")));
    }

    #[test]
    fn unmatched_key1_fails_resolution() {
        let mut ctx = CssContext::new();
        ctx.host_challenge();
        let err = ctx.host_verify_key1(&Block(hex!("ffffffffff"))).unwrap_err();
        assert!(matches!(err, Error::VariantResolution));
        assert_eq!(ctx.variant, None);
    }

    #[test]
    fn bus_key_from_exchanged_keys() {
        let mut ctx = CssContext::new();
        ctx.key1 = Block(hex!("ebe911ba8a"));
        ctx.key2 = Block(hex!("aa8e1a1924"));
        ctx.derive_bus_key(7);
        assert_eq!(ctx.bus_key, Block(hex!("3d050d1009")));
    }
}
