//! Content Scrambling System (CSS) for DVD-Video: drive authentication,
//! disk/title key recovery and sector descrambling.
//!
//! The device itself is abstracted behind two traits ([`AuthChannel`],
//! [`StructureChannel`]); everything cryptographic lives here. A typical
//! caller authenticates once per disc with [`acquire_keys`] and then feeds
//! 2048-byte sectors through [`EncryptionState::descramble_sector`].

mod auth;
mod descramble;
mod engine;
mod error;
mod tables;
mod titlekey;

pub use {auth::*, error::*};

/// One DVD sector.
pub const SECTOR_SIZE: usize = 2048;
/// Size of the disk key structure read from the drive.
pub const DISK_KEY_SIZE: usize = 2048;
/// Every CSS key is 40 bits.
pub const KEY_SIZE: usize = 5;
/// Authentication challenges are two keys back to back.
pub const CHALLENGE_SIZE: usize = 10;

/// A 5-byte CSS value: key1, key2, bus key or title key.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct Block(pub [u8; KEY_SIZE]);

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Block({})", hex::encode(self.0))
    }
}

/// A 10-byte authentication challenge.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct Challenge(pub [u8; CHALLENGE_SIZE]);

impl std::fmt::Debug for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Challenge({})", hex::encode(self.0))
    }
}

/// Which key structure an acquisition pass fetches from the drive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display)]
pub enum KeyClass {
    #[strum(serialize = "disk key")]
    Disk,
    #[strum(serialize = "title key")]
    Title,
}
