use std::io;

use hex_literal::hex;
use recss::{
    acquire_keys, AuthChannel, AuthStatus, Block, Challenge, Error, KeyClass, SessionId,
    StructureChannel, DISK_KEY_SIZE, SECTOR_SIZE,
};

// Handshake fixtures for cipher variant 7, captured from a reference run.
const KEY1_WIRE: [u8; 5] = hex!("8aba11e9eb");
const DRIVE_CHALLENGE_WIRE: [u8; 10] = hex!("69788796a5b4c3d2e1f0");
const KEY2_WIRE: [u8; 5] = hex!("24191a8eaa");
const TITLE_KEY_STRUCT_WIRE: [u8; 5] = hex!("932c53752f");

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// In-memory drive scripted with canned wire frames, recording what the
/// host sends it.
struct ScriptedDrive {
    // how many probes report an authentication channel before it vanishes
    channel_probes: u32,
    grants_session: bool,
    key1_wire: [u8; 5],
    rejects_key2: bool,
    fails_structure_reads: bool,

    probes: u32,
    opened: u32,
    invalidated: u32,
    challenges_seen: Vec<Challenge>,
    key2_seen: Option<Block>,
    lba_seen: Option<u32>,
}

impl ScriptedDrive {
    fn good() -> Self {
        ScriptedDrive {
            channel_probes: u32::MAX,
            grants_session: true,
            key1_wire: KEY1_WIRE,
            rejects_key2: false,
            fails_structure_reads: false,
            probes: 0,
            opened: 0,
            invalidated: 0,
            challenges_seen: Vec::new(),
            key2_seen: None,
            lba_seen: None,
        }
    }
}

impl AuthChannel for ScriptedDrive {
    fn probe(&mut self) -> bool {
        self.probes += 1;
        self.probes <= self.channel_probes
    }

    fn open_session(&mut self) -> io::Result<SessionId> {
        self.opened += 1;
        if self.grants_session {
            Ok(SessionId(1))
        } else {
            Err(io::Error::new(io::ErrorKind::Other, "drive busy"))
        }
    }

    fn invalidate_session(&mut self, _session: SessionId) {
        self.invalidated += 1;
    }

    fn send_challenge(&mut self, _session: SessionId, challenge: &Challenge) -> io::Result<()> {
        self.challenges_seen.push(*challenge);
        Ok(())
    }

    fn receive_key1(&mut self, _session: SessionId) -> io::Result<Block> {
        Ok(Block(self.key1_wire))
    }

    fn receive_challenge(&mut self, _session: SessionId) -> io::Result<Challenge> {
        Ok(Challenge(DRIVE_CHALLENGE_WIRE))
    }

    fn send_key2(&mut self, _session: SessionId, key2: &Block) -> io::Result<AuthStatus> {
        self.key2_seen = Some(*key2);
        Ok(if self.rejects_key2 {
            AuthStatus::Failed
        } else {
            AuthStatus::Established
        })
    }
}

impl StructureChannel for ScriptedDrive {
    fn read_disk_key(&mut self, _session: SessionId) -> io::Result<Box<[u8; DISK_KEY_SIZE]>> {
        if self.fails_structure_reads {
            return Err(io::Error::new(io::ErrorKind::Other, "read failed"));
        }
        Ok(Box::new(*include_bytes!("fixtures/disk_key_struct.bin")))
    }

    fn read_title_key(&mut self, _session: SessionId, lba: u32) -> io::Result<Block> {
        self.lba_seen = Some(lba);
        if self.fails_structure_reads {
            return Err(io::Error::new(io::ErrorKind::Other, "read failed"));
        }
        Ok(Block(TITLE_KEY_STRUCT_WIRE))
    }
}

#[test]
fn missing_channel_means_unencrypted() {
    init();
    let mut drive = ScriptedDrive {
        channel_probes: 0,
        ..ScriptedDrive::good()
    };
    let state = acquire_keys(&mut drive, 0).unwrap();
    assert!(!state.is_encrypted());
    // the handshake never started
    assert_eq!(drive.opened, 0);
    assert!(drive.challenges_seen.is_empty());

    // descrambling an unencrypted source is a no-op
    let scrambled = include_bytes!("fixtures/scrambled_sector.bin");
    let mut sector: [u8; SECTOR_SIZE] = *scrambled;
    state.descramble_sector(&mut sector, 0);
    assert_eq!(&sector[..], &scrambled[..]);
}

#[test]
fn channel_lost_between_passes_is_fatal() {
    init();
    // the channel answers the disk key pass (its probe plus the structure
    // re-probe) and is gone when the title key pass starts
    let mut drive = ScriptedDrive {
        channel_probes: 2,
        ..ScriptedDrive::good()
    };
    let err = acquire_keys(&mut drive, 0).unwrap_err();
    assert!(matches!(err, Error::ChannelLost));
    assert_eq!(drive.opened, 1);
}

#[test]
fn session_grant_exhausts_retries() {
    init();
    let mut drive = ScriptedDrive {
        grants_session: false,
        ..ScriptedDrive::good()
    };
    let err = acquire_keys(&mut drive, 0).unwrap_err();
    assert!(matches!(err, Error::SessionGrant(3)));
    assert_eq!(drive.opened, 3);
    assert_eq!(drive.invalidated, 3);
}

#[test]
fn unmatched_key1_fails_variant_resolution() {
    init();
    let mut drive = ScriptedDrive {
        key1_wire: [0xff; 5],
        ..ScriptedDrive::good()
    };
    let err = acquire_keys(&mut drive, 0).unwrap_err();
    assert!(matches!(err, Error::VariantResolution));
}

#[test]
fn rejected_key2_fails_authentication() {
    init();
    let mut drive = ScriptedDrive {
        rejects_key2: true,
        ..ScriptedDrive::good()
    };
    let err = acquire_keys(&mut drive, 0).unwrap_err();
    assert!(matches!(err, Error::DriveAuth));
}

#[test]
fn failing_structure_read_is_fatal() {
    init();
    let mut drive = ScriptedDrive {
        fails_structure_reads: true,
        ..ScriptedDrive::good()
    };
    let err = acquire_keys(&mut drive, 0).unwrap_err();
    assert!(matches!(
        err,
        Error::StructureRead {
            class: KeyClass::Disk,
            ..
        }
    ));
}

#[test]
fn full_handshake_recovers_title_key() {
    init();
    let mut drive = ScriptedDrive::good();
    let state = acquire_keys(&mut drive, 0x1234).unwrap();
    assert!(state.is_encrypted());

    // host sent the fixed initial challenge, twice (one pass per key class)
    let expected = Challenge([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(drive.challenges_seen, vec![expected, expected]);
    assert_eq!(drive.key2_seen, Some(Block(KEY2_WIRE)));
    assert_eq!(drive.lba_seen, Some(0x1234));

    // same title key as the reference run
    assert!(format!("{state:?}").contains("81603650e7"));

    // and it descrambles the captured sector back to the known plaintext
    let mut sector: [u8; SECTOR_SIZE] = *include_bytes!("fixtures/scrambled_sector.bin");
    state.descramble_sector(&mut sector, 0);
    assert_eq!(
        &sector[..],
        &include_bytes!("fixtures/plain_sector.bin")[..]
    );
}
