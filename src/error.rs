use crate::KeyClass;

#[derive(thiserror::Error)]
pub enum Error {
    #[error("drive did not grant an auth session after {0} attempts")]
    SessionGrant(u32),

    #[error("no cipher variant of 32 matched the drive's key1")]
    VariantResolution,

    #[error("drive rejected key2")]
    DriveAuth,

    #[error("auth channel disappeared after the disk key pass")]
    ChannelLost,

    #[error("{class} structure read failed: {source}")]
    StructureRead {
        class: KeyClass,
        source: std::io::Error,
    },

    #[error("no known player key unlocks this disc")]
    NoMatchingPlayerKey,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
