#[macro_export]
macro_rules! log_or_err {
    ($state:expr, $level:expr, $err:expr $(,)?) => {{
        if $level <= $state.fail_level {
            return Err($err.into());
        } else {
            match $level {
                ::log::Level::Error => ::log::error!("{}", $err),
                ::log::Level::Warn => ::log::warn!("{}", $err),
                ::log::Level::Info => ::log::info!("{}", $err),
                ::log::Level::Debug => ::log::debug!("{}", $err),
                ::log::Level::Trace => ::log::trace!("{}", $err),
            }
        }
    }};
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Invalid stream magic. Read {0:02X?}, expected \"TTA1\"")]
    InvalidMagic([u8; 4]),

    #[error("Header CRC mismatch. Calculated {calculated:#010X}, Read {read:#010X}")]
    ChecksumMismatch { calculated: u32, read: u32 },

    #[error("Unsupported format: {0} (expected 1 = plain or 2 = encrypted)")]
    UnsupportedFormat(u16),

    #[error("bits_per_sample must be between {min} and {max}. Read {actual}")]
    UnsupportedBitsPerSample { actual: u16, min: u16, max: u16 },

    #[error("channel count must be between 1 and {max}. Read {actual}")]
    UnsupportedChannelCount { actual: u16, max: u16 },

    #[error("sample rate must be between 1 and {max} Hz. Read {actual}")]
    InvalidSampleRate { actual: u32, max: u32 },

    #[error("Stream is encrypted but no password was supplied")]
    MissingPassword,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SeekError {
    #[error("Stream has no valid seek table")]
    Unavailable,

    #[error("Seek target frame {frame} is out of range (stream has {frames} frames)")]
    OutOfRange { frame: u32, frames: u32 },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("CRC mismatch in frame {frame}")]
    FrameChecksumMismatch { frame: u32 },
}
