//! Stream header.
//!
//! ```text
//! offset  size  field
//!      0     4  magic "TTA1"
//!      4     2  format (1 = plain, 2 = encrypted)
//!      6     2  channel count
//!      8     2  bits per sample
//!     10     4  sample rate
//!     14     4  total samples per channel
//!     18     4  CRC-32 of bytes 0..18
//! ```
//!
//! All fields are little-endian.

use std::fmt::Display;
use std::io;

use anyhow::{Result, bail};

use crate::utils::bitstream_io::BitstreamIoReader;
use crate::utils::errors::HeaderError;

pub const MAGIC: [u8; 4] = *b"TTA1";
pub const HEADER_SIZE: u64 = 22;

pub const MAX_CHANNELS: usize = 6;
pub const MIN_BPS: u16 = 16;
pub const MAX_BPS: u16 = 24;
pub const MAX_SAMPLE_RATE: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain = 1,
    Encrypted = 2,
}

impl TryFrom<u16> for Format {
    type Error = HeaderError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Format::Plain),
            2 => Ok(Format::Encrypted),
            _ => Err(HeaderError::UnsupportedFormat(value)),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Encrypted => write!(f, "encrypted"),
        }
    }
}

/// Parsed and validated stream header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub format: Format,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_rate: u32,
    /// Samples per channel.
    pub samples: u32,
}

impl StreamInfo {
    /// Reads the header at the current position and validates it.
    ///
    /// The reader must have been reset at the start of the header so the
    /// running checksum covers the magic.
    pub fn read<R: io::Read + io::Seek>(reader: &mut BitstreamIoReader<R>) -> Result<Self> {
        let magic = reader.get_bytes::<4>()?;
        if magic != MAGIC {
            bail!(HeaderError::InvalidMagic(magic));
        }

        let format = reader.get_u16_le()?;
        let channels = reader.get_u16_le()?;
        let bits_per_sample = reader.get_u16_le()?;
        let sample_rate = reader.get_u32_le()?;
        let samples = reader.get_u32_le()?;

        let check = reader.read_crc32()?;
        if !check.is_valid() {
            bail!(HeaderError::ChecksumMismatch {
                calculated: check.calculated,
                read: check.read,
            });
        }

        let format = Format::try_from(format)?;

        if !(MIN_BPS..=MAX_BPS).contains(&bits_per_sample) {
            bail!(HeaderError::UnsupportedBitsPerSample {
                actual: bits_per_sample,
                min: MIN_BPS,
                max: MAX_BPS,
            });
        }

        if channels == 0 || channels as usize > MAX_CHANNELS {
            bail!(HeaderError::UnsupportedChannelCount {
                actual: channels,
                max: MAX_CHANNELS as u16,
            });
        }

        if !(1..=MAX_SAMPLE_RATE).contains(&sample_rate) {
            bail!(HeaderError::InvalidSampleRate {
                actual: sample_rate,
                max: MAX_SAMPLE_RATE,
            });
        }

        Ok(Self {
            format,
            channels,
            bits_per_sample,
            sample_rate,
            samples,
        })
    }

    /// Bytes per output sample.
    pub fn depth(&self) -> u32 {
        (self.bits_per_sample as u32).div_ceil(8)
    }

    /// Bytes per interleaved time-step across all channels.
    pub fn block_align(&self) -> usize {
        self.depth() as usize * self.channels as usize
    }

    /// Total PCM payload size in bytes.
    pub fn pcm_len(&self) -> u64 {
        self.samples as u64 * self.block_align() as u64
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples as f64 / self.sample_rate as f64
    }

    pub fn is_encrypted(&self) -> bool {
        self.format == Format::Encrypted
    }
}

#[cfg(test)]
pub(crate) fn header_bytes(
    format: u16,
    channels: u16,
    bits_per_sample: u16,
    sample_rate: u32,
    samples: u32,
) -> Vec<u8> {
    let mut bytes = MAGIC.to_vec();
    bytes.extend_from_slice(&format.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&bits_per_sample.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&samples.to_le_bytes());
    let crc = crate::utils::crc::CRC32.checksum(&bytes);
    bytes.extend_from_slice(&crc.to_le_bytes());
    bytes
}
