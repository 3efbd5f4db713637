//! Seek table.
//!
//! Directly after the header the encoder stores the byte length of every
//! frame as a little-endian `u32`, followed by a CRC-32 over those entries.
//! The table is turned into absolute frame offsets. A table that fails its
//! checksum is discarded and the stream can only be decoded sequentially.

use std::io;

use anyhow::Result;
use log::{debug, warn};

use crate::utils::bitstream_io::BitstreamIoReader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekTable {
    offsets: Vec<u64>,
    sizes: Vec<u32>,
}

impl SeekTable {
    /// Size in bytes of a table for `frames` frames, checksum included.
    pub fn byte_len(frames: u32) -> u64 {
        (frames as u64 + 1) * 4
    }

    /// Reads the table that starts at `table_offset`, the byte following the
    /// header. Returns `None` if the table is unusable; the reader is left
    /// after the table either way.
    pub fn read<R: io::Read + io::Seek>(
        reader: &mut BitstreamIoReader<R>,
        table_offset: u64,
        frames: u32,
    ) -> Result<Option<Self>> {
        let data_offset = table_offset + Self::byte_len(frames);

        let mut sizes = Vec::new();
        let mut offsets = Vec::new();
        if sizes.try_reserve_exact(frames as usize).is_err()
            || offsets.try_reserve_exact(frames as usize).is_err()
        {
            warn!("Cannot allocate a seek table for {frames} frames, seeking disabled");
            reader.seek(data_offset)?;
            reader.reset();
            return Ok(None);
        }

        reader.reset();

        let mut offset = data_offset;
        for _ in 0..frames {
            let size = reader.get_u32_le()?;
            offsets.push(offset);
            sizes.push(size);
            offset += size as u64;
        }

        let check = reader.read_crc32()?;
        reader.reset();

        if !check.is_valid() {
            warn!(
                "Seek table CRC mismatch. Calculated {:#010X}, Read {:#010X}. Seeking disabled",
                check.calculated, check.read
            );
            return Ok(None);
        }

        debug!("Seek table with {frames} frames, data ends at byte {offset}");

        Ok(Some(Self { offsets, sizes }))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Absolute byte offset of frame `index`.
    pub fn offset(&self, index: u32) -> Option<u64> {
        self.offsets.get(index as usize).copied()
    }

    /// Byte length of frame `index`, checksum included.
    pub fn frame_size(&self, index: u32) -> Option<u32> {
        self.sizes.get(index as usize).copied()
    }
}
