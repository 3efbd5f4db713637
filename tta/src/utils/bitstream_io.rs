//! Bitstream I/O utilities for TTA decoding.
//!
//! TTA packs its Rice codes least-significant bit first. Every byte handed to
//! the bit reader passes through a [`ChecksumReader`], which folds it into a
//! running CRC-32 and counts it, so the header, the seek table and each frame
//! can be validated against their trailing checksum.

use std::io;
use std::io::SeekFrom;

use bitstream_io::{BitRead, BitReader, LittleEndian};

use crate::utils::crc::CRC32;

/// Byte source that tracks the CRC-32 and count of every byte it yields.
///
/// An optional byte budget makes the source report end-of-stream once the
/// budget is spent, which bounds how far a corrupted frame can read.
#[derive(Debug)]
pub struct ChecksumReader<R> {
    inner: R,
    crc: u32,
    count: u32,
    budget: Option<u32>,
    exhausted: bool,
}

impl<R> ChecksumReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            crc: CRC32.init,
            count: 0,
            budget: None,
            exhausted: false,
        }
    }

    /// Restarts the checksum and byte count. The budget is cleared as well.
    pub fn reset(&mut self) {
        self.crc = CRC32.init;
        self.count = 0;
        self.budget = None;
        self.exhausted = false;
    }

    /// Finalized CRC-32 of the bytes read since the last reset.
    pub fn crc(&self) -> u32 {
        CRC32.finalize(self.crc)
    }

    /// Number of bytes read since the last reset.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_budget(&mut self, budget: Option<u32>) {
        self.budget = budget;
        self.exhausted = false;
    }

    /// Whether a read was refused because the budget was spent.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: io::Read> io::Read for ChecksumReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let limit = match self.budget {
            Some(budget) => {
                let left = budget.saturating_sub(self.count) as usize;
                if left == 0 && !buf.is_empty() {
                    self.exhausted = true;
                    return Ok(0);
                }
                left.min(buf.len())
            }
            None => buf.len(),
        };

        let read = self.inner.read(&mut buf[..limit])?;
        self.crc = CRC32.update(self.crc, &buf[..read]);
        self.count = self.count.wrapping_add(read as u32);

        Ok(read)
    }
}

impl<R: io::Seek> io::Seek for ChecksumReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Result of comparing a running checksum against a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcCheck {
    pub calculated: u32,
    pub read: u32,
}

impl CrcCheck {
    pub fn is_valid(&self) -> bool {
        self.calculated == self.read
    }
}

#[derive(Debug)]
pub struct BitstreamIoReader<R: io::Read + io::Seek> {
    bs: BitReader<ChecksumReader<R>, LittleEndian>,
}

impl<R> BitstreamIoReader<R>
where
    R: io::Read + io::Seek,
{
    pub fn new(read: R) -> Self {
        Self {
            bs: BitReader::new(ChecksumReader::new(read)),
        }
    }

    /// Reads a run of 1-bits terminated by a 0-bit and returns its length.
    #[inline(always)]
    pub fn get_unary(&mut self) -> io::Result<u32> {
        self.bs.read_unary::<0>()
    }

    #[inline(always)]
    pub fn get_n(&mut self, n: u32) -> io::Result<u32> {
        match n {
            0 => Ok(0),
            1..=32 => self.bs.read_var(n),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("get_n({n}): Rice parameter out of range"),
            )),
        }
    }

    #[inline(always)]
    pub fn get_bytes<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.bs.read_bytes(&mut buf)?;
        Ok(buf)
    }

    #[inline(always)]
    pub fn get_u16_le(&mut self) -> io::Result<u16> {
        self.get_bytes().map(u16::from_le_bytes)
    }

    #[inline(always)]
    pub fn get_u32_le(&mut self) -> io::Result<u32> {
        self.get_bytes().map(u32::from_le_bytes)
    }

    /// Drops any partial byte and compares the running checksum with the
    /// little-endian CRC-32 that follows.
    pub fn read_crc32(&mut self) -> io::Result<CrcCheck> {
        let calculated = self.checksum_reader().crc();
        let read = self.get_u32_le()?;

        Ok(CrcCheck { calculated, read })
    }

    /// Restarts checksum, byte count and bit alignment.
    pub fn reset(&mut self) {
        self.checksum_reader().reset();
    }

    /// Bytes consumed since the last reset. Drops any partial byte.
    pub fn consumed(&mut self) -> u32 {
        self.checksum_reader().count()
    }

    /// Limits the bytes available until the next reset.
    pub fn set_budget(&mut self, budget: Option<u32>) {
        self.checksum_reader().set_budget(budget);
    }

    pub fn budget_exhausted(&mut self) -> bool {
        self.checksum_reader().is_exhausted()
    }

    /// Repositions the underlying stream to an absolute byte offset.
    pub fn seek(&mut self, offset: u64) -> io::Result<()> {
        self.bs.seek_bits(SeekFrom::Start(offset << 3))?;
        Ok(())
    }

    /// Absolute byte position of the next whole byte.
    pub fn position(&mut self) -> io::Result<u64> {
        self.bs.position_in_bits().map(|bits| bits.div_ceil(8))
    }

    /// Skips an ID3v2 tag if one starts at the current position and returns
    /// the number of bytes skipped.
    pub fn skip_id3v2(&mut self) -> io::Result<u64> {
        let start = self.position()?;

        let tag: [u8; 3] = match self.get_bytes() {
            Ok(tag) => tag,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => [0; 3],
            Err(e) => return Err(e),
        };

        if &tag != b"ID3" {
            self.seek(start)?;
            return Ok(0);
        }

        let [_major, _revision, flags] = self.get_bytes()?;
        let size_bytes: [u8; 4] = self.get_bytes()?;
        let mut size = size_bytes
            .iter()
            .fold(0u64, |acc, &b| (acc << 7) | (b & 0x7F) as u64);

        if flags & 0x10 != 0 {
            size += 10;
        }

        self.seek(start + 10 + size)?;

        Ok(10 + size)
    }

    fn checksum_reader(&mut self) -> &mut ChecksumReader<R> {
        self.bs.aligned_reader()
    }

    pub fn into_inner(self) -> R {
        self.bs.into_reader().into_inner()
    }
}

impl<'a> BitstreamIoReader<io::Cursor<&'a [u8]>> {
    pub fn from_slice(buf: &'a [u8]) -> Self {
        Self::new(io::Cursor::new(buf))
    }
}
