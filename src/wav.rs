use std::io::{self, BufWriter, Seek, SeekFrom, Write};

use ttadec_macros::{ToBytes, riff_chunk};

pub const WAVE_FORMAT_PCM: u16 = 1;

pub trait RiffChunk {
    fn chunk_id(&self) -> &[u8; 4];
    fn chunk_data(&self) -> Vec<u8>;

    fn write_all<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.chunk_id())?;

        let chunk_data = self.chunk_data();
        writer.write_all(&(chunk_data.len() as u32).to_le_bytes())?;
        writer.write_all(&chunk_data)?;
        if chunk_data.len() % 2 == 1 {
            writer.write_all(&[0])?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, ToBytes)]
#[riff_chunk(b"fmt ")]
pub struct FormatChunk {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FormatChunk {
    /// Integer PCM with samples stored in `(bits_per_sample + 7) / 8` bytes.
    /// A byte rate beyond `u32` is clamped.
    pub fn pcm(sample_rate: u32, channels: u16, bits_per_sample: u16) -> Self {
        let block_align = channels * bits_per_sample.div_ceil(8);
        Self {
            format_tag: WAVE_FORMAT_PCM,
            channels,
            sample_rate,
            byte_rate: clamp_u32(sample_rate as u64 * block_align as u64),
            block_align,
            bits_per_sample,
        }
    }
}

/// RIFF/WAVE writer for interleaved little-endian PCM.
///
/// Chunk sizes are patched in [`WAVWriter::finish`]. Payloads over 4 GiB
/// cannot be described by RIFF; their sizes are written as `u32::MAX`.
pub struct WAVWriter<W: Write + Seek> {
    writer: BufWriter<W>,
    format: FormatChunk,
    riff_size_position: u64,
    data_size_position: u64,
    data_written: u64,
}

impl<W: Write + Seek> WAVWriter<W> {
    pub fn new(writer: W, format: FormatChunk) -> Self {
        Self {
            writer: BufWriter::new(writer),
            format,
            riff_size_position: 0,
            data_size_position: 0,
            data_written: 0,
        }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(b"RIFF")?;
        self.riff_size_position = self.writer.stream_position()?;
        self.writer.write_all(&0u32.to_le_bytes())?;
        self.writer.write_all(b"WAVE")?;

        self.format.write_all(&mut self.writer)?;

        self.writer.write_all(b"data")?;
        self.data_size_position = self.writer.stream_position()?;
        self.writer.write_all(&0u32.to_le_bytes())?;

        Ok(())
    }

    pub fn write_pcm(&mut self, pcm: &[u8]) -> io::Result<()> {
        self.writer.write_all(pcm)?;
        self.data_written += pcm.len() as u64;
        Ok(())
    }

    /// Pads the data chunk and fills in the chunk sizes.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.data_written % 2 == 1 {
            self.writer.write_all(&[0])?;
        }

        let end = self.writer.stream_position()?;

        if self.data_written > u32::MAX as u64 {
            log::warn!(
                "{} bytes of PCM exceed the RIFF size limit, chunk sizes are clamped",
                self.data_written
            );
        }

        self.writer.seek(SeekFrom::Start(self.data_size_position))?;
        self.writer
            .write_all(&clamp_u32(self.data_written).to_le_bytes())?;

        self.writer.seek(SeekFrom::Start(self.riff_size_position))?;
        self.writer
            .write_all(&clamp_u32(end - self.riff_size_position - 4).to_le_bytes())?;

        self.writer.seek(SeekFrom::Start(end))?;
        self.writer.flush()
    }

    pub fn data_written(&self) -> u64 {
        self.data_written
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

fn clamp_u32(value: u64) -> u32 {
    value.min(u32::MAX as u64) as u32
}
