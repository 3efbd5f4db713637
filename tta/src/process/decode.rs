use std::io;

use anyhow::{Result, bail};
use log::{debug, warn};

use crate::log_or_err;
use crate::structs::channel::ChannelCodec;
use crate::structs::decorrelation::recorrelate;
use crate::structs::filter::filter_shift;
use crate::structs::geometry::FrameGeometry;
use crate::structs::header::{Format, HEADER_SIZE, MAX_CHANNELS, StreamInfo};
use crate::structs::key::KeyMaterial;
use crate::structs::seek_table::SeekTable;
use crate::utils::bitstream_io::BitstreamIoReader;
use crate::utils::errors::{DecodeError, HeaderError, SeekError};

/// Where the decoding session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Frames remain to be decoded.
    Decoding,
    /// Every frame has been decoded.
    Finished,
    /// A corrupted frame was found and no seek table is available to
    /// resynchronize. Only a successful seek leaves this state.
    Halted,
}

/// Whether the samples of a [`DecodedChunk`] can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkStatus {
    Intact,
    /// A frame that ended in this chunk failed its checksum. The whole output
    /// buffer was zeroed.
    Muted,
}

/// Result of one decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedChunk {
    /// Time-steps written, each holding one sample per channel.
    pub samples: usize,
    /// Bytes written to the output buffer.
    pub bytes: usize,
    pub status: ChunkStatus,
}

/// Reported after every verified frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Approximate bitrate of the last frame in kbit/s.
    pub rate: u32,
    /// Frames completed so far.
    pub frame: u32,
    pub frames: u32,
}

/// Termination bound of the inner decode loop.
#[derive(Debug, Clone, Copy)]
enum Bound {
    /// Stop when the output buffer is full or the stream ends.
    OutputFull,
    /// Stop at the end of the current frame, which may not read more than
    /// this many bytes including its checksum.
    FrameBytes(u32),
}

/// Decoding session over one TTA1 stream.
///
/// Reads the header and seek table at open, then turns frames into
/// interleaved little-endian PCM with either [`process_stream`] or
/// [`process_frame`]. Frames that fail their checksum, or run past the size
/// the seek table gives them, are muted and, if a seek table is present,
/// decoding resumes at the next frame.
///
/// [`process_stream`]: Decoder::process_stream
/// [`process_frame`]: Decoder::process_frame
pub struct Decoder<R: io::Read + io::Seek> {
    reader: BitstreamIoReader<R>,
    info: StreamInfo,
    geometry: FrameGeometry,
    seek_table: Option<SeekTable>,
    key: KeyMaterial,
    channels: Vec<ChannelCodec>,
    state: SessionState,
    frame_index: u32,
    frame_pos: u32,
    frame_len: u32,
    rate: u32,
    data_offset: u64,
    fail_level: log::Level,
}

impl<R: io::Read + io::Seek> Decoder<R> {
    /// Opens a stream at the reader's current position. The password is
    /// required for encrypted streams and ignored for plain ones.
    pub fn open(reader: R, password: Option<&str>) -> Result<Self> {
        Self::open_with_key(reader, password.map(KeyMaterial::from_password))
    }

    /// Like [`Decoder::open`] with key material supplied directly.
    pub fn open_with_key(reader: R, key: Option<KeyMaterial>) -> Result<Self> {
        let mut reader = BitstreamIoReader::new(reader);

        let start = reader.position()?;
        let tag_len = reader.skip_id3v2()?;
        if tag_len > 0 {
            debug!("Skipped {tag_len} byte ID3v2 tag");
        }

        reader.reset();
        let info = StreamInfo::read(&mut reader)?;

        let key = match (info.format, key) {
            (Format::Encrypted, Some(key)) => key,
            (Format::Encrypted, None) => bail!(HeaderError::MissingPassword),
            (Format::Plain, Some(_)) => {
                debug!("Stream is not encrypted, ignoring password");
                KeyMaterial::default()
            }
            (Format::Plain, None) => KeyMaterial::default(),
        };

        debug!(
            "TTA1 {} stream: {} ch, {} bit, {} Hz, {} samples",
            info.format, info.channels, info.bits_per_sample, info.sample_rate, info.samples
        );

        let geometry = FrameGeometry::new(info.sample_rate, info.samples);
        debug!(
            "{} frames of {} samples, last frame {} samples",
            geometry.frames, geometry.standard_len, geometry.last_len
        );

        let table_offset = start + tag_len + HEADER_SIZE;
        let seek_table = SeekTable::read(&mut reader, table_offset, geometry.frames)?;

        let shift = filter_shift(info.depth());
        let channels = (0..info.channels)
            .map(|_| ChannelCodec::new(&key, shift))
            .collect();

        let mut decoder = Self {
            reader,
            info,
            geometry,
            seek_table,
            key,
            channels,
            state: SessionState::Decoding,
            frame_index: 0,
            frame_pos: 0,
            frame_len: 0,
            rate: 0,
            data_offset: table_offset + SeekTable::byte_len(geometry.frames),
            fail_level: log::Level::Error,
        };
        decoder.frame_init(0, false)?;

        Ok(decoder)
    }

    /// Sets the failure level for validation errors.
    ///
    /// - `log::Level::Error`: frame checksum mismatches are logged and the
    ///   frame is muted (default)
    /// - `log::Level::Warn`: frame checksum mismatches fail the call (strict mode).
    ///   The output buffer is still zeroed and the session moves past the frame.
    pub fn set_fail_level(&mut self, level: log::Level) {
        self.fail_level = level;
    }

    /// Decodes as many whole time-steps as fit in `out`, crossing frame
    /// boundaries. Returns zero samples once the stream is finished.
    pub fn process_stream(
        &mut self,
        out: &mut [u8],
        progress: Option<&mut dyn FnMut(Progress)>,
    ) -> Result<DecodedChunk> {
        self.decode_into(out, Bound::OutputFull, progress)
    }

    /// Decodes the rest of the current frame, whose total size in bytes
    /// (checksum included) is `frame_bytes`. A frame that would read past
    /// that size is treated as corrupted. Decoding stops early only if `out`
    /// fills up, in which case the next call continues the same frame.
    pub fn process_frame(
        &mut self,
        frame_bytes: u32,
        out: &mut [u8],
        progress: Option<&mut dyn FnMut(Progress)>,
    ) -> Result<DecodedChunk> {
        self.decode_into(out, Bound::FrameBytes(frame_bytes), progress)
    }

    /// Moves to the frame that covers `seconds` from the start of the stream
    /// and returns the start of that frame in whole seconds.
    ///
    /// On error the session is left untouched.
    pub fn set_position(&mut self, seconds: u32) -> Result<u32> {
        let frame = FrameGeometry::frame_for_seconds(seconds);
        self.seek_frame(frame)?;
        Ok(FrameGeometry::seconds_for_frame(frame))
    }

    /// Moves to the start of frame `frame`.
    pub fn seek_frame(&mut self, frame: u32) -> Result<()> {
        if self.seek_table.is_none() {
            bail!(SeekError::Unavailable);
        }
        if frame >= self.geometry.frames {
            bail!(SeekError::OutOfRange {
                frame,
                frames: self.geometry.frames,
            });
        }

        debug!("Seeking to frame {frame}");
        self.frame_init(frame, true)
    }

    /// Byte size of frame `index` including its checksum, if the seek table
    /// is available.
    pub fn frame_byte_len(&self, index: u32) -> Option<u32> {
        self.seek_table.as_ref()?.frame_size(index)
    }

    pub fn info(&self) -> &StreamInfo {
        &self.info
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    pub fn seek_table(&self) -> Option<&SeekTable> {
        self.seek_table.as_ref()
    }

    pub fn has_seek_table(&self) -> bool {
        self.seek_table.is_some()
    }

    pub fn frames(&self) -> u32 {
        self.geometry.frames
    }

    /// Index of the frame the next sample comes from.
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Time-steps decoded from the start of the stream.
    pub fn position(&self) -> u64 {
        match self.state {
            SessionState::Finished => self.info.samples as u64,
            _ => self.geometry.first_sample(self.frame_index) + self.frame_pos as u64,
        }
    }

    /// Bitrate of the last completed frame in kbit/s.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Absolute byte offset of the first frame.
    pub fn data_offset(&self) -> u64 {
        self.data_offset
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    fn frame_init(&mut self, frame: u32, seek_needed: bool) -> Result<()> {
        if frame >= self.geometry.frames {
            self.state = SessionState::Finished;
            return Ok(());
        }

        if seek_needed {
            if let Some(offset) = self.seek_table.as_ref().and_then(|t| t.offset(frame)) {
                self.reader.seek(offset)?;
            }
        }

        self.frame_index = frame;
        self.frame_pos = 0;
        self.frame_len = self.geometry.frame_len(frame);

        let shift = filter_shift(self.info.depth());
        for codec in &mut self.channels {
            *codec = ChannelCodec::new(&self.key, shift);
        }

        self.reader.reset();
        let frame_bytes = self.frame_byte_len(frame);
        self.reader.set_budget(frame_bytes);
        self.state = SessionState::Decoding;

        Ok(())
    }

    fn decode_into(
        &mut self,
        out: &mut [u8],
        bound: Bound,
        progress: Option<&mut dyn FnMut(Progress)>,
    ) -> Result<DecodedChunk> {
        let mut noop = |_: Progress| {};
        let progress: &mut dyn FnMut(Progress) = match progress {
            Some(progress) => progress,
            None => &mut noop,
        };

        let depth = self.info.depth() as usize;
        let step = self.info.block_align();
        let bounded = matches!(bound, Bound::FrameBytes(_));

        let mut chunk = DecodedChunk {
            samples: 0,
            bytes: 0,
            status: ChunkStatus::Intact,
        };

        if let Bound::FrameBytes(frame_bytes) = bound {
            // the budget counts from the frame start, so it can only be
            // armed before the first bit is read
            if self.state == SessionState::Decoding && self.frame_pos == 0 {
                self.reader.set_budget(Some(frame_bytes));
            }
        }

        let mut cache = [0i32; MAX_CHANNELS];
        let cache = &mut cache[..self.channels.len()];

        while self.state == SessionState::Decoding && out.len() - chunk.bytes >= step {
            match self.decode_step(cache) {
                Ok(()) => {}
                Err(e) if self.is_corruption(&e) => {
                    debug!("Frame {} ended early: {e}", self.frame_index);
                    self.finish_frame(false, out, &mut chunk, progress)?;
                    break;
                }
                Err(e) => return Err(e.into()),
            }

            recorrelate(cache);

            let dst = &mut out[chunk.bytes..chunk.bytes + step];
            for (sample, value) in dst.chunks_exact_mut(depth).zip(cache.iter()) {
                sample.copy_from_slice(&value.to_le_bytes()[..depth]);
            }
            chunk.bytes += step;
            chunk.samples += 1;
            self.frame_pos += 1;

            if self.frame_pos == self.frame_len {
                let intact = match self.reader.read_crc32() {
                    Ok(check) => check.is_valid(),
                    Err(e) if self.is_corruption(&e) => false,
                    Err(e) => return Err(e.into()),
                };
                self.finish_frame(intact, out, &mut chunk, progress)?;

                if bounded {
                    break;
                }
            }
        }

        Ok(chunk)
    }

    /// Decodes one time-step into `cache`.
    #[inline(always)]
    fn decode_step(&mut self, cache: &mut [i32]) -> io::Result<()> {
        for (codec, value) in self.channels.iter_mut().zip(cache.iter_mut()) {
            *value = codec.decode(&mut self.reader)?;
        }
        Ok(())
    }

    /// Read errors that mean the frame data itself is bad: a frame running
    /// past its byte budget, or a Rice parameter growing out of range.
    ///
    /// Without a seek table there is no budget, so running into the end of
    /// the stream inside a frame counts as well.
    fn is_corruption(&mut self, e: &io::Error) -> bool {
        match e.kind() {
            io::ErrorKind::InvalidData => true,
            io::ErrorKind::UnexpectedEof => {
                self.reader.budget_exhausted() || self.seek_table.is_none()
            }
            _ => false,
        }
    }

    fn finish_frame(
        &mut self,
        intact: bool,
        out: &mut [u8],
        chunk: &mut DecodedChunk,
        progress: &mut dyn FnMut(Progress),
    ) -> Result<()> {
        let frame = self.frame_index;
        self.rate = ((self.reader.consumed() as u64 * 8) / 1070) as u32;

        if intact {
            progress(Progress {
                rate: self.rate,
                frame: frame + 1,
                frames: self.geometry.frames,
            });
            return self.frame_init(frame + 1, false);
        }

        out.fill(0);
        chunk.status = ChunkStatus::Muted;

        // the session moves past the bad frame even when the mismatch is fatal
        if self.seek_table.is_some() {
            self.frame_init(frame + 1, true)?;
        } else {
            warn!("No seek table to resynchronize after frame {frame}, decoding stopped");
            self.state = SessionState::Halted;
        }

        log_or_err!(self, log::Level::Warn, DecodeError::FrameChecksumMismatch { frame });

        Ok(())
    }
}
