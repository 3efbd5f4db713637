//! Frame geometry.
//!
//! A frame spans `256 / 245` seconds (about 1.045 s) of audio, so the standard
//! frame length in samples is `256 * sample_rate / 245`. Only the last frame
//! may be shorter.

/// Numerator of the frame duration in seconds.
pub const FRAME_TIME_NUM: u64 = 256;
/// Denominator of the frame duration in seconds.
pub const FRAME_TIME_DEN: u64 = 245;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Samples per channel in every frame but the last.
    pub standard_len: u32,
    /// Samples per channel in the last frame.
    pub last_len: u32,
    /// Total number of frames.
    pub frames: u32,
}

impl FrameGeometry {
    pub fn new(sample_rate: u32, samples: u32) -> Self {
        let standard_len = (FRAME_TIME_NUM * sample_rate as u64 / FRAME_TIME_DEN)
            .clamp(1, u32::MAX as u64) as u32;

        let remainder = samples % standard_len;
        let frames = samples / standard_len + u32::from(remainder != 0);
        let last_len = if remainder == 0 {
            standard_len
        } else {
            remainder
        };

        Self {
            standard_len,
            last_len,
            frames,
        }
    }

    /// Samples per channel in frame `index`.
    pub fn frame_len(&self, index: u32) -> u32 {
        if index + 1 == self.frames {
            self.last_len
        } else {
            self.standard_len
        }
    }

    /// Frame covering `seconds` from the stream start.
    pub fn frame_for_seconds(seconds: u32) -> u32 {
        (FRAME_TIME_DEN * seconds as u64 / FRAME_TIME_NUM) as u32
    }

    /// Start of frame `index` in whole seconds.
    pub fn seconds_for_frame(index: u32) -> u32 {
        (FRAME_TIME_NUM * index as u64 / FRAME_TIME_DEN) as u32
    }

    /// First sample (per channel) of frame `index`.
    pub fn first_sample(&self, index: u32) -> u64 {
        index as u64 * self.standard_len as u64
    }
}
