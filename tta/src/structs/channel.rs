//! Per-channel decoding state.
//!
//! A channel reconstructs each sample in three steps: the adaptive Rice code
//! yields a residual, the [`HybridFilter`] adds its prediction, and the fixed
//! order-1 predictor adds `31/32` of the previous output. All three are reset
//! at every frame boundary, so no state crosses frames.

use std::io;

use crate::structs::filter::HybridFilter;
use crate::structs::key::KeyMaterial;
use crate::structs::rice::RiceAdapter;
use crate::utils::bitstream_io::BitstreamIoReader;

/// Fixed-coefficient order-1 predictor: `x[n] = e[n] + (x[n-1] * 31) >> 5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPredictor {
    previous: i32,
}

impl FixedPredictor {
    #[inline(always)]
    fn prediction(&self) -> i32 {
        self.previous.wrapping_mul(31) >> 5
    }

    #[inline(always)]
    pub fn decode(&mut self, value: i32) -> i32 {
        let reconstructed = value.wrapping_add(self.prediction());
        self.previous = reconstructed;
        reconstructed
    }

    #[cfg(test)]
    pub(crate) fn encode(&mut self, sample: i32) -> i32 {
        let residual = sample.wrapping_sub(self.prediction());
        self.previous = sample;
        residual
    }
}

#[derive(Debug, Clone)]
pub struct ChannelCodec {
    pub filter: HybridFilter,
    pub rice: RiceAdapter,
    pub predictor: FixedPredictor,
}

impl ChannelCodec {
    pub fn new(key: &KeyMaterial, shift: u32) -> Self {
        Self {
            filter: HybridFilter::new(key, shift),
            rice: RiceAdapter::default(),
            predictor: FixedPredictor::default(),
        }
    }

    /// Reads and reconstructs the channel's next sample.
    #[inline(always)]
    pub fn decode<R: io::Read + io::Seek>(
        &mut self,
        reader: &mut BitstreamIoReader<R>,
    ) -> io::Result<i32> {
        let residual = self.rice.decode(reader)?;
        let filtered = self.filter.decode(residual);
        Ok(self.predictor.decode(filtered))
    }
}
