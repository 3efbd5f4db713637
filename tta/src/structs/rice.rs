//! Adaptive Rice coding of prediction residuals.
//!
//! Each value is a unary prefix followed by `k` binary bits. A zero prefix
//! selects the short code with parameter `k0`; a non-zero prefix selects the
//! escape code with parameter `k1`, whose value is offset by `1 << k0`. Both
//! parameters track a running magnitude sum and move by one step whenever the
//! sum leaves the band `[1 << (k + 4), 1 << (k + 5)]`.

use std::io;

use crate::utils::bitstream_io::BitstreamIoReader;

/// Rice parameter each channel starts every frame with.
pub const INITIAL_RICE_PARAMETER: u32 = 10;

/// `1 << n`, saturating at bit 31.
#[inline(always)]
pub const fn bit_shift(n: u32) -> u32 {
    if n < 32 { 1 << n } else { 1 << 31 }
}

/// Watermark for parameter `k`: `1 << (k + 4)`, saturating at bit 31.
#[inline(always)]
pub const fn shift16(k: u32) -> u32 {
    bit_shift(k.saturating_add(4))
}

/// Adaptive parameters of one channel's residual code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiceAdapter {
    pub k0: u32,
    pub k1: u32,
    pub sum0: u32,
    pub sum1: u32,
}

impl Default for RiceAdapter {
    fn default() -> Self {
        Self::new(INITIAL_RICE_PARAMETER, INITIAL_RICE_PARAMETER)
    }
}

impl RiceAdapter {
    pub const fn new(k0: u32, k1: u32) -> Self {
        Self {
            k0,
            k1,
            sum0: shift16(k0),
            sum1: shift16(k1),
        }
    }

    #[inline(always)]
    fn adapt(k: &mut u32, sum: &mut u32, value: u32) {
        *sum = sum.wrapping_add(value.wrapping_sub(*sum >> 4));

        if *k > 0 && *sum < shift16(*k) {
            *k -= 1;
        } else if *sum > shift16(*k + 1) {
            *k += 1;
        }
    }

    /// Reads one residual and adapts the parameters.
    #[inline(always)]
    pub fn decode<R: io::Read + io::Seek>(
        &mut self,
        reader: &mut BitstreamIoReader<R>,
    ) -> io::Result<i32> {
        let mut value = reader.get_unary()?;

        let escaped = value != 0;
        let k = if escaped {
            value -= 1;
            self.k1
        } else {
            self.k0
        };

        if k != 0 {
            let bits = reader.get_n(k)?;
            value = value.wrapping_shl(k).wrapping_add(bits);
        }

        if escaped {
            Self::adapt(&mut self.k1, &mut self.sum1, value);
            value = value.wrapping_add(bit_shift(self.k0));
        }

        Self::adapt(&mut self.k0, &mut self.sum0, value);

        Ok(unfold_sign(value))
    }
}

/// Maps the folded unsigned code back to a signed residual:
/// odd values are positive, even values are zero or negative.
#[inline(always)]
pub const fn unfold_sign(value: u32) -> i32 {
    if value & 1 != 0 {
        ((value >> 1) as i32).wrapping_add(1)
    } else {
        ((value >> 1) as i32).wrapping_neg()
    }
}
