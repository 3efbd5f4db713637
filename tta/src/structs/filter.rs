//! Adaptive hybrid filter, the first prediction stage.
//!
//! An order-8 FIR predictor whose coefficients adapt by sign-sign updates.
//! The history holds the last reconstructed value followed by its first,
//! second and third order differences, and the adaptation steps for the four
//! most recent entries are weighted 4, 2, 2, 1.
//!
//! All arithmetic is 32-bit two's-complement with wraparound so that encoder
//! and decoder track identical states on every platform.

use crate::structs::key::KeyMaterial;

pub const FILTER_ORDER: usize = 8;

/// Filter shift for a sample width in bytes.
pub const fn filter_shift(depth: u32) -> u32 {
    match depth {
        2 => 9,
        _ => 10,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridFilter {
    shift: u32,
    round: i32,
    error: i32,
    qm: [i32; FILTER_ORDER],
    dx: [i32; FILTER_ORDER + 1],
    dl: [i32; FILTER_ORDER + 1],
}

/// Sign of `x` as +1 or -1, with zero counted as positive.
#[inline(always)]
const fn sign(x: i32) -> i32 {
    (x >> 30) | 1
}

impl HybridFilter {
    /// Creates a filter with coefficients seeded from `key`.
    pub fn new(key: &KeyMaterial, shift: u32) -> Self {
        let mut qm = [0; FILTER_ORDER];
        for (q, &byte) in qm.iter_mut().zip(key.as_bytes()) {
            *q = byte as i8 as i32;
        }

        Self {
            shift,
            round: 1 << (shift - 1),
            error: 0,
            qm,
            dx: [0; FILTER_ORDER + 1],
            dl: [0; FILTER_ORDER + 1],
        }
    }

    #[inline(always)]
    fn predict(&mut self) -> i32 {
        let Self {
            shift,
            round,
            error,
            qm,
            dx,
            dl,
        } = self;

        if *error < 0 {
            qm.iter_mut()
                .zip(dx.iter())
                .for_each(|(q, &d)| *q = q.wrapping_sub(d));
        } else if *error > 0 {
            qm.iter_mut()
                .zip(dx.iter())
                .for_each(|(q, &d)| *q = q.wrapping_add(d));
        }

        let sum = qm
            .iter()
            .zip(dl.iter())
            .fold(*round, |acc, (&q, &l)| acc.wrapping_add(q.wrapping_mul(l)));

        dx[8] = sign(dl[7]) << 2;
        dx[7] = sign(dl[6]) << 1;
        dx[6] = sign(dl[5]) << 1;
        dx[5] = sign(dl[4]);

        sum >> *shift
    }

    #[inline(always)]
    fn update(&mut self, error: i32, value: i32) {
        let dl = &mut self.dl;

        self.error = error;

        dl[8] = value;
        dl[7] = dl[8].wrapping_sub(dl[7]);
        dl[6] = dl[7].wrapping_sub(dl[6]);
        dl[5] = dl[6].wrapping_sub(dl[5]);

        self.dl.copy_within(1.., 0);
        self.dx.copy_within(1.., 0);
    }

    /// Reconstructs a value from its residual.
    #[inline(always)]
    pub fn decode(&mut self, residual: i32) -> i32 {
        let value = residual.wrapping_add(self.predict());
        self.update(residual, value);
        value
    }

    /// Produces the residual for a value; inverse of [`Self::decode`].
    #[cfg(test)]
    pub(crate) fn encode(&mut self, value: i32) -> i32 {
        let residual = value.wrapping_sub(self.predict());
        self.update(residual, value);
        residual
    }
}
