//! Inter-channel decorrelation.
//!
//! The encoder replaces each channel but the last with its difference to the
//! next channel, and the last channel with itself minus half of the preceding
//! difference. Decoding undoes this in reverse order, one time-step at a time.

/// Restores channel samples in place from their decorrelated form.
///
/// Mono input is left untouched. The halving uses integer division, which
/// truncates toward zero; an arithmetic shift would round negative odd values
/// the other way and break bit-exactness.
#[inline(always)]
pub fn recorrelate(cache: &mut [i32]) {
    let n = cache.len();
    if n < 2 {
        return;
    }

    cache[n - 1] = cache[n - 1].wrapping_add(cache[n - 2] / 2);

    for k in (0..n - 1).rev() {
        cache[k] = cache[k + 1].wrapping_sub(cache[k]);
    }
}

/// Forward transform applied by the encoder.
#[cfg(test)]
pub(crate) fn decorrelate(cache: &mut [i32]) {
    let n = cache.len();
    if n < 2 {
        return;
    }

    for k in 0..n - 1 {
        cache[k] = cache[k + 1].wrapping_sub(cache[k]);
    }

    cache[n - 1] = cache[n - 1].wrapping_sub(cache[n - 2] / 2);
}
