use crate::common::{MAX_POINTS, SpectrumError};
use core::f32::consts::PI;

use super::core::sin_cos;

/// Quarter-period sine table at `MAX_POINTS` resolution.
///
/// Built once in caller-provided storage, read-only afterwards. One table
/// serves every power-of-two transform length up to `MAX_POINTS`: lookups
/// stride through it by `MAX_POINTS / len` and fold the requested phase
/// back into the first quarter wave.
pub struct SineTable<'a> {
    samples: &'a [f32],
}

impl<'a> SineTable<'a> {
    /// Fills `storage` with `sin(2π·k / MAX_POINTS)` for `k` in
    /// `[0, MAX_POINTS / 4)`. Rebuilding in the same storage recomputes
    /// identical values.
    pub fn new(storage: &'a mut [f32]) -> Result<Self, SpectrumError> {
        if storage.len() < MAX_POINTS / 4 {
            return Err(SpectrumError::BufferTooSmall);
        }

        let samples = &mut storage[..MAX_POINTS / 4];
        for (k, slot) in samples.iter_mut().enumerate() {
            let (sin, _) = sin_cos(2.0 * PI * k as f32 / MAX_POINTS as f32);
            *slot = sin;
        }
        Ok(Self { samples })
    }

    /// `sin(2π·i / len)` for a power-of-two `len ≤ MAX_POINTS` and
    /// `0 ≤ i < len/2`. Indices past the quarter point reflect back into
    /// the table; `len == 2` needs no table at all.
    pub fn sin(&self, len: usize, i: usize) -> f32 {
        if len == 2 {
            return 0.0;
        }
        let quarter = len / 4;
        if i < quarter {
            self.samples[MAX_POINTS / len * i]
        } else if i > quarter {
            self.samples[MAX_POINTS / len * (len / 2 - i)]
        } else {
            1.0
        }
    }

    /// `cos(2π·i / len)`, derived from the sine table by a quarter-period
    /// phase shift with the sign adjusted per quadrant.
    pub fn cos(&self, len: usize, i: usize) -> f32 {
        if len == 2 {
            return 1.0;
        }
        let quarter = len / 4;
        let i = (i + quarter) % (len / 2);
        if i < quarter {
            -self.samples[MAX_POINTS / len * i]
        } else if i > quarter {
            self.samples[MAX_POINTS / len * (len / 2 - i)]
        } else {
            1.0
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
