use num_complex::Complex32;

use super::core::{argument, modulus};

/// Caller-owned destination for one spectral analysis.
///
/// The backing slices live wherever the caller allocated them; any
/// capacity up to `MAX_POINTS` works. Each analyzer call overwrites the
/// first `len` entries and the accessors expose only that meaningful
/// prefix.
pub struct SpectrumResult<'a> {
    bins: &'a mut [Complex32],
    magnitude: &'a mut [f32],
    phase: &'a mut [f32],
    dc: f32,
    len: usize,
}

impl<'a> SpectrumResult<'a> {
    pub fn new(
        bins: &'a mut [Complex32],
        magnitude: &'a mut [f32],
        phase: &'a mut [f32],
    ) -> Self {
        Self {
            bins,
            magnitude,
            phase,
            dc: 0.0,
            len: 0,
        }
    }

    /// Number of meaningful entries after the last analysis.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw transformed bins.
    pub fn bins(&self) -> &[Complex32] {
        &self.bins[..self.len]
    }

    /// Normalized per-bin amplitudes.
    pub fn magnitude(&self) -> &[f32] {
        &self.magnitude[..self.len]
    }

    /// Per-bin phases.
    pub fn phase(&self) -> &[f32] {
        &self.phase[..self.len]
    }

    /// DC component of the analyzed signal.
    pub fn dc(&self) -> f32 {
        self.dc
    }

    /// Undoes the amplitude attenuation of a window by scaling every
    /// magnitude entry with the recovery factor its generator returned.
    /// No other field is touched.
    pub fn recover_amplitude(&mut self, k: f32) {
        for amp in &mut self.magnitude[..self.len] {
            *amp *= k;
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.bins
            .len()
            .min(self.magnitude.len())
            .min(self.phase.len())
    }

    pub(crate) fn bins_mut(&mut self, len: usize) -> &mut [Complex32] {
        &mut self.bins[..len]
    }

    /// Derives magnitude and phase from the transformed bins. Bin 0 has no
    /// mirrored negative-frequency twin, so its doubled amplitude is halved
    /// back. The DC scalar is `mean` when the windowed path supplies one,
    /// otherwise the normalized magnitude of bin 0.
    pub(crate) fn finish(&mut self, len: usize, mean: Option<f32>) {
        for i in 0..len {
            self.magnitude[i] = modulus(self.bins[i]) * 2.0 / len as f32;
            self.phase[i] = argument(self.bins[i]);
        }
        self.magnitude[0] /= 2.0;
        self.len = len;
        self.dc = mean.unwrap_or(self.magnitude[0]);
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
