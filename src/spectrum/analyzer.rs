use num_complex::Complex32;

use super::core::{bit_reverse_index, radix2_dit};
use super::result::SpectrumResult;
use super::table::SineTable;
use crate::common::{MAX_POINTS, Sample, SpectrumError};

/// Power-of-two spectrum analyzer.
///
/// Holds an optional reference to a prebuilt [`SineTable`]. Without one the
/// twiddle factors are evaluated directly, so transforms stay usable before
/// any table exists; results agree to floating tolerance either way.
pub struct SpectrumAnalyzer<'a> {
    table: Option<&'a SineTable<'a>>,
}

impl<'a> SpectrumAnalyzer<'a> {
    /// Analyzer that evaluates twiddle factors by direct trigonometry.
    pub fn new() -> Self {
        Self { table: None }
    }

    /// Analyzer accelerated by a prebuilt sine table.
    pub fn with_table(table: &'a SineTable<'a>) -> Self {
        Self { table: Some(table) }
    }

    /// Spectral analysis of `input`.
    ///
    /// `input.len()` must be a power of two not exceeding `MAX_POINTS`, and
    /// `out` needs at least that capacity. On success the first
    /// `input.len()` bins, magnitudes and phases of `out` are valid and the
    /// DC component equals the normalized magnitude of bin 0.
    pub fn process<T: Sample>(
        &self,
        input: &[T],
        out: &mut SpectrumResult<'_>,
    ) -> Result<(), SpectrumError> {
        let n = self.check(input.len(), out)?;

        let bins = out.bins_mut(n);
        for (i, bin) in bins.iter_mut().enumerate() {
            let src = bit_reverse_index(i, n);
            *bin = Complex32::new(input[src].to_f32(), 0.0);
        }
        radix2_dit(bins, self.table);

        out.finish(n, None);
        Ok(())
    }

    /// Windowed spectral analysis of `input`.
    ///
    /// The arithmetic mean of the raw samples is removed before the window
    /// is applied, and that mean is reported as the DC component. Window
    /// coefficients pair with samples by their original index, so `win`
    /// must be exactly as long as `input`.
    pub fn process_windowed<T: Sample>(
        &self,
        input: &[T],
        win: &[f32],
        out: &mut SpectrumResult<'_>,
    ) -> Result<(), SpectrumError> {
        let n = self.check(input.len(), out)?;
        if win.len() != n {
            return Err(SpectrumError::SizeMismatch);
        }

        let mut sum = 0.0;
        for sample in input {
            sum += sample.to_f32();
        }
        let mean = sum / n as f32;

        let bins = out.bins_mut(n);
        for (i, bin) in bins.iter_mut().enumerate() {
            let src = bit_reverse_index(i, n);
            *bin = Complex32::new((input[src].to_f32() - mean) * win[src], 0.0);
        }
        radix2_dit(bins, self.table);

        out.finish(n, Some(mean));
        Ok(())
    }

    fn check(&self, n: usize, out: &SpectrumResult<'_>) -> Result<usize, SpectrumError> {
        if !n.is_power_of_two() {
            return Err(SpectrumError::NotPowerOfTwo);
        }
        if n > MAX_POINTS {
            return Err(SpectrumError::TooManyPoints);
        }
        if out.capacity() < n {
            return Err(SpectrumError::BufferTooSmall);
        }
        Ok(n)
    }
}

impl Default for SpectrumAnalyzer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
