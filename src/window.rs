// src/window.rs

use core::f32::consts::PI;

use crate::common::SpectrumError;

/// Window functions paired with their amplitude-recovery factors.
///
/// Each generator fills a caller-owned coefficient buffer and returns the
/// factor that undoes the window's average amplitude attenuation after the
/// transform (see `SpectrumResult::recover_amplitude`). Kaiser returns 1:
/// its attenuation depends on `beta` and is left for the caller to
/// determine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Window {
    Rectangular,
    Hamming,
    Hanning,
    Flattop,
    Kaiser { beta: f32 },
}

impl Window {
    /// Fills `out` with the window coefficients and returns the recovery
    /// factor. At least two points are required, the shape formulas divide
    /// by `n - 1`.
    pub fn fill(&self, out: &mut [f32]) -> Result<f32, SpectrumError> {
        let n = out.len();
        if n < 2 {
            return Err(SpectrumError::WindowTooShort);
        }

        let step = 2.0 * PI / (n - 1) as f32;
        let k = match *self {
            Window::Rectangular => {
                out.fill(1.0);
                1.0
            }
            Window::Hamming => {
                for (i, w) in out.iter_mut().enumerate() {
                    *w = 0.54 - 0.46 * cos(step * i as f32);
                }
                1.852
            }
            Window::Hanning => {
                for (i, w) in out.iter_mut().enumerate() {
                    *w = 0.5 * (1.0 - cos(step * i as f32));
                }
                2.0
            }
            Window::Flattop => {
                const A: [f32; 5] = [
                    0.21557895,
                    0.41663158,
                    0.277263158,
                    0.083578947,
                    0.006947368,
                ];
                for (i, w) in out.iter_mut().enumerate() {
                    let x = step * i as f32;
                    *w = A[0] - A[1] * cos(x) + A[2] * cos(2.0 * x) - A[3] * cos(3.0 * x)
                        + A[4] * cos(4.0 * x);
                }
                4.639
            }
            Window::Kaiser { beta } => {
                let denom = bessel_i0(beta);
                for (i, w) in out.iter_mut().enumerate() {
                    let x = 2.0 * i as f32 / (n - 1) as f32 - 1.0;
                    *w = bessel_i0(beta * sqrt(1.0 - x * x)) / denom;
                }
                1.0
            }
        };
        Ok(k)
    }
}

/// Modified Bessel function of order zero, truncated power series:
/// `1 + Σ ((x/2)^k / k!)²` for `k` up to 19. The truncation loses accuracy
/// as `x` grows, acceptable over the `beta` range Kaiser windows use.
fn bessel_i0(x: f32) -> f32 {
    let y = x * x / 4.0;
    let mut sum = 1.0;
    let mut term = y;
    let mut factorial = 1.0;
    for k in 1..20 {
        factorial *= k as f32;
        sum += term / (factorial * factorial);
        term *= y;
    }
    sum
}

/// Helper function for cos, agnostic to the build flavor.
fn cos(angle: f32) -> f32 {
    #[cfg(feature = "std")]
    return angle.cos();

    #[cfg(not(feature = "std"))]
    return libm::cosf(angle);
}

fn sqrt(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrtf(x);
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
