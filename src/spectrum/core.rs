// src/spectrum/core.rs

use core::f32::consts::PI;
use num_complex::Complex32;

use super::table::SineTable;

/// Bit-reverses `index` within a transform of `n` points (`n` a power of
/// two). The mapping is a bijection on `[0, n)` and its own inverse; the
/// recursive combination below assumes its input was loaded in this order.
pub(crate) fn bit_reverse_index(index: usize, n: usize) -> usize {
    let bits = n.trailing_zeros();
    let mut input = index;
    let mut output = 0;
    for _ in 0..bits {
        output = (output << 1) | (input & 1);
        input >>= 1;
    }
    output
}

/// Radix-2 Decimation-in-Time transform, recursive form.
///
/// `bins` must hold a power-of-two number of points already arranged in
/// bit-reversed order. Each level transforms both halves independently and
/// combines them with the twiddle `W_k = cos(2πk/len) - i·sin(2πk/len)`,
/// taken from `table` when one is supplied and computed directly otherwise.
/// Depth is log2(len), bounded by log2(MAX_POINTS).
pub(crate) fn radix2_dit(bins: &mut [Complex32], table: Option<&SineTable>) {
    let len = bins.len();
    if len <= 1 {
        return;
    }

    let (first, second) = bins.split_at_mut(len / 2);
    radix2_dit(first, table);
    radix2_dit(second, table);

    for k in 0..len / 2 {
        let w = match table {
            Some(table) => Complex32::new(table.cos(len, k), -table.sin(len, k)),
            None => {
                let (sin, cos) = sin_cos(2.0 * PI * k as f32 / len as f32);
                Complex32::new(cos, -sin)
            }
        };
        let a = first[k];
        let t = second[k] * w;
        first[k] = a + t;
        second[k] = a - t;
    }
}

/// Helper function for sin/cos, agnostic to the build flavor.
pub(crate) fn sin_cos(angle: f32) -> (f32, f32) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sinf(angle), libm::cosf(angle));
}

/// |c|
pub(crate) fn modulus(c: Complex32) -> f32 {
    #[cfg(feature = "std")]
    return (c.re * c.re + c.im * c.im).sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrtf(c.re * c.re + c.im * c.im);
}

/// Argument of `c`, quadrant-correct including a zero real part.
pub(crate) fn argument(c: Complex32) -> f32 {
    #[cfg(feature = "std")]
    return c.im.atan2(c.re);

    #[cfg(not(feature = "std"))]
    return libm::atan2f(c.im, c.re);
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
