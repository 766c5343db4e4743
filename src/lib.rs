//! Power-of-two spectrum analysis for fixed-size sample buffers.

#![no_std]

// The standard library is linked for tests and for the optional "std"
// feature, so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod spectrum;
pub mod window;
