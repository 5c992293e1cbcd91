//! # scadnum
//!
//! Numeric support library for a parametric solid-modeling scene language.
//! The host evaluator treats every entrypoint as a pure expression: real
//! scalars and vectors in, vectors (or a real/imaginary pair) out, no
//! side effects, no I/O.
//!
//! The centerpiece is a real-input Discrete Fourier Transform evaluated
//! directly against its coefficient matrix — `O(N^2)` on purpose, sized
//! for the short sequences parametric models produce — plus the spectrum
//! post-processing, polar conversion, signal synthesis, and vector-math
//! primitives around it.
//!
//! ## Quick start
//!
//! ```
//! use scadnum::dft::rdft;
//! use scadnum::signal::cosine;
//! use scadnum::spectrum::scale_dc_harmonics;
//! use scadnum::vecmath::linspace;
//!
//! // Two periods of a cosine across 8 samples...
//! let t = linspace(0.0_f64, 1.0, 8).unwrap();
//! let x = cosine(&t, 2.0, 1.0, 0.0, 0.0).unwrap();
//!
//! // ...concentrate in bin 2 of the half-spectrum.
//! let spectrum = rdft(&x).unwrap();
//! let ampl = scale_dc_harmonics(spectrum.re(), x.len()).unwrap();
//! assert!((ampl[2] - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`vecmath`] — vector algebra and `isclose`/`allclose` comparison.
//! - [`polar`] — magnitude/phase (degrees) for (re, im) pairs.
//! - [`signal`] — deterministic cosine/sine test signals.
//! - [`dft`] — DFT coefficient matrices and the real-input transform.
//! - [`spectrum`] — the spectrum pair type, amplitude scaling, `fftshift`.
//! - [`kernel`] — constructor-validated kernel substrate and 1D adapters.
//! - [`traits`] — trait-first capability interfaces (`run_into` /
//!   `run_alloc`).
//!
//! ## Features
//!
//! - `std` (default): implies `alloc`.
//! - `alloc`: allocating entrypoints (`run_alloc`, free functions,
//!   ndarray buffer adapters). Without it, only the caller-buffer
//!   `run_into` kernel surface remains.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod dft;
pub mod error;
pub mod kernel;
pub mod polar;
pub mod signal;
pub mod spectrum;
pub mod traits;
#[cfg(feature = "alloc")]
pub mod vecmath;

pub use error::{Error, Result};
