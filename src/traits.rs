//! Trait interfaces for the crate's numeric capabilities.
//!
//! These traits define the trait-first API shape implemented by the
//! kernels in [`crate::dft`], [`crate::spectrum`], [`crate::polar`], and
//! [`crate::signal`]. Every capability offers `run_into` against
//! caller-provided buffers; `run_alloc` variants allocate and require the
//! `alloc` feature.

use crate::kernel::{ExecError, Read1D, Write1D};

#[cfg(feature = "alloc")]
use crate::dft::DftBasis;
#[cfg(feature = "alloc")]
use crate::spectrum::SpectrumPair;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Real-input DFT capability producing a half-spectrum pair.
pub trait RealDft1D<T> {
    /// Transform `input` into caller-provided real/imaginary bin buffers.
    fn run_into<I, O1, O2>(
        &self,
        input: &I,
        out_re: &mut O1,
        out_im: &mut O2,
    ) -> Result<(), ExecError>
    where
        I: Read1D<T> + ?Sized,
        O1: Write1D<T> + ?Sized,
        O2: Write1D<T> + ?Sized;

    /// Transform `input` and allocate the half-spectrum pair.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<SpectrumPair<T>, ExecError>
    where
        I: Read1D<T> + ?Sized;
}

/// DFT coefficient-matrix design capability.
#[cfg(feature = "alloc")]
pub trait DftBasisDesign<T> {
    /// Materialize the real/imaginary coefficient matrices.
    fn run_alloc(&self) -> Result<DftBasis<T>, ExecError>;
}

/// DFT coefficient-matrix design capability in no-alloc mode.
#[cfg(not(feature = "alloc"))]
pub trait DftBasisDesign<T> {}

/// One-sided spectrum DC/harmonic amplitude scaling capability.
pub trait SpectrumScale1D<T> {
    /// Scale `input` bins into a caller-provided output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecError>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Scale `input` bins and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecError>
    where
        I: Read1D<T> + ?Sized;
}

/// Full-spectrum half-swap reordering capability.
pub trait FftShift1D<T> {
    /// Reorder `input` into a caller-provided output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecError>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Reorder `input` and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecError>
    where
        I: Read1D<T> + ?Sized;
}

/// Elementwise complex magnitude capability over a (re, im) pair.
pub trait ComplexAbs1D<T> {
    /// Compute magnitudes into a caller-provided output buffer.
    fn run_into<I1, I2, O>(&self, re: &I1, im: &I2, out: &mut O) -> Result<(), ExecError>
    where
        I1: Read1D<T> + ?Sized,
        I2: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Compute magnitudes and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I1, I2>(&self, re: &I1, im: &I2) -> Result<Vec<T>, ExecError>
    where
        I1: Read1D<T> + ?Sized,
        I2: Read1D<T> + ?Sized;
}

/// Elementwise complex phase-angle capability over a (re, im) pair.
pub trait ComplexAngle1D<T> {
    /// Compute angles in degrees into a caller-provided output buffer.
    fn run_into<I1, I2, O>(&self, re: &I1, im: &I2, out: &mut O) -> Result<(), ExecError>
    where
        I1: Read1D<T> + ?Sized,
        I2: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Compute angles in degrees and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I1, I2>(&self, re: &I1, im: &I2) -> Result<Vec<T>, ExecError>
    where
        I1: Read1D<T> + ?Sized,
        I2: Read1D<T> + ?Sized;
}

/// 1D cosine test-signal generation capability.
pub trait CosineWave1D<T> {
    /// Generate samples from normalized time input into a caller-provided
    /// output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecError>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Generate samples from normalized time input and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecError>
    where
        I: Read1D<T> + ?Sized;
}

/// 1D sine test-signal generation capability.
pub trait SineWave1D<T> {
    /// Generate samples from normalized time input into a caller-provided
    /// output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecError>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Generate samples from normalized time input and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecError>
    where
        I: Read1D<T> + ?Sized;
}
