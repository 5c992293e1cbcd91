//! Spectrum post-processing: the (re, im) pair type, one-sided amplitude
//! scaling, and full-spectrum reordering.
//!
//! [`fftshift`] operates on any full-length spectrum vector and makes no
//! conjugate-symmetry assumption; it is not meant for the half-spectrum
//! [`crate::dft::rdft`] produces, which has no negative-frequency half.

use nalgebra::RealField;
use num_traits::FromPrimitive;

use crate::kernel::{ConfigError, ExecError, KernelLifecycle, Read1D, Write1D};
use crate::traits::{FftShift1D, SpectrumScale1D};

#[cfg(feature = "alloc")]
use crate::error::Result;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Equal-length (re, im) vector pair indexed by frequency bin.
///
/// The sole complex-valued representation in the crate; the equal-length
/// invariant is enforced at construction and preserved by every producer.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumPair<F> {
    re: Vec<F>,
    im: Vec<F>,
}

#[cfg(feature = "alloc")]
impl<F> SpectrumPair<F> {
    /// Bundle real and imaginary bin vectors, validating equal length.
    pub fn try_new(re: Vec<F>, im: Vec<F>) -> core::result::Result<Self, ConfigError> {
        if re.len() != im.len() {
            return Err(ConfigError::LengthMismatch {
                arg: "im",
                expected: re.len(),
                got: im.len(),
            });
        }
        Ok(Self { re, im })
    }

    /// Real bins.
    pub fn re(&self) -> &[F] {
        &self.re
    }

    /// Imaginary bins.
    pub fn im(&self) -> &[F] {
        &self.im
    }

    /// Number of frequency bins.
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// Whether the spectrum carries no bins.
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// Consume the pair and hand back `(re, im)`.
    pub fn into_parts(self) -> (Vec<F>, Vec<F>) {
        (self.re, self.im)
    }
}

/// Constructor config for [`SpectrumScaleKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumScaleConfig {
    /// Length `N` of the time-domain sequence the spectrum came from.
    pub n: usize,
}

/// Trait-first one-sided spectrum amplitude scaler.
///
/// Converts raw half-spectrum bins into signal amplitudes: the DC bin is
/// divided by `N`, every harmonic bin is multiplied by `2/N` (the factor 2
/// folds the conjugate negative-frequency half into the one-sided bin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumScaleKernel<F>
where
    F: RealField + Copy,
{
    dc_gain: F,
    harmonic_gain: F,
}

impl<F> KernelLifecycle for SpectrumScaleKernel<F>
where
    F: RealField + Copy + FromPrimitive,
{
    type Config = SpectrumScaleConfig;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        if config.n == 0 {
            return Err(ConfigError::ZeroLength { arg: "n" });
        }
        let n = F::from_usize(config.n).ok_or(ConfigError::InvalidArgument {
            arg: "n",
            reason: "sequence length is not representable",
        })?;
        let two = F::one() + F::one();
        Ok(Self {
            dc_gain: F::one() / n,
            harmonic_gain: two / n,
        })
    }
}

impl<F> SpectrumScale1D<F> for SpectrumScaleKernel<F>
where
    F: RealField + Copy,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> core::result::Result<(), ExecError>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecError::from)?;
        if input.is_empty() {
            return Err(ExecError::EmptyInput { arg: "input" });
        }
        let out = out.write_slice_mut().map_err(ExecError::from)?;
        if out.len() != input.len() {
            return Err(ExecError::LengthMismatch {
                arg: "out",
                expected: input.len(),
                got: out.len(),
            });
        }
        out[0] = input[0] * self.dc_gain;
        out[1..]
            .iter_mut()
            .zip(input[1..].iter())
            .for_each(|(out, &x)| *out = x * self.harmonic_gain);
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> core::result::Result<Vec<F>, ExecError>
    where
        I: Read1D<F> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecError::from)?;
        if input.is_empty() {
            return Err(ExecError::EmptyInput { arg: "input" });
        }
        Ok(input
            .iter()
            .enumerate()
            .map(|(k, &x)| {
                if k == 0 {
                    x * self.dc_gain
                } else {
                    x * self.harmonic_gain
                }
            })
            .collect())
    }
}

/// Constructor config for [`FftShiftKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftShiftConfig;

/// Trait-first full-spectrum half-swap kernel.
///
/// Rotates a full-length spectrum so the negative-frequency (upper) half
/// precedes the positive-frequency (lower) half. Split point is
/// `floor(N/2)`, which covers both the even (`N/2`) and odd (`(N-1)/2`)
/// cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftShiftKernel;

impl KernelLifecycle for FftShiftKernel {
    type Config = FftShiftConfig;

    fn try_new(_config: Self::Config) -> core::result::Result<Self, ConfigError> {
        Ok(Self)
    }
}

impl<T> FftShift1D<T> for FftShiftKernel
where
    T: Copy,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> core::result::Result<(), ExecError>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecError::from)?;
        let out = out.write_slice_mut().map_err(ExecError::from)?;
        if out.len() != input.len() {
            return Err(ExecError::LengthMismatch {
                arg: "out",
                expected: input.len(),
                got: out.len(),
            });
        }
        let split = input.len() / 2;
        let upper = input.len() - split;
        out[..upper].copy_from_slice(&input[split..]);
        out[upper..].copy_from_slice(&input[..split]);
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> core::result::Result<Vec<T>, ExecError>
    where
        I: Read1D<T> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecError::from)?;
        let split = input.len() / 2;
        let mut out = Vec::with_capacity(input.len());
        out.extend_from_slice(&input[split..]);
        out.extend_from_slice(&input[..split]);
        Ok(out)
    }
}

/// Scale a one-sided spectrum into amplitudes: `x[0]/N`, `x[k]*2/N` for
/// `k > 0`. The spectrum must carry at least the DC bin.
#[cfg(feature = "alloc")]
pub fn scale_dc_harmonics<F>(x: &[F], n: usize) -> Result<Vec<F>>
where
    F: RealField + Copy + FromPrimitive,
{
    let kernel = SpectrumScaleKernel::try_new(SpectrumScaleConfig { n })?;
    Ok(kernel.run_alloc(x)?)
}

/// Reorder a full-length spectrum so negative frequencies come first:
/// `x[K..] ++ x[..K]` with `K = floor(N/2)`. Empty input stays empty; a
/// single element is unchanged.
#[cfg(feature = "alloc")]
pub fn fftshift<T>(x: &[T]) -> Vec<T>
where
    T: Copy,
{
    let split = x.len() / 2;
    let mut out = Vec::with_capacity(x.len());
    out.extend_from_slice(&x[split..]);
    out.extend_from_slice(&x[..split]);
    out
}
