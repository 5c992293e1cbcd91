//! Synthetic test-signal generation.
//!
//! Deterministic cosine/sine inputs with a known closed-form spectrum, used
//! to exercise the transform in [`crate::dft`]. The time axis is
//! normalized: `periods` counts whole cycles over `t` in `[0, 1)`, so a
//! [`crate::vecmath::linspace`]`(0, 1, n)` axis yields `periods` cycles
//! across `n` samples.

use nalgebra::RealField;
use num_traits::FromPrimitive;

use crate::kernel::{ConfigError, ExecError, KernelLifecycle, Read1D, Write1D};
use crate::traits::{CosineWave1D, SineWave1D};

#[cfg(feature = "alloc")]
use crate::error::Result;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Constructor config for [`CosineWaveKernel`] and [`SineWaveKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig<F>
where
    F: RealField + Copy,
{
    /// Whole cycles spanned by the normalized time range `[0, 1)`.
    pub periods: F,
    /// Peak amplitude.
    pub ampl: F,
    /// Phase offset in degrees.
    pub phi_deg: F,
    /// DC offset added to every sample.
    pub dc: F,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct WaveShape<F>
where
    F: RealField + Copy,
{
    periods: F,
    ampl: F,
    phi_rad: F,
    dc: F,
}

impl<F> WaveShape<F>
where
    F: RealField + Copy + FromPrimitive,
{
    fn try_new(config: WaveConfig<F>) -> core::result::Result<Self, ConfigError> {
        let half_turn = F::from_u8(180).ok_or(ConfigError::InvalidArgument {
            arg: "phi_deg",
            reason: "unable to convert degrees for numeric type",
        })?;
        Ok(Self {
            periods: config.periods,
            ampl: config.ampl,
            phi_rad: config.phi_deg * F::pi() / half_turn,
            dc: config.dc,
        })
    }

    fn phase(&self, t: F) -> F {
        F::two_pi() * self.periods * t + self.phi_rad
    }
}

/// Trait-first 1D cosine test-signal generator.
///
/// `sample(t) = ampl * cos(2π * periods * t + phi) + dc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosineWaveKernel<F>
where
    F: RealField + Copy,
{
    shape: WaveShape<F>,
}

impl<F> CosineWaveKernel<F>
where
    F: RealField + Copy,
{
    fn sample(&self, t: F) -> F {
        self.shape.ampl * self.shape.phase(t).cos() + self.shape.dc
    }
}

impl<F> KernelLifecycle for CosineWaveKernel<F>
where
    F: RealField + Copy + FromPrimitive,
{
    type Config = WaveConfig<F>;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        Ok(Self {
            shape: WaveShape::try_new(config)?,
        })
    }
}

impl<F> CosineWave1D<F> for CosineWaveKernel<F>
where
    F: RealField + Copy,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> core::result::Result<(), ExecError>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
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
        out.iter_mut()
            .zip(input.iter())
            .for_each(|(out, &t)| *out = self.sample(t));
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> core::result::Result<Vec<F>, ExecError>
    where
        I: Read1D<F> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecError::from)?;
        Ok(input.iter().map(|&t| self.sample(t)).collect())
    }
}

/// Trait-first 1D sine test-signal generator.
///
/// `sample(t) = ampl * sin(2π * periods * t + phi) + dc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWaveKernel<F>
where
    F: RealField + Copy,
{
    shape: WaveShape<F>,
}

impl<F> SineWaveKernel<F>
where
    F: RealField + Copy,
{
    fn sample(&self, t: F) -> F {
        self.shape.ampl * self.shape.phase(t).sin() + self.shape.dc
    }
}

impl<F> KernelLifecycle for SineWaveKernel<F>
where
    F: RealField + Copy + FromPrimitive,
{
    type Config = WaveConfig<F>;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        Ok(Self {
            shape: WaveShape::try_new(config)?,
        })
    }
}

impl<F> SineWave1D<F> for SineWaveKernel<F>
where
    F: RealField + Copy,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> core::result::Result<(), ExecError>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
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
        out.iter_mut()
            .zip(input.iter())
            .for_each(|(out, &t)| *out = self.sample(t));
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> core::result::Result<Vec<F>, ExecError>
    where
        I: Read1D<F> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecError::from)?;
        Ok(input.iter().map(|&t| self.sample(t)).collect())
    }
}

/// Cosine signal over a normalized time axis.
///
/// `y[i] = ampl * cos(2π * periods * t[i] + phi_deg°) + dc`.
#[cfg(feature = "alloc")]
pub fn cosine<F>(t: &[F], periods: F, ampl: F, phi_deg: F, dc: F) -> Result<Vec<F>>
where
    F: RealField + Copy + FromPrimitive,
{
    let kernel = CosineWaveKernel::try_new(WaveConfig {
        periods,
        ampl,
        phi_deg,
        dc,
    })?;
    Ok(kernel.run_alloc(t)?)
}

/// Sine signal over a normalized time axis.
///
/// `y[i] = ampl * sin(2π * periods * t[i] + phi_deg°) + dc`.
#[cfg(feature = "alloc")]
pub fn sine<F>(t: &[F], periods: F, ampl: F, phi_deg: F, dc: F) -> Result<Vec<F>>
where
    F: RealField + Copy + FromPrimitive,
{
    let kernel = SineWaveKernel::try_new(WaveConfig {
        periods,
        ampl,
        phi_deg,
        dc,
    })?;
    Ok(kernel.run_alloc(t)?)
}
