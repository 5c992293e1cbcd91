//! Magnitude/phase conversion for (re, im) vector pairs.
//!
//! Complex-valued data throughout the crate is carried as two equal-length
//! real vectors; these kernels present such a pair in polar form. Angles
//! are reported in degrees in `(-180, 180]`, matching the convention of the
//! host scene language.

use nalgebra::RealField;
use num_traits::FromPrimitive;

use crate::kernel::{ConfigError, ExecError, KernelLifecycle, Read1D, Write1D};
use crate::traits::{ComplexAbs1D, ComplexAngle1D};

#[cfg(feature = "alloc")]
use crate::error::Result;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

fn paired_slices<'a, T, I1, I2>(
    re: &'a I1,
    im: &'a I2,
) -> core::result::Result<(&'a [T], &'a [T]), ExecError>
where
    I1: Read1D<T> + ?Sized,
    I2: Read1D<T> + ?Sized,
{
    let re = re.read_slice().map_err(ExecError::from)?;
    let im = im.read_slice().map_err(ExecError::from)?;
    if im.len() != re.len() {
        return Err(ExecError::LengthMismatch {
            arg: "im",
            expected: re.len(),
            got: im.len(),
        });
    }
    Ok((re, im))
}

/// Constructor config for [`ComplexAbsKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexAbsConfig;

/// Trait-first elementwise complex magnitude kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexAbsKernel;

impl KernelLifecycle for ComplexAbsKernel {
    type Config = ComplexAbsConfig;

    fn try_new(_config: Self::Config) -> core::result::Result<Self, ConfigError> {
        Ok(Self)
    }
}

impl<F> ComplexAbs1D<F> for ComplexAbsKernel
where
    F: RealField + Copy,
{
    fn run_into<I1, I2, O>(
        &self,
        re: &I1,
        im: &I2,
        out: &mut O,
    ) -> core::result::Result<(), ExecError>
    where
        I1: Read1D<F> + ?Sized,
        I2: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
    {
        let (re, im) = paired_slices(re, im)?;
        let out = out.write_slice_mut().map_err(ExecError::from)?;
        if out.len() != re.len() {
            return Err(ExecError::LengthMismatch {
                arg: "out",
                expected: re.len(),
                got: out.len(),
            });
        }
        out.iter_mut()
            .zip(re.iter().zip(im.iter()))
            .for_each(|(out, (&a, &b))| *out = (a * a + b * b).sqrt());
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I1, I2>(&self, re: &I1, im: &I2) -> core::result::Result<Vec<F>, ExecError>
    where
        I1: Read1D<F> + ?Sized,
        I2: Read1D<F> + ?Sized,
    {
        let (re, im) = paired_slices(re, im)?;
        Ok(re
            .iter()
            .zip(im.iter())
            .map(|(&a, &b)| (a * a + b * b).sqrt())
            .collect())
    }
}

/// Constructor config for [`ComplexAngleKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexAngleConfig<F>
where
    F: RealField + Copy,
{
    /// Origin guard: when positive, any bin with both `|re|` and `|im|`
    /// below `eps` reports an angle of exactly zero instead of the
    /// ill-conditioned `atan2` near the origin. Zero disables the guard.
    pub eps: F,
}

/// Trait-first elementwise complex phase-angle kernel (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexAngleKernel<F>
where
    F: RealField + Copy,
{
    eps: F,
    rad_to_deg: F,
}

impl<F> ComplexAngleKernel<F>
where
    F: RealField + Copy,
{
    /// Return the configured origin guard.
    pub fn eps(&self) -> F {
        self.eps
    }

    fn sample(&self, re: F, im: F) -> F {
        if self.eps > F::zero() && re.abs() < self.eps && im.abs() < self.eps {
            return F::zero();
        }
        im.atan2(re) * self.rad_to_deg
    }
}

impl<F> KernelLifecycle for ComplexAngleKernel<F>
where
    F: RealField + Copy + FromPrimitive,
{
    type Config = ComplexAngleConfig<F>;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        if config.eps < F::zero() {
            return Err(ConfigError::InvalidArgument {
                arg: "eps",
                reason: "origin guard must be >= 0",
            });
        }
        let half_turn = F::from_u8(180).ok_or(ConfigError::InvalidArgument {
            arg: "eps",
            reason: "unable to convert degrees for numeric type",
        })?;
        Ok(Self {
            eps: config.eps,
            rad_to_deg: half_turn / F::pi(),
        })
    }
}

impl<F> ComplexAngle1D<F> for ComplexAngleKernel<F>
where
    F: RealField + Copy,
{
    fn run_into<I1, I2, O>(
        &self,
        re: &I1,
        im: &I2,
        out: &mut O,
    ) -> core::result::Result<(), ExecError>
    where
        I1: Read1D<F> + ?Sized,
        I2: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
    {
        let (re, im) = paired_slices(re, im)?;
        let out = out.write_slice_mut().map_err(ExecError::from)?;
        if out.len() != re.len() {
            return Err(ExecError::LengthMismatch {
                arg: "out",
                expected: re.len(),
                got: out.len(),
            });
        }
        out.iter_mut()
            .zip(re.iter().zip(im.iter()))
            .for_each(|(out, (&a, &b))| *out = self.sample(a, b));
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I1, I2>(&self, re: &I1, im: &I2) -> core::result::Result<Vec<F>, ExecError>
    where
        I1: Read1D<F> + ?Sized,
        I2: Read1D<F> + ?Sized,
    {
        let (re, im) = paired_slices(re, im)?;
        Ok(re
            .iter()
            .zip(im.iter())
            .map(|(&a, &b)| self.sample(a, b))
            .collect())
    }
}

/// Elementwise `sqrt(re[i]^2 + im[i]^2)` over an equal-length pair.
#[cfg(feature = "alloc")]
pub fn complex_abs<F>(re: &[F], im: &[F]) -> Result<Vec<F>>
where
    F: RealField + Copy,
{
    let kernel = ComplexAbsKernel::try_new(ComplexAbsConfig)?;
    Ok(kernel.run_alloc(re, im)?)
}

/// Elementwise `atan2(im[i], re[i])` in degrees, range `(-180, 180]`.
///
/// With `eps > 0`, bins whose real and imaginary magnitudes both fall below
/// `eps` report an angle of zero; `eps == 0` uses the raw `atan2` result
/// everywhere (note that signed-zero inputs may yield ±180°).
#[cfg(feature = "alloc")]
pub fn complex_angle_deg<F>(re: &[F], im: &[F], eps: F) -> Result<Vec<F>>
where
    F: RealField + Copy + FromPrimitive,
{
    let kernel = ComplexAngleKernel::try_new(ComplexAngleConfig { eps })?;
    Ok(kernel.run_alloc(re, im)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn abs_of_three_four_is_five() {
        let mag = complex_abs(&[3.0f64, 0.0], &[4.0, 0.0]).expect("equal lengths");
        assert_relative_eq!(mag[0], 5.0);
        assert_relative_eq!(mag[1], 0.0);
    }

    #[test]
    fn abs_rejects_mismatched_pair() {
        let err = complex_abs(&[1.0f64, 2.0], &[1.0]).expect_err("length mismatch");
        assert_eq!(
            err,
            crate::error::Error::LengthMismatch {
                arg: "im".into(),
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn angle_covers_all_quadrants_in_degrees() {
        let re = [1.0f64, 0.0, -1.0, 0.0, 1.0];
        let im = [0.0f64, 1.0, 0.0, -1.0, 1.0];
        let deg = complex_angle_deg(&re, &im, 0.0).expect("equal lengths");
        assert_relative_eq!(deg[0], 0.0);
        assert_relative_eq!(deg[1], 90.0);
        assert_relative_eq!(deg[2], 180.0);
        assert_relative_eq!(deg[3], -90.0);
        assert_relative_eq!(deg[4], 45.0);
    }

    #[test]
    fn origin_guard_forces_zero_only_when_enabled() {
        let re = [1e-14f64];
        let im = [-1e-14f64];

        let guarded = complex_angle_deg(&re, &im, 1e-10).expect("guarded");
        assert_relative_eq!(guarded[0], 0.0);

        let raw = complex_angle_deg(&re, &im, 0.0).expect("raw");
        assert_relative_eq!(raw[0], -45.0);
    }

    #[test]
    fn angle_kernel_rejects_negative_eps() {
        let err = ComplexAngleKernel::<f64>::try_new(ComplexAngleConfig { eps: -1.0 })
            .expect_err("negative eps");
        assert_eq!(
            err,
            ConfigError::InvalidArgument {
                arg: "eps",
                reason: "origin guard must be >= 0",
            }
        );
    }

    #[test]
    fn run_into_checks_output_length() {
        let kernel = ComplexAbsKernel::try_new(ComplexAbsConfig).expect("kernel");
        let re = [1.0f64, 2.0];
        let im = [0.0f64, 0.0];
        let mut out = [0.0f64; 1];
        let err = kernel
            .run_into(&re, &im, &mut out)
            .expect_err("short output");
        assert!(matches!(
            err,
            ExecError::LengthMismatch {
                arg: "out",
                expected: 2,
                got: 1
            }
        ));
    }
}
