//! Direct-evaluation real-input DFT.
//!
//! The transform is the plain `O(N^2)` matrix product against the DFT
//! coefficient matrix, not a fast transform. The host scene language feeds
//! it short sequences (tens of samples), where the direct evaluation is
//! simple, branch-free, and numerically transparent; an FFT backend is
//! deliberately out of scope.
//!
//! For a real input of length `N` only the non-redundant half-spectrum is
//! produced: `K = N/2 + 1` bins, bin 0 being DC and bin `N/2` (even `N`)
//! Nyquist.

use nalgebra::RealField;
use num_traits::FromPrimitive;

use crate::kernel::{ConfigError, ExecError, KernelLifecycle, Read1D, Write1D};
use crate::traits::RealDft1D;

#[cfg(feature = "alloc")]
use crate::error::Result;
#[cfg(feature = "alloc")]
use crate::spectrum::SpectrumPair;
#[cfg(feature = "alloc")]
use crate::traits::DftBasisDesign;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Shared coefficient rule for a length-`n` real-input DFT.
///
/// Coefficients are `cos`/`sin` of `-(2π/n) * ((k*i) mod n)`. The `mod n`
/// reduction before scaling is load-bearing: it keeps the angle argument
/// bounded however large `k*i` grows, so no precision is lost to
/// large-angle reduction inside the trig functions.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DftPlan<F>
where
    F: RealField + Copy,
{
    n: usize,
    bins: usize,
    step: F,
    n_f: F,
}

impl<F> DftPlan<F>
where
    F: RealField + Copy + FromPrimitive,
{
    fn try_new(n: usize) -> core::result::Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ZeroLength { arg: "n" });
        }
        let n_f = F::from_usize(n).ok_or(ConfigError::InvalidArgument {
            arg: "n",
            reason: "sequence length is not representable",
        })?;
        Ok(Self {
            n,
            bins: n / 2 + 1,
            step: F::two_pi() / n_f,
            n_f,
        })
    }
}

impl<F> DftPlan<F>
where
    F: RealField + Copy,
{
    /// Iterate the `(cos, sin)` coefficients of bin row `k`.
    ///
    /// `k_f` must be `k` promoted to `F`; callers maintain it by counting
    /// so the inner loop stays free of fallible integer conversion.
    fn coeff_row(&self, k: usize, k_f: F) -> CoeffRow<'_, F> {
        CoeffRow {
            plan: self,
            k,
            k_f,
            idx: 0,
            idx_f: F::zero(),
            remaining: self.n,
        }
    }
}

/// Row iterator over DFT matrix coefficients.
///
/// Tracks `(k*i) mod n` as a paired integer/float index; both are exact,
/// so the emitted angle is exactly `-(2π/n) * ((k*i) mod n)`.
struct CoeffRow<'a, F>
where
    F: RealField + Copy,
{
    plan: &'a DftPlan<F>,
    k: usize,
    k_f: F,
    idx: usize,
    idx_f: F,
    remaining: usize,
}

impl<'a, F> Iterator for CoeffRow<'a, F>
where
    F: RealField + Copy,
{
    type Item = (F, F);

    fn next(&mut self) -> Option<(F, F)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let angle = -(self.plan.step * self.idx_f);
        self.idx += self.k;
        self.idx_f += self.k_f;
        if self.idx >= self.plan.n {
            self.idx -= self.plan.n;
            self.idx_f -= self.plan.n_f;
        }
        Some((angle.cos(), angle.sin()))
    }
}

/// Dense coefficient matrices of a length-`N` real-input DFT.
///
/// Flat row-major `bins x len` storage for the real (`cos`) and imaginary
/// (`sin`) parts; row `k` holds the coefficients the transform dots with
/// the input to produce bin `k`.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
pub struct DftBasis<F> {
    bins: usize,
    len: usize,
    re: Vec<F>,
    im: Vec<F>,
}

#[cfg(feature = "alloc")]
impl<F> DftBasis<F> {
    /// Number of half-spectrum bin rows (`N/2 + 1`).
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Time-domain sequence length `N` (columns per row).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the matrix is empty (never true for a validated build).
    pub fn is_empty(&self) -> bool {
        self.bins == 0
    }

    /// Real (`cos`) coefficient row for bin `k`.
    pub fn re_row(&self, k: usize) -> &[F] {
        &self.re[k * self.len..(k + 1) * self.len]
    }

    /// Imaginary (`sin`) coefficient row for bin `k`.
    pub fn im_row(&self, k: usize) -> &[F] {
        &self.im[k * self.len..(k + 1) * self.len]
    }
}

/// Constructor config for [`DftBasisKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DftBasisConfig {
    /// Time-domain sequence length `N`; must be at least 1.
    pub n: usize,
}

/// Trait-first design kernel materializing the DFT coefficient matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DftBasisKernel<F>
where
    F: RealField + Copy,
{
    plan: DftPlan<F>,
}

impl<F> KernelLifecycle for DftBasisKernel<F>
where
    F: RealField + Copy + FromPrimitive,
{
    type Config = DftBasisConfig;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        Ok(Self {
            plan: DftPlan::try_new(config.n)?,
        })
    }
}

#[cfg(feature = "alloc")]
impl<F> DftBasisDesign<F> for DftBasisKernel<F>
where
    F: RealField + Copy,
{
    fn run_alloc(&self) -> core::result::Result<DftBasis<F>, ExecError> {
        let plan = &self.plan;
        let mut re = Vec::with_capacity(plan.bins * plan.n);
        let mut im = Vec::with_capacity(plan.bins * plan.n);
        let mut k_f = F::zero();
        for k in 0..plan.bins {
            for (c, s) in plan.coeff_row(k, k_f) {
                re.push(c);
                im.push(s);
            }
            k_f += F::one();
        }
        Ok(DftBasis {
            bins: plan.bins,
            len: plan.n,
            re,
            im,
        })
    }
}

/// Constructor config for [`RealDftKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealDftConfig {
    /// Expected input length `N`; must be at least 1.
    pub n: usize,
}

/// Trait-first real-input DFT kernel.
///
/// Each output bin is the inner product of the input with the matching
/// coefficient row; bins are mutually independent. Coefficients are
/// generated on the fly from the shared plan, so the caller-buffer path
/// allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealDftKernel<F>
where
    F: RealField + Copy,
{
    plan: DftPlan<F>,
}

impl<F> RealDftKernel<F>
where
    F: RealField + Copy,
{
    /// Expected input length `N`.
    pub fn n(&self) -> usize {
        self.plan.n
    }

    /// Number of half-spectrum output bins (`N/2 + 1`).
    pub fn bins(&self) -> usize {
        self.plan.bins
    }
}

impl<F> KernelLifecycle for RealDftKernel<F>
where
    F: RealField + Copy + FromPrimitive,
{
    type Config = RealDftConfig;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        Ok(Self {
            plan: DftPlan::try_new(config.n)?,
        })
    }
}

impl<F> RealDft1D<F> for RealDftKernel<F>
where
    F: RealField + Copy,
{
    fn run_into<I, O1, O2>(
        &self,
        input: &I,
        out_re: &mut O1,
        out_im: &mut O2,
    ) -> core::result::Result<(), ExecError>
    where
        I: Read1D<F> + ?Sized,
        O1: Write1D<F> + ?Sized,
        O2: Write1D<F> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecError::from)?;
        if input.len() != self.plan.n {
            return Err(ExecError::LengthMismatch {
                arg: "input",
                expected: self.plan.n,
                got: input.len(),
            });
        }
        let out_re = out_re.write_slice_mut().map_err(ExecError::from)?;
        if out_re.len() != self.plan.bins {
            return Err(ExecError::LengthMismatch {
                arg: "out_re",
                expected: self.plan.bins,
                got: out_re.len(),
            });
        }
        let out_im = out_im.write_slice_mut().map_err(ExecError::from)?;
        if out_im.len() != self.plan.bins {
            return Err(ExecError::LengthMismatch {
                arg: "out_im",
                expected: self.plan.bins,
                got: out_im.len(),
            });
        }

        let mut k_f = F::zero();
        for k in 0..self.plan.bins {
            let mut acc_re = F::zero();
            let mut acc_im = F::zero();
            for (&x, (c, s)) in input.iter().zip(self.plan.coeff_row(k, k_f)) {
                acc_re += x * c;
                acc_im += x * s;
            }
            out_re[k] = acc_re;
            out_im[k] = acc_im;
            k_f += F::one();
        }
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> core::result::Result<SpectrumPair<F>, ExecError>
    where
        I: Read1D<F> + ?Sized,
    {
        let mut re = alloc::vec![F::zero(); self.plan.bins];
        let mut im = alloc::vec![F::zero(); self.plan.bins];
        self.run_into(input, re.as_mut_slice(), im.as_mut_slice())?;
        Ok(SpectrumPair::try_new(re, im)?)
    }
}

/// Real-input DFT of `x`, returning the `len(x)/2 + 1` bin half-spectrum.
///
/// Direct `O(N^2)` evaluation; `x` must carry at least one sample.
#[cfg(feature = "alloc")]
pub fn rdft<F>(x: &[F]) -> Result<SpectrumPair<F>>
where
    F: RealField + Copy + FromPrimitive,
{
    let kernel = RealDftKernel::try_new(RealDftConfig { n: x.len() })?;
    Ok(kernel.run_alloc(x)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vecmath::allclose;
    use approx::assert_abs_diff_eq;

    fn impulse(len: usize, idx: usize) -> Vec<f64> {
        let mut x = vec![0.0; len];
        x[idx] = 1.0;
        x
    }

    #[test]
    fn basis_shape_and_bin_zero_rows() {
        for n in 1..=32usize {
            let kernel =
                DftBasisKernel::<f64>::try_new(DftBasisConfig { n }).expect("valid length");
            let basis = kernel.run_alloc().expect("basis build");
            assert_eq!(basis.bins(), n / 2 + 1);
            assert_eq!(basis.len(), n);
            // Bin 0 dots with unity: all-ones cos row, all-zeros sin row.
            for i in 0..n {
                assert_abs_diff_eq!(basis.re_row(0)[i], 1.0);
                assert_abs_diff_eq!(basis.im_row(0)[i], 0.0);
            }
        }
    }

    #[test]
    fn zero_length_is_rejected_not_nan() {
        let err = DftBasisKernel::<f64>::try_new(DftBasisConfig { n: 0 }).expect_err("n = 0");
        assert_eq!(err, ConfigError::ZeroLength { arg: "n" });

        let err = RealDftKernel::<f64>::try_new(RealDftConfig { n: 0 }).expect_err("n = 0");
        assert_eq!(err, ConfigError::ZeroLength { arg: "n" });

        assert!(rdft::<f64>(&[]).is_err());
    }

    #[test]
    fn impulse_at_zero_has_flat_spectrum() {
        let spectrum = rdft(&impulse(7, 0)).expect("transform");
        assert_eq!(spectrum.len(), 4);
        for k in 0..4 {
            assert_abs_diff_eq!(spectrum.re()[k], 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(spectrum.im()[k], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn impulse_at_one_walks_the_unit_circle() {
        let spectrum = rdft(&impulse(8, 1)).expect("transform");
        let r = 0.5f64.sqrt();
        let expected_re = [1.0, r, 0.0, -r, -1.0];
        let expected_im = [0.0, -r, -1.0, -r, 0.0];
        for k in 0..5 {
            assert_abs_diff_eq!(spectrum.re()[k], expected_re[k], epsilon = 1e-12);
            assert_abs_diff_eq!(spectrum.im()[k], expected_im[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_signal_is_pure_dc() {
        for n in [7usize, 8] {
            let spectrum = rdft(&vec![1.0f64; n]).expect("transform");
            assert_abs_diff_eq!(spectrum.re()[0], n as f64, epsilon = 1e-12);
            for k in 1..spectrum.len() {
                assert_abs_diff_eq!(spectrum.re()[k], 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(spectrum.im()[k], 0.0, epsilon = 1e-12);
            }
            assert_abs_diff_eq!(spectrum.im()[0], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn run_into_validates_input_and_output_lengths() {
        let kernel = RealDftKernel::<f64>::try_new(RealDftConfig { n: 8 }).expect("kernel");
        let mut re = [0.0f64; 5];
        let mut im = [0.0f64; 5];

        let short = [0.0f64; 7];
        let err = kernel
            .run_into(&short, &mut re, &mut im)
            .expect_err("short input");
        assert!(matches!(
            err,
            ExecError::LengthMismatch {
                arg: "input",
                expected: 8,
                got: 7
            }
        ));

        let x = [0.0f64; 8];
        let mut short_im = [0.0f64; 4];
        let err = kernel
            .run_into(&x, &mut re, &mut short_im)
            .expect_err("short im buffer");
        assert!(matches!(
            err,
            ExecError::LengthMismatch {
                arg: "out_im",
                expected: 5,
                got: 4
            }
        ));
    }

    #[test]
    fn transform_agrees_with_materialized_basis() {
        let n = 12usize;
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin() + 0.25).collect();

        let basis = DftBasisKernel::<f64>::try_new(DftBasisConfig { n })
            .expect("basis kernel")
            .run_alloc()
            .expect("basis");
        let spectrum = rdft(&x).expect("transform");

        for k in 0..basis.bins() {
            let re_dot: f64 = basis.re_row(k).iter().zip(&x).map(|(c, v)| c * v).sum();
            let im_dot: f64 = basis.im_row(k).iter().zip(&x).map(|(s, v)| s * v).sum();
            assert_abs_diff_eq!(spectrum.re()[k], re_dot, epsilon = 1e-12);
            assert_abs_diff_eq!(spectrum.im()[k], im_dot, epsilon = 1e-12);
        }
    }

    #[test]
    fn large_bin_products_stay_precise() {
        // At n = 31 the raw k*i product reaches 465; the modular index keeps
        // the angle argument inside one turn regardless.
        let n = 31usize;
        let basis = DftBasisKernel::<f64>::try_new(DftBasisConfig { n })
            .expect("basis kernel")
            .run_alloc()
            .expect("basis");
        let k = basis.bins() - 1;
        for i in 0..n {
            let angle = -2.0 * core::f64::consts::PI * ((k * i) % n) as f64 / n as f64;
            assert_abs_diff_eq!(basis.re_row(k)[i], angle.cos(), epsilon = 1e-12);
            assert_abs_diff_eq!(basis.im_row(k)[i], angle.sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn spectrum_pair_lengths_always_agree() {
        for n in 1..=16usize {
            let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let spectrum = rdft(&x).expect("transform");
            assert_eq!(spectrum.re().len(), spectrum.im().len());
            assert!(allclose(spectrum.re(), spectrum.re(), 0.0, 0.0));
        }
    }
}
