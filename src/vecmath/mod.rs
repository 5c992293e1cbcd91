//! Vector algebra and floating-point comparison primitives.
//!
//! Free functions over real-valued slices, analogous to the small subset of
//! `numpy` the scene evaluator leans on (`arange`, `linspace`, `isclose`,
//! `allclose`). Elementwise operations that require equal operand lengths
//! fail with an explicit [`Error`] on mismatch; they never truncate or
//! zero-fill.

use nalgebra::RealField;
use num_traits::FromPrimitive;

use crate::error::{Error, Result};

use alloc::vec::Vec;

/// Arithmetic progression from `start` towards `stop` in increments of
/// `step`, inclusive of `stop` when it is hit exactly.
///
/// Returns an empty vector when the step direction cannot reach `stop`
/// (e.g. positive `step` with `stop < start`). A zero `step` has no
/// direction and is rejected.
pub fn arange<F>(start: F, step: F, stop: F) -> Result<Vec<F>>
where
    F: RealField + Copy,
{
    if step == F::zero() {
        return Err(Error::InvalidArg {
            arg: "step".into(),
            reason: "step must be nonzero".into(),
        });
    }
    let ascending = step > F::zero();
    let mut out = Vec::new();
    let mut v = start;
    while (ascending && v <= stop) || (!ascending && v >= stop) {
        out.push(v);
        v += step;
    }
    Ok(out)
}

/// Inclusive sub-sequence `x[start..=end]`.
///
/// Returns an empty vector when `end < start`; an `end` beyond the input is
/// an error rather than a panic.
pub fn slice_incl<F>(x: &[F], start: usize, end: usize) -> Result<Vec<F>>
where
    F: RealField + Copy,
{
    if end < start {
        return Ok(Vec::new());
    }
    if end >= x.len() {
        return Err(Error::LengthMismatch {
            arg: "end".into(),
            expected: end + 1,
            got: x.len(),
        });
    }
    Ok(x[start..=end].to_vec())
}

/// `n` evenly spaced samples over the half-open interval `[start, stop)`,
/// with step `(stop - start) / n`.
///
/// `n == 0` is rejected (the step would divide by zero).
pub fn linspace<F>(start: F, stop: F, n: usize) -> Result<Vec<F>>
where
    F: RealField + Copy + FromPrimitive,
{
    if n == 0 {
        return Err(Error::InvalidArg {
            arg: "n".into(),
            reason: "sample count must be at least 1".into(),
        });
    }
    let count = F::from_usize(n).ok_or_else(|| Error::InvalidArg {
        arg: "n".into(),
        reason: "sample count is not representable".into(),
    })?;
    let step = (stop - start) / count;
    let mut out = Vec::with_capacity(n);
    let mut v = start;
    for _ in 0..n {
        out.push(v);
        v += step;
    }
    Ok(out)
}

/// Total of all elements; `sum(&[]) == 0`.
pub fn sum<F>(x: &[F]) -> F
where
    F: RealField + Copy,
{
    x.iter().fold(F::zero(), |acc, &v| acc + v)
}

/// Elementwise sum of two equal-length vectors.
///
/// Length mismatch is an explicit error, never a truncated result.
pub fn add_vectors<F>(x: &[F], y: &[F]) -> Result<Vec<F>>
where
    F: RealField + Copy,
{
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            arg: "y".into(),
            expected: x.len(),
            got: y.len(),
        });
    }
    Ok(x.iter().zip(y.iter()).map(|(&a, &b)| a + b).collect())
}

/// Elementwise `x[i] + s`.
pub fn add_scalar<F>(x: &[F], s: F) -> Vec<F>
where
    F: RealField + Copy,
{
    x.iter().map(|&v| v + s).collect()
}

/// Elementwise boolean negation.
pub fn logical_not(b: &[bool]) -> Vec<bool> {
    b.iter().map(|&v| !v).collect()
}

/// True iff at least one element is true; `any(&[]) == false`.
pub fn any(b: &[bool]) -> bool {
    b.iter().any(|&v| v)
}

/// Replace `x[i]` with zero when `eps > 0` and `|x[i]| < eps`.
///
/// Zeroing is opt-in: `eps == 0` (or negative) leaves the input unchanged.
pub fn zero_if_close<F>(x: &[F], eps: F) -> Vec<F>
where
    F: RealField + Copy,
{
    if eps <= F::zero() {
        return x.to_vec();
    }
    x.iter()
        .map(|&v| if v.abs() < eps { F::zero() } else { v })
        .collect()
}

/// Elementwise closeness mask: `|a[i] - b[i]| <= atol + rtol * |a[i]|`.
///
/// The comparison is asymmetric; the relative tolerance scales with `a`,
/// the first operand. `a` sets the reference length: `b` may be longer
/// (extra elements are ignored) but must not be shorter.
pub fn isclose<F>(a: &[F], b: &[F], rtol: F, atol: F) -> Result<Vec<bool>>
where
    F: RealField + Copy,
{
    if b.len() < a.len() {
        return Err(Error::LengthMismatch {
            arg: "b".into(),
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y).abs() <= atol + rtol * x.abs())
        .collect())
}

/// True iff both vectors have equal length and every pair satisfies
/// [`isclose`]. Length mismatch yields `false`, not an error.
pub fn allclose<F>(a: &[F], b: &[F], rtol: F, atol: F) -> bool
where
    F: RealField + Copy,
{
    if a.len() != b.len() {
        return false;
    }
    isclose(a, b, rtol, atol).map_or(false, |mask| mask.iter().all(|&ok| ok))
}
