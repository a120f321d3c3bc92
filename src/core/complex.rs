// src/core/complex.rs

//! Scalar arithmetic for operator entries.
//!
//! Entries are plain `num_complex::Complex64` values, so `+`, `-`, `*` and
//! `conj()` come straight from `num-complex`. The extension trait adds the few
//! operations whose behaviour on degenerate input is pinned down here: checked
//! division, and a `unit()` normalisation that stays total near zero.

use super::constants::quop_constants::UNIT_FALLBACK_THRESHOLD;
use super::error::QuopError;
use num_complex::Complex64;

/// Extra scalar operations used throughout the decomposition pipeline.
///
/// Every right-hand operand accepts anything convertible into a `Complex64`,
/// so bare reals (`2.0`) and complex values are interchangeable.
pub trait ComplexExt {
    /// Divides by `rhs`, failing on an exactly zero divisor.
    fn divided_by(self, rhs: impl Into<Complex64>) -> Result<Complex64, QuopError>;

    /// Squared magnitude.
    fn norm2(self) -> f64;

    /// Phase angle `atan2(im, re)`, in `(-π, π]`.
    fn phase(self) -> f64;

    /// Rescales to magnitude one.
    ///
    /// Values with magnitude below `UNIT_FALLBACK_THRESHOLD` are rebuilt from
    /// the phase angle alone as `cos θ - i sin θ`. Note the conjugated sign:
    /// the phase-cancellation matrices of the SVD depend on it. In particular
    /// `0.unit() == 1`.
    fn unit(self) -> Complex64;
}

impl ComplexExt for Complex64 {
    fn divided_by(self, rhs: impl Into<Complex64>) -> Result<Complex64, QuopError> {
        let rhs = rhs.into();
        let d = rhs.norm_sqr();
        if d == 0.0 {
            return Err(QuopError::DivisionByZero {
                message: format!("cannot divide {} by {}", self, rhs),
            });
        }
        let n = self * rhs.conj();
        Ok(Complex64::new(n.re / d, n.im / d))
    }

    fn norm2(self) -> f64 {
        self.norm_sqr()
    }

    fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    fn unit(self) -> Complex64 {
        let m = self.norm2().sqrt();
        if m < UNIT_FALLBACK_THRESHOLD {
            let theta = self.phase();
            return Complex64::new(theta.cos(), -theta.sin());
        }
        self.unscale(m)
    }
}

/// The unit complex value `e^(iθ)`.
pub fn unit_from_angle(theta: f64) -> Complex64 {
    Complex64::new(theta.cos(), theta.sin())
}
