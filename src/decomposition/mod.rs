// src/decomposition/mod.rs

//! Canonical decompositions of single-qubit operators.
//!
//! - [`PauliDecomposition`] (`ubreakdown`): coordinates along `{I, X, Y, Z}`
//!   with the global phase factored out.
//! - [`svd`]: closed-form singular value decomposition of real and complex
//!   2x2 matrices, and the unitary repair built on it.

pub mod svd;

pub use svd::{Repair, RepairConfig, RepairSyndrome, Svd, real_svd_2x2};

use crate::core::{ComplexExt, Quop};
use num_complex::Complex64;

/// An operator written as `phase * (i·t·I + x·X + y·Y + z·Z)`.
///
/// For a unitary input the four coefficients are real and form a unit
/// vector, i.e. a point on the double cover of the Bloch-sphere rotations.
/// The identity weight carries the factor `i` because `t` is read off as
/// `(a + d) / 2i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PauliDecomposition {
    /// Weight along the identity.
    pub t: f64,
    /// Weight along Pauli `X`.
    pub x: f64,
    /// Weight along Pauli `Y`.
    pub y: f64,
    /// Weight along Pauli `Z`.
    pub z: f64,
    /// Unit global phase factor.
    pub phase: Complex64,
}

impl PauliDecomposition {
    /// Decomposes `m`.
    ///
    /// The phase is taken from whichever raw coefficient has the largest
    /// squared magnitude, scanning `t, x, y, z` in that order with a strict
    /// comparison, so the earliest candidate wins ties. Only the real parts of
    /// the phase-stripped coefficients are kept; their imaginary parts vanish
    /// when `m` is unitary (up to a real scale).
    pub fn of(m: &Quop) -> Self {
        let (a, b, c, d) = (m.a(), m.b(), m.c(), m.d());

        // (a+d)/(2i), (b+c)/2, (b-c)/(-2i), (a-d)/2
        let t = (a + d) * Complex64::new(0.0, -0.5);
        let x = (b + c).unscale(2.0);
        let y = (b - c) * Complex64::new(0.0, 0.5);
        let z = (a - d).unscale(2.0);

        let mut best = t;
        for candidate in [x, y, z] {
            if candidate.norm2() > best.norm2() {
                best = candidate;
            }
        }
        let p = best.unit();

        // p is a unit value, so dividing is multiplying by its conjugate over |p|².
        let strip = |v: Complex64| (v * p.conj()).unscale(p.norm2());
        Self {
            t: strip(t).re,
            x: strip(x).re,
            y: strip(y).re,
            z: strip(z).re,
            phase: p,
        }
    }

    /// The real coordinates `[t, x, y, z]`.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.t, self.x, self.y, self.z]
    }

    /// Four-dimensional dot product of the coordinates.
    pub fn dot(&self, other: &PauliDecomposition) -> f64 {
        self.t * other.t + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Rebuilds the operator. Inverse of [`PauliDecomposition::of`] for unitary inputs.
    pub fn recompose(&self) -> Quop {
        let i = Complex64::i();
        Quop::new(
            i * self.t + self.z,
            Complex64::new(self.x, -self.y),
            Complex64::new(self.x, self.y),
            i * self.t - self.z,
        )
        .scaled_by(self.phase)
    }
}

impl Quop {
    /// Pauli-basis breakdown with the global phase isolated.
    pub fn ubreakdown(&self) -> PauliDecomposition {
        PauliDecomposition::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{approx_eq, random_unitary};
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_identity_breakdown() {
        let b = Quop::identity().ubreakdown();
        assert_abs_diff_eq!(b.t, 1.0, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.x, 0.0, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.y, 0.0, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.z, 0.0, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.phase, Complex64::new(0.0, -1.0), epsilon = TEST_TOLERANCE);
    }

    #[test]
    fn test_pauli_breakdowns() {
        let cases = [
            (Quop::pauli_x(), [0.0, 1.0, 0.0, 0.0]),
            (Quop::pauli_y(), [0.0, 0.0, 1.0, 0.0]),
            (Quop::pauli_z(), [0.0, 0.0, 0.0, 1.0]),
        ];
        for (op, expected) in cases {
            let b = op.ubreakdown();
            for (got, want) in b.coefficients().iter().zip(expected) {
                assert_abs_diff_eq!(*got, want, epsilon = TEST_TOLERANCE);
            }
            assert_abs_diff_eq!(b.phase, Complex64::new(1.0, 0.0), epsilon = TEST_TOLERANCE);
        }
    }

    #[test]
    fn test_hadamard_tie_goes_to_x() {
        // x and z have identical magnitude; x is scanned first.
        let b = Quop::hadamard().ubreakdown();
        assert_abs_diff_eq!(b.t, 0.0, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.x, FRAC_1_SQRT_2, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.y, 0.0, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.z, FRAC_1_SQRT_2, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.phase, Complex64::new(1.0, 0.0), epsilon = TEST_TOLERANCE);
    }

    #[test]
    fn test_tie_between_differently_phased_candidates() {
        // t = -i and x = 1 both have magnitude one; t is first, so its phase wins.
        let b = Quop::new(1.0, 1.0, 1.0, 1.0).ubreakdown();
        assert_abs_diff_eq!(b.phase, Complex64::new(0.0, -1.0), epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(b.t, 1.0, epsilon = TEST_TOLERANCE);
    }

    #[test]
    fn test_zero_operator_breakdown_is_total() {
        let b = Quop::from_entries([Complex64::new(0.0, 0.0); 4]).ubreakdown();
        assert_eq!(b.coefficients(), [0.0; 4]);
        assert_abs_diff_eq!(b.phase.norm(), 1.0, epsilon = TEST_TOLERANCE);
    }

    #[test]
    fn test_random_unitaries_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let u = random_unitary(&mut rng);
            let b = u.ubreakdown();
            assert_abs_diff_eq!(b.dot(&b), 1.0, epsilon = 1e-9);
            assert!(approx_eq(&b.recompose(), &u, 1e-9), "recompose mismatch for {}", u);
        }
    }
}
