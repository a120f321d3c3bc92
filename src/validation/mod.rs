// src/validation/mod.rs

//! Provides functions to validate operators and decomposition factors.

use crate::core::{Quop, QuopError};
use num_complex::Complex64;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use std::f64::consts::{PI, TAU};

// Default tolerance values (can be overridden by caller)
const DEFAULT_UNITARY_TOLERANCE: f64 = 1e-9;
const DEFAULT_DIAGONAL_TOLERANCE: f64 = 1e-12;

// --- Helper Functions ---

/// Uniform sample from `[0, 1)`.
fn unit_interval<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardUniform.sample(rng)
}

/// Largest entry magnitude of `a - b`.
fn max_entry_distance(a: &Quop, b: &Quop) -> f64 {
    a.entries()
        .iter()
        .zip(b.entries().iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

// --- Public Validation Functions ---

/// How far `op * op†` is from the identity, measured as the largest entry
/// magnitude of the difference. Zero for an exactly unitary operator.
pub fn unitarity_deviation(op: &Quop) -> f64 {
    max_entry_distance(&op.times(&op.adjoint()), &Quop::identity())
}

/// Checks that the operator is unitary (`U * U† ≈ I`).
///
/// # Arguments
/// * `op` - The operator to check.
/// * `tolerance` - Allowed entrywise deviation from the identity (defaults to 1e-9).
///
/// # Returns
/// * `Ok(())` if unitary within tolerance.
/// * `Err(QuopError::NonUnitary)` otherwise.
pub fn check_unitarity(op: &Quop, tolerance: Option<f64>) -> Result<(), QuopError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_UNITARY_TOLERANCE);
    let deviation = unitarity_deviation(op);
    if deviation > effective_tolerance {
        Err(QuopError::NonUnitary {
            message: format!(
                "U * U† deviates from I by {} (Deviation > {}) for {}",
                deviation, effective_tolerance, op
            ),
        })
    } else {
        Ok(())
    }
}

/// `true` when [`check_unitarity`] passes.
pub fn is_unitary(op: &Quop, tolerance: Option<f64>) -> bool {
    check_unitarity(op, tolerance).is_ok()
}

/// Checks that the operator is diagonal with non-negative real entries,
/// the shape required of a singular value factor.
///
/// # Arguments
/// * `op` - The operator to check.
/// * `tolerance` - Magnitude below which off-diagonal and imaginary parts
///   count as zero, and below which negative diagonal values are accepted
///   (defaults to 1e-12).
pub fn check_non_negative_diagonal(op: &Quop, tolerance: Option<f64>) -> Result<(), QuopError> {
    let tol = tolerance.unwrap_or(DEFAULT_DIAGONAL_TOLERANCE);
    if op.b().norm() > tol || op.c().norm() > tol {
        return Err(QuopError::InvalidDecomposition {
            message: format!("Singular value factor is not diagonal: {}", op),
        });
    }
    for s in [op.a(), op.d()] {
        if s.im.abs() > tol || s.re < -tol {
            return Err(QuopError::InvalidDecomposition {
                message: format!("Singular value {} is not a non-negative real", s),
            });
        }
    }
    Ok(())
}

/// Componentwise comparison of two operators.
pub fn approx_eq(a: &Quop, b: &Quop, tolerance: f64) -> bool {
    max_entry_distance(a, b) <= tolerance
}

/// Samples a unitary operator: a uniformly random global phase times a
/// rotation by a uniform angle about a uniformly random Bloch-sphere axis.
pub fn random_unitary<R: Rng + ?Sized>(rng: &mut R) -> Quop {
    let phase = unit_interval(rng) * TAU - PI;
    let angle = unit_interval(rng) * TAU;
    let nz = unit_interval(rng) * 2.0 - 1.0;
    let azimuth = unit_interval(rng) * TAU;
    let radial = (1.0 - nz * nz).sqrt();
    let (nx, ny) = (radial * azimuth.cos(), radial * azimuth.sin());

    // e^(iφ) (cos(θ/2) I - i sin(θ/2) n·σ)
    let (s, c) = (angle / 2.0).sin_cos();
    let rotation = Quop::new(
        Complex64::new(c, -s * nz),
        Complex64::new(-s * ny, -s * nx),
        Complex64::new(s * ny, -s * nx),
        Complex64::new(c, s * nz),
    );
    rotation.scaled_by(Complex64::from_polar(1.0, phase))
}
