// src/lib.rs

//! `quop` - Single-qubit operator algebra
//!
//! This library provides 2x2 complex operators together with the handful of
//! numerical routines needed to draw and animate them: a Pauli-basis
//! breakdown that isolates the global phase, a closed-form singular value
//! decomposition used to repair near-unitary input, and shortest-arc
//! interpolation between unitaries.

pub mod core;
pub mod decomposition;
pub mod interpolation;
pub mod parsing;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{ComplexExt, Quop, QuopError};
pub use decomposition::{PauliDecomposition, Repair, RepairConfig, RepairSyndrome, Svd};
pub use interpolation::{Frame, Interpolator, InterpolatorConfig, sin_scale_ratio, ulerp};
pub use parsing::{parse_complex, parse_operator};
pub use validation::{
    approx_eq,
    check_non_negative_diagonal,
    check_unitarity,
    unitarity_deviation,
};

// Example 1: Halfway from I to X
// The midpoint of the shortest arc between the identity and a bit flip is a
// quarter turn about X, i.e. the square root of X.
/// ```
/// use quop::{Quop, approx_eq, check_unitarity};
/// use num_complex::Complex64;
///
/// let half = Quop::identity().ulerp(&Quop::pauli_x(), 0.5);
///
/// let sqrt_x = Quop::new(
///     Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5),
///     Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5),
/// );
/// assert!(approx_eq(&half, &sqrt_x, 1e-9));
/// assert!(check_unitarity(&half, None).is_ok());
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Repairing a typed-in matrix
// A user enters a slightly non-unitary matrix as text; the SVD repair snaps
// it back onto the unitary group and reports what it had to do.
/// ```
/// use quop::{Quop, QuopError, RepairSyndrome, check_unitarity};
///
/// # fn main() -> Result<(), QuopError> {
/// let entered: Quop = "0.7, 0.7, 0.7, -0.7".parse()?;
/// let repair = entered.repair();
///
/// // Both singular values are 0.7 * sqrt(2) ≈ 0.99: close enough to one.
/// assert_eq!(repair.syndrome, RepairSyndrome::AlreadyUnitary);
/// check_unitarity(&repair.operator, None)?;
///
/// let svd = Quop::new(2.0, 0.0, 0.0, 0.5).svd();
/// let (s1, s2) = svd.singular_values();
/// assert!((s1 - 2.0).abs() < 1e-12 && (s2 - 0.5).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
