// src/interpolation/mod.rs

//! Shortest-arc interpolation between single-qubit unitaries.
//!
//! Each operator is split by [`Quop::ubreakdown`] into a global phase and a
//! unit 4-vector of Pauli coordinates. The coordinates are slerped along the
//! shorter great-circle arc (choosing the nearer of the two sheets of the
//! double cover), and the phase angle is moved along the shorter way round
//! the circle independently.

mod interpolator;

pub use interpolator::{Frame, Interpolator, InterpolatorConfig};

use crate::core::{ComplexExt, PI, Quop, SHORT_ARC_THRESHOLD, TAYLOR_THRESHOLD, unit_from_angle};
use std::f64::consts::TAU;
use tracing::trace;

/// `sin(θ·f) / sin(θ)`.
///
/// For `|θ| < TAYLOR_THRESHOLD` the ratio is evaluated from the leading terms
/// of the Taylor series, `f (1 - d f²) / (1 - d)` with `d = θ²/6`, which
/// tends to `f` instead of `0/0`.
pub fn sin_scale_ratio(theta: f64, factor: f64) -> f64 {
    if theta.abs() < TAYLOR_THRESHOLD {
        let d = theta * theta / 6.0;
        return factor * (1.0 - d * factor * factor) / (1.0 - d);
    }
    (theta * factor).sin() / theta.sin()
}

/// Wraps an angle into `[-π, π)`.
fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Interpolates from `u1` (at `t = 0`) to `u2` (at `t = 1`).
///
/// Both operators must be unitary; intermediate results are then unitary as
/// well. Identical operators (up to phase) hit the small-angle branch of
/// [`sin_scale_ratio`] and are handled without division by zero.
pub fn ulerp(u1: &Quop, u2: &Quop, t: f64) -> Quop {
    let b1 = u1.ubreakdown();
    let b2 = u2.ubreakdown();
    let p1 = b1.phase;
    let mut p2 = b2.phase;

    let mut dot = b1.dot(&b2);
    if dot < -SHORT_ARC_THRESHOLD {
        // Same rotation, other sheet: take the shorter arc.
        p2 = -p2;
        dot = -dot;
    }
    let dot = dot.min(1.0);

    let n1 = u1.scaled_by(p1.conj());
    let n2 = u2.scaled_by(p2.conj());
    let theta = dot.acos();

    let c1 = sin_scale_ratio(theta, 1.0 - t);
    let c2 = sin_scale_ratio(theta, t);
    let n3 = n1.scaled_by(c1).plus(&n2.scaled_by(c2));

    let phase_angle_1 = p1.phase();
    let phase_angle_2 = p2.phase();
    let phase_drift = wrap_angle(phase_angle_2 - phase_angle_1);
    let phase_angle_3 = phase_angle_1 + phase_drift * t;
    trace!(t, theta, phase_drift, "ulerp");

    n3.scaled_by(unit_from_angle(phase_angle_3))
}

impl Quop {
    /// Interpolates from `self` (at `t = 0`) to `other` (at `t = 1`); see [`ulerp`].
    pub fn ulerp(&self, other: &Quop, t: f64) -> Quop {
        ulerp(self, other, t)
    }
}
