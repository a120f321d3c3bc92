// src/decomposition/svd.rs

//! Closed-form singular value decomposition of 2x2 matrices.
//!
//! The complex case is reduced to the real one by a fixed sequence of
//! phase-cancelling and rotating factors; the real case is solved directly
//! with the sum/difference-of-angles identity. No iteration is involved and
//! every input, degenerate or not, produces a decomposition.

use crate::core::Quop;
use tracing::{debug, trace, warn};

/// Factors `u * s * v` of a 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Svd {
    /// Left unitary factor.
    pub u: Quop,
    /// Real diagonal factor holding the singular values.
    pub s: Quop,
    /// Right unitary factor.
    pub v: Quop,
}

impl Svd {
    /// Multiplies the factors back together.
    pub fn reconstruct(&self) -> Quop {
        self.u.times(&self.s).times(&self.v)
    }

    /// The diagonal of `s`, `(first, second)`.
    pub fn singular_values(&self) -> (f64, f64) {
        (self.s.a().re, self.s.d().re)
    }

    /// Makes the second singular value non-negative by moving its sign into
    /// the second row of `v`.
    ///
    /// The first value is already `s0 + sD >= |s0 - sD|`, so afterwards the
    /// values are also sorted in descending order.
    pub fn canonicalize(self) -> Svd {
        let (s1, s2) = self.singular_values();
        if s2 >= 0.0 {
            return self;
        }
        Svd {
            u: self.u,
            s: Quop::diagonal(s1, -s2),
            v: Quop::diagonal(1.0, -1.0).times(&self.v),
        }
    }
}

/// SVD of a real 2x2 matrix; imaginary parts of the entries are ignored.
///
/// Splits `[a, b; c, d]` into a scaled rotation and a scaled reflection:
///
/// ```text
/// t = a + d    x = c - b    (rotation part)
/// z = a - d    y = -(b + c) (reflection part)
/// ```
///
/// giving `u = R(θ0 - θD)`, `s = diag(s0 + sD, s0 - sD)`, `v = R(θ0 + θD)`
/// with `θ0 = atan2(x, t)/2`, `θD = atan2(y, z)/2`, `s0 = |(t, x)|/2`,
/// `sD = |(z, y)|/2`. For lower-triangular input (`b = 0`, all the complex
/// pipeline ever produces) this is `x = b + c`, `y = b - c`.
///
/// The second singular value is negative whenever `s0 < sD` (negative
/// determinant). It is returned as is; see [`Svd::canonicalize`].
pub fn real_svd_2x2(m: &Quop) -> Svd {
    let a = m.a().re;
    let b = m.b().re;
    let c = m.c().re;
    let d = m.d().re;

    let t = a + d;
    let x = c - b;
    let y = -(b + c);
    let z = a - d;

    let theta_0 = x.atan2(t) / 2.0;
    let theta_d = y.atan2(z) / 2.0;

    let s_0 = t.hypot(x) / 2.0;
    let s_d = z.hypot(y) / 2.0;

    Svd {
        u: Quop::rotation_matrix(theta_0 - theta_d),
        s: Quop::diagonal(s_0 + s_d, s_0 - s_d),
        v: Quop::rotation_matrix(theta_0 + theta_d),
    }
}

impl Quop {
    /// Singular value decomposition `self = u * s * v`.
    ///
    /// `u` and `v` are unitary and `s` is diagonal with non-negative real
    /// entries in descending order.
    pub fn svd(&self) -> Svd {
        // Cancel the phases of the top row by column phasing.
        let p = Quop::phase_cancel_matrix(self.a(), self.b());
        let m2 = self.times(&p);

        // Cancel top-right value by rotation.
        // m3 = m p r = | ?+?i  0    |
        //              | ?+?i  ?+?i |
        let r = Quop::rotation_matrix(m2.b().re.atan2(m2.a().re));
        let m3 = m2.times(&r);

        // Make bottom row real and non-negative by column phasing.
        // m4 = m p r q = | ?+?i  0 |
        //                | >     > |
        let q = Quop::phase_cancel_matrix(m3.c(), m3.d());
        let m4 = m3.times(&q);

        // Cancel imaginary part of top left value by row phasing.
        // m5 = t m p r q = | > 0 |
        //                  | > > |
        let t = Quop::phase_cancel_matrix(m4.a(), 1.0);
        let m5 = t.times(&m4);
        trace!(reduced = %m5, "reduced to real lower-triangular form");

        // t m p r q = u s v  =>  m = (t* u) s (v q* r* p*)
        let real = real_svd_2x2(&m5);
        let svd = Svd {
            u: t.adjoint().times(&real.u),
            s: real.s,
            v: real
                .v
                .times(&q.adjoint())
                .times(&r.adjoint())
                .times(&p.adjoint()),
        }
        .canonicalize();

        let (s1, s2) = svd.singular_values();
        trace!(s1, s2, "svd complete");
        svd
    }

    /// Replaces the operator by the nearest unitary, `u * v`, using the
    /// default [`RepairConfig`].
    pub fn repair(&self) -> Repair {
        self.repair_with(&RepairConfig::default())
    }

    /// Replaces the operator by the nearest unitary, `u * v`, classifying how
    /// far off the input was.
    pub fn repair_with(&self, config: &RepairConfig) -> Repair {
        let svd = self.svd();
        let (s1, s2) = svd.singular_values();

        let syndrome = if (s1 - 1.0).abs() < config.unitary_tolerance
            && (s2 - 1.0).abs() < config.unitary_tolerance
        {
            RepairSyndrome::AlreadyUnitary
        } else if (s1 - s2).abs() < config.scaling_tolerance {
            RepairSyndrome::FixedByScaling
        } else {
            RepairSyndrome::FixedBySvd
        };
        debug!(s1, s2, ?syndrome, "repaired operator");
        if syndrome == RepairSyndrome::FixedBySvd {
            warn!(s1, s2, "operator was not a scaled unitary; replaced by nearest unitary");
        }

        Repair {
            operator: svd.u.times(&svd.v),
            syndrome,
        }
    }
}

/// Thresholds that classify a repair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairConfig {
    /// Both singular values within this distance of one count as unitary.
    pub unitary_tolerance: f64,
    /// Singular values within this distance of each other count as a pure
    /// rescaling.
    pub scaling_tolerance: f64,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            unitary_tolerance: 0.03,
            scaling_tolerance: 0.01,
        }
    }
}

/// How an operator had to be changed to become unitary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairSyndrome {
    /// Singular values were already (close to) one.
    AlreadyUnitary,
    /// The operator was a uniformly scaled unitary.
    FixedByScaling,
    /// Singular values differed; the operator was genuinely non-unitary.
    FixedBySvd,
}

impl RepairSyndrome {
    /// Short annotation shown next to an entered matrix.
    pub fn label(&self) -> &'static str {
        match self {
            RepairSyndrome::AlreadyUnitary => "",
            RepairSyndrome::FixedByScaling => "(fixed by scaling)",
            RepairSyndrome::FixedBySvd => "(fixed by svd)",
        }
    }
}

/// A repaired operator and what was wrong with the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repair {
    /// The unitary replacement.
    pub operator: Quop,
    /// Classification of the input.
    pub syndrome: RepairSyndrome,
}
