// src/core/quop.rs

use super::complex::ComplexExt;
use super::error::QuopError;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul};

/// A single-qubit linear operator: a 2x2 complex matrix
///
/// ```text
/// | a  b |
/// | c  d |
/// ```
///
/// stored row-major as `[a, b, c, d]`.
///
/// Nothing about the entries is enforced at construction. Callers may build
/// non-unitary matrices freely; [`Quop::repair`](crate::Quop::repair) exists to
/// coerce a near-unitary one back to an exactly unitary operator.
/// All operations return new values.
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point entries
pub struct Quop {
    m: [Complex64; 4],
}

impl Quop {
    /// Builds an operator from its four entries in row-major order.
    /// Each entry may be a `Complex64` or a bare real.
    pub fn new(
        a: impl Into<Complex64>,
        b: impl Into<Complex64>,
        c: impl Into<Complex64>,
        d: impl Into<Complex64>,
    ) -> Self {
        Self { m: [a.into(), b.into(), c.into(), d.into()] }
    }

    /// Builds an operator from a row-major entry array.
    pub fn from_entries(m: [Complex64; 4]) -> Self {
        Self { m }
    }

    /// Builds an operator from nested rows, as used by state-vector code.
    pub fn from_rows(rows: [[Complex64; 2]; 2]) -> Self {
        Self { m: [rows[0][0], rows[0][1], rows[1][0], rows[1][1]] }
    }

    /// Top-left entry.
    pub fn a(&self) -> Complex64 {
        self.m[0]
    }

    /// Top-right entry.
    pub fn b(&self) -> Complex64 {
        self.m[1]
    }

    /// Bottom-left entry.
    pub fn c(&self) -> Complex64 {
        self.m[2]
    }

    /// Bottom-right entry.
    pub fn d(&self) -> Complex64 {
        self.m[3]
    }

    /// Row-major entries `[a, b, c, d]`.
    pub fn entries(&self) -> [Complex64; 4] {
        self.m
    }

    /// Entries as nested rows.
    pub fn to_rows(&self) -> [[Complex64; 2]; 2] {
        [[self.m[0], self.m[1]], [self.m[2], self.m[3]]]
    }

    /// Entrywise sum.
    pub fn plus(&self, other: &Quop) -> Quop {
        Quop::from_entries([
            self.m[0] + other.m[0],
            self.m[1] + other.m[1],
            self.m[2] + other.m[2],
            self.m[3] + other.m[3],
        ])
    }

    /// Multiplies every entry by a complex or real factor.
    pub fn scaled_by(&self, s: impl Into<Complex64>) -> Quop {
        let s = s.into();
        Quop::from_entries([self.m[0] * s, self.m[1] * s, self.m[2] * s, self.m[3] * s])
    }

    /// Matrix product `self * other` (apply `other` first, then `self`).
    pub fn times(&self, other: &Quop) -> Quop {
        let [a, b, c, d] = self.m;
        let [e, f, g, h] = other.m;
        Quop::from_entries([
            a * e + b * g,
            a * f + b * h,
            c * e + d * g,
            c * f + d * h,
        ])
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Quop {
        Quop::from_entries([
            self.m[0].conj(),
            self.m[2].conj(),
            self.m[1].conj(),
            self.m[3].conj(),
        ])
    }

    /// Plain transpose, no conjugation.
    pub fn transpose(&self) -> Quop {
        Quop::from_entries([self.m[0], self.m[2], self.m[1], self.m[3]])
    }

    // --- Named operators ---

    /// The identity `I`.
    pub fn identity() -> Quop {
        Quop::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Pauli `X`, the bit flip.
    pub fn pauli_x() -> Quop {
        Quop::new(0.0, 1.0, 1.0, 0.0)
    }

    /// Pauli `Y`.
    pub fn pauli_y() -> Quop {
        Quop::new(Complex64::zero(), -Complex64::i(), Complex64::i(), Complex64::zero())
    }

    /// Pauli `Z`, the phase flip.
    pub fn pauli_z() -> Quop {
        Quop::new(1.0, 0.0, 0.0, -1.0)
    }

    /// Hadamard `[[√½, √½], [√½, -√½]]`.
    pub fn hadamard() -> Quop {
        let h = 0.5f64.sqrt();
        Quop::new(h, h, h, -h)
    }

    /// Real rotation `[[cos θ, -sin θ], [sin θ, cos θ]]`.
    pub fn rotation_matrix(theta: f64) -> Quop {
        let (s, c) = theta.sin_cos();
        Quop::new(c, -s, s, c)
    }

    /// Diagonal matrix `diag(unit(p)*, unit(q)*)`.
    ///
    /// Right-multiplying by it cancels the phases of a row whose entries are
    /// `p` and `q`; left-multiplying cancels those of a column. Zero inputs
    /// go through the `unit()` fallback and contribute a factor of one.
    pub fn phase_cancel_matrix(p: impl Into<Complex64>, q: impl Into<Complex64>) -> Quop {
        let p = p.into().unit().conj();
        let q = q.into().unit().conj();
        Quop::new(p, Complex64::zero(), Complex64::zero(), q)
    }

    /// Diagonal operator `diag(s1, s2)` with real entries.
    pub fn diagonal(s1: f64, s2: f64) -> Quop {
        Quop::new(s1, 0.0, 0.0, s2)
    }

    /// `true` when every entry is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.m.iter().all(|e| e.is_zero())
    }

    /// `true` when this is exactly the identity.
    pub fn is_identity(&self) -> bool {
        self.m[0].is_one() && self.m[1].is_zero() && self.m[2].is_zero() && self.m[3].is_one()
    }
}

impl Default for Quop {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<&[Complex64]> for Quop {
    type Error = QuopError;

    fn try_from(entries: &[Complex64]) -> Result<Self, Self::Error> {
        match entries {
            [a, b, c, d] => Ok(Quop::from_entries([*a, *b, *c, *d])),
            _ => Err(QuopError::MalformedOperator { expected: 4, found: entries.len() }),
        }
    }
}

impl TryFrom<Vec<Complex64>> for Quop {
    type Error = QuopError;

    fn try_from(entries: Vec<Complex64>) -> Result<Self, Self::Error> {
        Quop::try_from(entries.as_slice())
    }
}

impl From<[[Complex64; 2]; 2]> for Quop {
    fn from(rows: [[Complex64; 2]; 2]) -> Self {
        Quop::from_rows(rows)
    }
}

impl Add for Quop {
    type Output = Quop;

    fn add(self, rhs: Quop) -> Quop {
        self.plus(&rhs)
    }
}

impl Mul for Quop {
    type Output = Quop;

    fn mul(self, rhs: Quop) -> Quop {
        self.times(&rhs)
    }
}

impl Mul<Complex64> for Quop {
    type Output = Quop;

    fn mul(self, rhs: Complex64) -> Quop {
        self.scaled_by(rhs)
    }
}

impl Mul<f64> for Quop {
    type Output = Quop;

    fn mul(self, rhs: f64) -> Quop {
        self.scaled_by(rhs)
    }
}

impl fmt::Display for Quop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Precision flag (e.g. `{:.3}`) is forwarded to every entry.
        let [a, b, c, d] = self.m;
        match f.precision() {
            Some(p) => write!(f, "[[{:.*}, {:.*}], [{:.*}, {:.*}]]", p, a, p, b, p, c, p, d),
            None => write!(f, "[[{}, {}], [{}, {}]]", a, b, c, d),
        }
    }
}
