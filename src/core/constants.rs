//! Numeric thresholds shared by the decomposition and interpolation routines.

/// Thresholds that switch the algebra onto its degenerate-input fallbacks.
pub mod quop_constants {
    /// Below this magnitude `unit()` rebuilds the value from its phase angle
    /// instead of dividing by the magnitude.
    pub const UNIT_FALLBACK_THRESHOLD: f64 = 1e-5;
    /// A Pauli-coordinate dot product below `-SHORT_ARC_THRESHOLD` flips the
    /// second operator onto the other sheet of the double cover.
    pub const SHORT_ARC_THRESHOLD: f64 = 1e-7;
    /// Below this arc angle the sine ratio switches to its Taylor expansion.
    pub const TAYLOR_THRESHOLD: f64 = 1e-4;
    /// Used for phase angles (`e^(iθ)`)
    pub const PI: f64 = std::f64::consts::PI;
}
