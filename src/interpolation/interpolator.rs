// src/interpolation/interpolator.rs
use crate::core::Quop;
use crate::decomposition::{Repair, RepairConfig};
use std::f64::consts::TAU;
use std::fmt;
use tracing::debug;

/// Settings for an [`Interpolator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatorConfig {
    /// Clock advance per [`Interpolator::tick`], in radians.
    pub clock_step: f64,
    /// Thresholds used when repairing the endpoints.
    pub repair: RepairConfig,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            clock_step: 0.1,
            repair: RepairConfig::default(),
        }
    }
}

/// One interpolated operator and the parameter that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Interpolation parameter in `[0, 1]`.
    pub t: f64,
    /// The operator at `t`.
    pub operator: Quop,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}: {:.3}", self.t, self.operator)
    }
}

/// Animates between two operators.
///
/// Both endpoints are repaired to exact unitaries on construction, so any
/// pair of matrices (typed in, parsed, or computed) can be animated. The
/// interpolator owns the animation clock; nothing else is shared.
#[derive(Debug, Clone)]
pub struct Interpolator {
    start: Repair,
    end: Repair,
    clock: f64,
    config: InterpolatorConfig,
}

impl Interpolator {
    /// Creates an interpolator with default settings.
    pub fn new(from: Quop, to: Quop) -> Self {
        Self::with_config(from, to, InterpolatorConfig::default())
    }

    /// Creates an interpolator with explicit settings.
    pub fn with_config(from: Quop, to: Quop, config: InterpolatorConfig) -> Self {
        let start = from.repair_with(&config.repair);
        let end = to.repair_with(&config.repair);
        debug!(start = ?start.syndrome, end = ?end.syndrome, "interpolator endpoints repaired");
        Self {
            start,
            end,
            clock: 0.0,
            config,
        }
    }

    /// The repaired start operator and its syndrome.
    pub fn start(&self) -> &Repair {
        &self.start
    }

    /// The repaired end operator and its syndrome.
    pub fn end(&self) -> &Repair {
        &self.end
    }

    /// Current animation clock, in radians.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// The operator at `t`; values outside `[0, 1]` are clamped.
    pub fn at(&self, t: f64) -> Quop {
        let t = t.clamp(0.0, 1.0);
        self.start.operator.ulerp(&self.end.operator, t)
    }

    /// `count` frames evenly spaced from `t = 0` to `t = 1` inclusive.
    /// A single frame sits at `t = 0`.
    pub fn frames(&self, count: usize) -> impl Iterator<Item = Frame> + '_ {
        let last = count.saturating_sub(1).max(1) as f64;
        (0..count).map(move |i| {
            let t = i as f64 / last;
            Frame { t, operator: self.at(t) }
        })
    }

    /// Produces the frame for the current clock, then advances it.
    ///
    /// The parameter oscillates as `t = sin(clock)/2 + 1/2`, so repeated
    /// ticks sweep back and forth between the endpoints.
    pub fn tick(&mut self) -> Frame {
        self.clock = self.clock.rem_euclid(TAU);
        let t = self.clock.sin() / 2.0 + 0.5;
        let frame = Frame { t, operator: self.at(t) };
        self.clock += self.config.clock_step;
        frame
    }
}
