// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod complex;
pub mod error;
pub mod quop;

// Re-export public types for convenient access via `quop::core::TypeName`
pub use complex::{ComplexExt, unit_from_angle};
pub use error::QuopError;
pub use quop::Quop;

pub mod constants;
pub use constants::quop_constants::{
    PI, SHORT_ARC_THRESHOLD, TAYLOR_THRESHOLD, UNIT_FALLBACK_THRESHOLD,
}; // Re-export
