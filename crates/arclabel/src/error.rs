//! Error taxonomy for the placement engine.
//!
//! Absent results (empty graphs, no usable placement) are `Option`/empty
//! collections, not errors. `LabelError` covers only inputs the engine refuses.

use thiserror::Error;

/// Failures surfaced by fallible constructors and operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LabelError {
    /// Too few distinct points, collinear input, or the solver did not converge.
    #[error("degenerate circle fit: {reason}")]
    DegenerateCircleFit { reason: &'static str },

    /// An angular interval with `lo >= hi` (or non-finite bounds).
    #[error("ill-formed wedge interval [{lo}, {hi}]")]
    IllFormedWedge { lo: f64, hi: f64 },

    /// Wedge height or ascend rate outside its domain.
    #[error("ill-formed wedge: height {height}, ascend rate {ascend}")]
    IllFormedWedgeRate { height: f64, ascend: f64 },

    /// Aspect ratio must be finite and strictly positive.
    #[error("invalid aspect ratio {aspect}")]
    InvalidAspect { aspect: f64 },

    /// Circle radius must be finite and strictly positive.
    #[error("invalid circle radius {radius}")]
    InvalidCircle { radius: f64 },
}

pub type Result<T> = std::result::Result<T, LabelError>;
