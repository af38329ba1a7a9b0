//! Error type shared by the kernel and the profile builders.
//!
//! Geometric outcomes that callers are expected to branch on (no roots, a
//! tangent root, a skipped fillet) are values, not errors. The variants here
//! are the cases where a construction cannot proceed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Leading coefficient of a quadratic is (numerically) zero.
    #[error("degenerate quadratic: leading coefficient {a} is zero")]
    DegenerateQuadratic { a: f64 },

    #[error("non-finite input to {context}")]
    NonFinite { context: &'static str },

    /// Co-centric circles of equal radius: every boundary point is shared.
    #[error("circles coincide (center ({x}, {y}), radius {r}): infinite intersection points")]
    CoincidentCircles { x: f64, y: f64, r: f64 },

    /// A construction needed an intersection that does not exist.
    #[error("missing intersection: {what}")]
    MissingIntersection { what: String },

    #[error(
        "fillet radius {radius} infeasible at vertex {index}: \
         tangent length {tangent_length} exceeds edge length {edge_length}"
    )]
    InfeasibleFillet {
        index: usize,
        radius: f64,
        tangent_length: f64,
        edge_length: f64,
    },

    #[error("invalid vertex: {reason}")]
    InvalidVertex { reason: String },

    #[error("polygon must have at least 2 vertices, got {count}")]
    InvalidPolygon { count: usize },

    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl GeomError {
    pub(crate) fn missing(what: impl Into<String>) -> Self {
        GeomError::MissingIntersection { what: what.into() }
    }
}
