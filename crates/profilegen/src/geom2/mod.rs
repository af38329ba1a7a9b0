//! Analytic 2D kernel: primitives, quadratic solver, intersections.
//!
//! Purpose
//! - Resolve exact construction points for profile builders: where two
//!   circles meet, where a ray leaves a circle.
//! - Surface degenerate configurations as typed outcomes (`Roots::None`,
//!   `Roots::Tangent`, `CircleIntersection::Coincident`) instead of NaN.
//!
//! Tolerances
//! - The discriminant band `GeomCfg::zero_tolerance` decides "tangent" vs
//!   "two roots" vs "no roots". It is absolute, so callers working at very
//!   different scales should adjust it.
//!
//! Code cross-refs: `types::{Circle, Line, GeomCfg}`, `solvers::solve_quadratic`,
//! `intersect::{circle_circle, line_circle}`.

mod intersect;
mod solvers;
mod types;
pub mod vec;

pub use intersect::{circle_circle, line_circle, CircleIntersection};
pub use solvers::{solve_quadratic, Roots};
pub use types::{Circle, GeomCfg, Line, Point2};
