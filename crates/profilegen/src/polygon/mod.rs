//! Polygons with per-vertex fillet requests and the corner-smoothing engine.
//!
//! Code cross-refs: `types::{Vertex, Polygon}`, `smooth::{smooth, FilletPolicy, SmoothReport}`.

mod smooth;
mod types;

pub use smooth::{smooth, FilletPolicy, SkipReason, SkippedCorner, SmoothReport, Smoothed};
pub use types::{Polygon, Vertex};

#[cfg(test)]
mod tests;
