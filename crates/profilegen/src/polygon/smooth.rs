//! Corner smoothing: replace filleted vertices with tangent-arc vertex chains.
//!
//! Model
//! - A corner at `p` with neighbours `prev`, `next` and fillet radius `r` is
//!   replaced by `facets + 1` fixed vertices on the arc of radius `r` that is
//!   tangent to both edges.
//! - Each pass walks the current sequence once and emits into a new one. The
//!   previous neighbour of a corner is the last vertex already emitted, so a
//!   fillet sees the tangent point of the fillet before it and two fillets on
//!   one edge cannot overlap. For the last vertex of a closed polygon the next
//!   neighbour is the first emitted vertex, for the same reason.
//! - Passes repeat until one touches nothing. Every touched vertex leaves the
//!   pass fixed, so the loop runs at most `smoothable_count() + 1` times.
//!
//! Corners that cannot carry their fillet are handled per `FilletPolicy`.

use std::f64::consts::PI;

use tracing::{debug, warn};

use super::types::{Polygon, Vertex};
use crate::error::GeomError;
use crate::geom2::vec::{cross, rotate_about, unit};
use crate::geom2::Point2;

/// What to do with a fillet that does not fit its corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilletPolicy {
    /// Leave the corner sharp, log a warning and record it in the report.
    #[default]
    KeepCorner,
    /// Fail the whole smoothing call with `GeomError::InfeasibleFillet`.
    Abort,
}

/// Why a filleted corner was left sharp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SkipReason {
    /// Tangent length exceeds the shorter adjacent edge.
    Infeasible {
        tangent_length: f64,
        edge_length: f64,
    },
    /// A neighbour coincides with the vertex.
    Degenerate,
    /// The edges are collinear; there is no corner to round.
    Straight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkippedCorner {
    /// Position in the sequence handed to the pass that saw the corner.
    pub index: usize,
    pub p: Point2,
    pub radius: f64,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmoothReport {
    pub input_vertices: usize,
    pub output_vertices: usize,
    pub filleted: usize,
    pub skipped: Vec<SkippedCorner>,
    pub passes: usize,
}

/// Smoothed polygon plus what happened on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Smoothed {
    pub polygon: Polygon,
    pub report: SmoothReport,
}

/// Smooth every filleted interior vertex of `polygon`.
///
/// End vertices of an open polygon are copied unchanged, radius included.
pub fn smooth(polygon: &Polygon, policy: FilletPolicy) -> Result<Smoothed, GeomError> {
    let closed = polygon.closed();
    let budget = polygon.smoothable_count() + 1;
    let mut verts = polygon.vertices().to_vec();
    let mut report = SmoothReport {
        input_vertices: verts.len(),
        ..SmoothReport::default()
    };

    loop {
        report.passes += 1;
        debug_assert!(report.passes <= budget, "smoothing failed to converge");
        match smooth_pass(&verts, closed, policy, &mut report)? {
            Some(next) => verts = next,
            None => break,
        }
    }

    report.output_vertices = verts.len();
    debug!(
        input = report.input_vertices,
        output = report.output_vertices,
        filleted = report.filleted,
        skipped = report.skipped.len(),
        passes = report.passes,
        "smooth"
    );
    Ok(Smoothed {
        polygon: Polygon::new(verts, closed)?,
        report,
    })
}

impl Polygon {
    /// Shorthand for `smooth(self, policy)` keeping only the polygon.
    pub fn smoothed(&self, policy: FilletPolicy) -> Result<Polygon, GeomError> {
        smooth(self, policy).map(|s| s.polygon)
    }
}

/// One pass. `None` when no vertex needed work.
fn smooth_pass(
    verts: &[Vertex],
    closed: bool,
    policy: FilletPolicy,
    report: &mut SmoothReport,
) -> Result<Option<Vec<Vertex>>, GeomError> {
    let n = verts.len();
    let mut out: Vec<Vertex> = Vec::with_capacity(n);
    let mut touched = false;

    for (i, &v) in verts.iter().enumerate() {
        let interior = closed || (i > 0 && i + 1 < n);
        if v.is_fixed() || !interior {
            out.push(v);
            continue;
        }
        touched = true;
        let prev = match out.last() {
            Some(last) => last.p,
            None => verts[n - 1].p,
        };
        let next = if i + 1 < n { verts[i + 1].p } else { out[0].p };

        match fillet_chain(prev, v, next) {
            Ok(chain) => {
                report.filleted += 1;
                out.extend(chain);
            }
            Err(reason) => {
                if let (
                    FilletPolicy::Abort,
                    SkipReason::Infeasible {
                        tangent_length,
                        edge_length,
                    },
                ) = (policy, reason)
                {
                    return Err(GeomError::InfeasibleFillet {
                        index: i,
                        radius: v.radius,
                        tangent_length,
                        edge_length,
                    });
                }
                warn!(
                    index = i,
                    x = v.p.x,
                    y = v.p.y,
                    radius = v.radius,
                    reason = ?reason,
                    "fillet skipped, corner left sharp"
                );
                report.skipped.push(SkippedCorner {
                    index: i,
                    p: v.p,
                    radius: v.radius,
                    reason,
                });
                out.push(v.into_fixed());
            }
        }
    }

    Ok(touched.then_some(out))
}

/// Arc chain replacing corner `v` between `prev` and `next`.
fn fillet_chain(prev: Point2, v: Vertex, next: Point2) -> Result<Vec<Vertex>, SkipReason> {
    let e0 = prev - v.p;
    let e1 = next - v.p;
    let (v0, v1) = match (unit(e0), unit(e1)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(SkipReason::Degenerate),
    };
    let bisector = unit(v0 + v1).ok_or(SkipReason::Straight)?;

    let theta = v0.dot(&v1).clamp(-1.0, 1.0).acos();
    let half = 0.5 * theta;
    let tangent_length = v.radius / half.tan();
    let edge_length = e0.norm().min(e1.norm());
    // also rejects the infinite tangent length of a zero-angle spike
    if !(tangent_length <= edge_length) {
        return Err(SkipReason::Infeasible {
            tangent_length,
            edge_length,
        });
    }

    let p0 = v.p + v0 * tangent_length;
    let center = v.p + bisector * (v.radius / half.sin());
    let sign = cross(v1, v0).signum();
    let dtheta = sign * (PI - theta) / v.facets as f64;

    Ok((0..=v.facets)
        .map(|k| Vertex::fixed(rotate_about(p0, center, k as f64 * dtheta)))
        .collect())
}
