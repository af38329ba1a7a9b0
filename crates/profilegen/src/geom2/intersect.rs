//! Circle-circle and line-circle intersection.
//!
//! Both reduce to `solve_quadratic`. Circle-circle subtracts the two circle
//! equations to get the radical line, then substitutes it into the first
//! circle; two branches keep the radical line solvable without dividing by
//! a zero y-offset between the centers.

use super::solvers::{solve_quadratic, Roots};
use super::types::{Circle, GeomCfg, Line, Point2};
use crate::error::GeomError;

/// Result of intersecting two circles.
#[derive(Clone, Debug, PartialEq)]
pub enum CircleIntersection {
    /// Co-centric, equal radii: the circles are the same set.
    Coincident,
    /// 0, 1 (tangent) or 2 points, in root order of the underlying quadratic.
    Points(Vec<Point2>),
}

impl CircleIntersection {
    /// Finite point list; `Coincident` becomes `GeomError::CoincidentCircles`.
    pub fn into_points(self, c: &Circle) -> Result<Vec<Point2>, GeomError> {
        match self {
            CircleIntersection::Coincident => Err(GeomError::CoincidentCircles {
                x: c.c.x,
                y: c.c.y,
                r: c.r,
            }),
            CircleIntersection::Points(p) => Ok(p),
        }
    }

    #[inline]
    pub fn is_coincident(&self) -> bool {
        matches!(self, CircleIntersection::Coincident)
    }

    /// Number of isolated points (0 for `Coincident`).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            CircleIntersection::Coincident => 0,
            CircleIntersection::Points(p) => p.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index 0, the point to use for tangent constructions.
    #[inline]
    pub fn first(&self) -> Option<Point2> {
        match self {
            CircleIntersection::Coincident => None,
            CircleIntersection::Points(p) => p.first().copied(),
        }
    }
}

/// Intersect two circles.
pub fn circle_circle(
    c1: &Circle,
    c2: &Circle,
    cfg: GeomCfg,
) -> Result<CircleIntersection, GeomError> {
    if !(c1.is_finite() && c2.is_finite()) {
        return Err(GeomError::NonFinite {
            context: "circle_circle",
        });
    }
    let (x1, y1, r1) = (c1.c.x, c1.c.y, c1.r);
    let (x2, y2, r2) = (c2.c.x, c2.c.y, c2.r);
    let x_equal = x1 == x2;
    let y_equal = y1 == y2;

    if x_equal && y_equal {
        return Ok(if r1 == r2 {
            CircleIntersection::Coincident
        } else {
            CircleIntersection::Points(Vec::new())
        });
    }

    if y_equal {
        // radical line: x = b
        let b = (r1 * r1 - r2 * r2 + x2 * x2 - x1 * x1) / (2.0 * (x2 - x1));
        // substitute into c1: quadratic in y
        let k = b - x1;
        let ys = solve_quadratic(1.0, -2.0 * y1, y1 * y1 + k * k - r1 * r1, cfg)?;
        let pts = ys.to_vec().into_iter().map(|y| Point2::new(b, y)).collect();
        return Ok(CircleIntersection::Points(pts));
    }

    // radical line: y = m x + b
    let m = (x1 - x2) / (y2 - y1);
    let b = (r1 * r1 - r2 * r2 + x2 * x2 - x1 * x1 + y2 * y2 - y1 * y1) / (2.0 * (y2 - y1));
    // substitute into c1: quadratic in x
    let k = b - y1;
    let qa = 1.0 + m * m;
    let qb = 2.0 * m * k - 2.0 * x1;
    let qc = x1 * x1 + k * k - r1 * r1;
    let xs = solve_quadratic(qa, qb, qc, cfg)?;
    let pts = xs
        .to_vec()
        .into_iter()
        .map(|x| Point2::new(x, m * x + b))
        .collect();
    Ok(CircleIntersection::Points(pts))
}

/// Parameters `t` where `line` crosses the boundary of `circle`.
///
/// A zero direction vector yields `GeomError::DegenerateQuadratic`.
pub fn line_circle(line: &Line, circle: &Circle, cfg: GeomCfg) -> Result<Roots, GeomError> {
    let k = line.origin - circle.c;
    let qa = line.dir.norm_squared();
    let qb = 2.0 * k.dot(&line.dir);
    let qc = k.norm_squared() - circle.r * circle.r;
    solve_quadratic(qa, qb, qc, cfg)
}
