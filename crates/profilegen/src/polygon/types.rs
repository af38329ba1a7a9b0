//! Vertices with fillet requests and the polygon that owns them.

use crate::error::GeomError;
use crate::geom2::Point2;

/// Polygon vertex.
///
/// Invariants:
/// - `radius` finite and `>= 0`; `0` means fixed (never smoothed).
/// - `facets >= 1` whenever `radius > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub p: Point2,
    pub radius: f64,
    pub facets: usize,
}

impl Vertex {
    /// Fixed vertex at `p`.
    #[inline]
    pub fn fixed(p: Point2) -> Self {
        Self {
            p,
            radius: 0.0,
            facets: 0,
        }
    }

    /// Vertex requesting a fillet of `radius` approximated by `facets` segments.
    pub fn filleted(p: Point2, radius: f64, facets: usize) -> Result<Self, GeomError> {
        let v = Self { p, radius, facets };
        v.validate()?;
        Ok(v)
    }

    /// Invariant check shared by `filleted` and `Polygon::new`.
    pub fn validate(&self) -> Result<(), GeomError> {
        let (p, radius) = (self.p, self.radius);
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(GeomError::InvalidVertex {
                reason: format!("non-finite coordinate ({}, {})", p.x, p.y),
            });
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeomError::InvalidVertex {
                reason: format!("fillet radius must be finite and >= 0, got {radius}"),
            });
        }
        if radius > 0.0 && self.facets == 0 {
            return Err(GeomError::InvalidVertex {
                reason: format!("fillet radius {radius} needs at least one facet"),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.radius == 0.0
    }

    /// Same coordinate, fillet request dropped.
    #[inline]
    pub fn into_fixed(self) -> Self {
        Self::fixed(self.p)
    }
}

/// Ordered vertex sequence; `closed` joins the last vertex back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    closed: bool,
}

impl Polygon {
    /// Fails on fewer than two vertices or on any vertex breaking its invariants.
    pub fn new(vertices: Vec<Vertex>, closed: bool) -> Result<Self, GeomError> {
        if vertices.len() < 2 {
            return Err(GeomError::InvalidPolygon {
                count: vertices.len(),
            });
        }
        for v in &vertices {
            v.validate()?;
        }
        Ok(Self { vertices, closed })
    }

    /// Polygon of fixed vertices.
    pub fn from_points(points: &[Point2], closed: bool) -> Result<Self, GeomError> {
        Self::new(points.iter().copied().map(Vertex::fixed).collect(), closed)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn points(&self) -> Vec<Point2> {
        self.vertices.iter().map(|v| v.p).collect()
    }

    /// Whether vertex `i` has neighbours on both sides.
    #[inline]
    pub fn is_interior(&self, i: usize) -> bool {
        self.closed || (i > 0 && i + 1 < self.vertices.len())
    }

    /// Vertices that would be smoothed: non-zero radius with two neighbours.
    pub fn smoothable_count(&self) -> usize {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(i, v)| !v.is_fixed() && self.is_interior(*i))
            .count()
    }
}
