//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes the discriminant band and the zero-coefficient cutoff.
//! - `Circle`: center + radius, with boundary angle lookup.
//! - `Line`: parametric `origin + t * dir`.

use nalgebra::Vector2;

/// Points and free vectors share one representation.
pub type Point2 = Vector2<f64>;

/// Kernel tolerances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Discriminant band treated as a single (tangent) root.
    pub zero_tolerance: f64,
    /// Leading coefficients with `|a| <= eps_det` are rejected as degenerate.
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            zero_tolerance: 1e-4,
            eps_det: 1e-12,
        }
    }
}

/// Circle with center `c` and radius `r >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub c: Point2,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub fn new(c: Point2, r: f64) -> Self {
        Self { c, r }
    }

    /// Circle centred on the origin.
    #[inline]
    pub fn origin(r: f64) -> Self {
        Self::new(Point2::zeros(), r)
    }

    /// Angular position of `p` about the center, radians in (-π, π].
    #[inline]
    pub fn angle_of(&self, p: Point2) -> f64 {
        let d = p - self.c;
        d.y.atan2(d.x)
    }

    /// Same as `angle_of`, in degrees.
    #[inline]
    pub fn angle_of_deg(&self, p: Point2) -> f64 {
        self.angle_of(p).to_degrees()
    }

    /// Boundary point at angle `theta` (radians).
    #[inline]
    pub fn point_at(&self, theta: f64) -> Point2 {
        self.c + super::vec::polar(self.r, theta)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.c.x.is_finite() && self.c.y.is_finite() && self.r.is_finite()
    }
}

/// Parametric line `origin + t * dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub origin: Point2,
    pub dir: Point2,
}

impl Line {
    #[inline]
    pub fn new(origin: Point2, dir: Point2) -> Self {
        Self { origin, dir }
    }

    /// Unit ray from `origin` at angle `theta`.
    #[inline]
    pub fn ray(origin: Point2, theta: f64) -> Self {
        Self::new(origin, super::vec::polar(1.0, theta))
    }

    #[inline]
    pub fn at(&self, t: f64) -> Point2 {
        self.origin + self.dir * t
    }
}
