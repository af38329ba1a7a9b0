//! Small vector helpers on top of nalgebra.
//!
//! Add/subtract/scale/dot/length come straight from `Vector2`; this module
//! only fills in the pieces nalgebra spells differently for 2D.

use nalgebra::{Matrix2, Vector2};

/// z-component of the 3D cross product of `a` and `b`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Unit vector, or `None` for zero/non-finite input.
#[inline]
pub fn unit(v: Vector2<f64>) -> Option<Vector2<f64>> {
    let n = v.norm();
    if !n.is_finite() || n <= 0.0 {
        return None;
    }
    Some(v / n)
}

/// Rotation by `theta` radians about the origin.
#[inline]
pub fn rot_matrix(theta: f64) -> Matrix2<f64> {
    let (s, c) = theta.sin_cos();
    Matrix2::new(c, -s, s, c)
}

/// Rotate `p` by `theta` about `center`.
#[inline]
pub fn rotate_about(p: Vector2<f64>, center: Vector2<f64>, theta: f64) -> Vector2<f64> {
    rot_matrix(theta) * (p - center) + center
}

#[inline]
pub fn mirror_x(p: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(p.x, -p.y)
}

/// `(r cos θ, r sin θ)`.
#[inline]
pub fn polar(r: f64, theta: f64) -> Vector2<f64> {
    let (s, c) = theta.sin_cos();
    Vector2::new(r * c, r * s)
}
