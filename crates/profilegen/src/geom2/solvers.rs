//! Closed-form quadratic solver with a tangent band.
//!
//! - `solve_quadratic`: real roots of `a x² + b x + c = 0`.
//! - `Roots`: none / one tangent root / two ordered roots.

use super::types::GeomCfg;
use crate::error::GeomError;

/// Real roots of a quadratic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Roots {
    None,
    /// Discriminant within the tolerance band: the double root.
    Tangent(f64),
    /// Distinct roots, `lo <= hi`.
    Two(f64, f64),
}

impl Roots {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Roots::None => 0,
            Roots::Tangent(_) => 1,
            Roots::Two(..) => 2,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Roots::None)
    }

    #[inline]
    pub fn is_tangent(&self) -> bool {
        matches!(self, Roots::Tangent(_))
    }

    /// Largest root (the far crossing for a ray).
    #[inline]
    pub fn max(&self) -> Option<f64> {
        match *self {
            Roots::None => None,
            Roots::Tangent(t) => Some(t),
            Roots::Two(_, hi) => Some(hi),
        }
    }

    #[inline]
    pub fn min(&self) -> Option<f64> {
        match *self {
            Roots::None => None,
            Roots::Tangent(t) => Some(t),
            Roots::Two(lo, _) => Some(lo),
        }
    }

    /// Roots in ascending order.
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Roots::None => Vec::new(),
            Roots::Tangent(t) => vec![t],
            Roots::Two(lo, hi) => vec![lo, hi],
        }
    }
}

/// Solve `a x² + b x + c = 0` over the reals.
///
/// Discriminant `D = b² - 4ac` against `eps = cfg.zero_tolerance`:
/// - `D < -eps`: no roots
/// - `|D| <= eps`: tangent root `-b / 2a`
/// - otherwise two roots, ascending
///
/// `|a| <= cfg.eps_det` is rejected rather than solved as a linear equation:
/// every caller in this crate builds `a` from a squared length, so a zero
/// leading term means a degenerate primitive upstream.
pub fn solve_quadratic(a: f64, b: f64, c: f64, cfg: GeomCfg) -> Result<Roots, GeomError> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(GeomError::NonFinite {
            context: "quadratic coefficients",
        });
    }
    if a.abs() <= cfg.eps_det {
        return Err(GeomError::DegenerateQuadratic { a });
    }
    let det = b * b - 4.0 * a * c;
    if det < -cfg.zero_tolerance {
        return Ok(Roots::None);
    }
    if det <= cfg.zero_tolerance {
        return Ok(Roots::Tangent(-b / (2.0 * a)));
    }
    let sq = det.sqrt();
    let r0 = (-b - sq) / (2.0 * a);
    let r1 = (-b + sq) / (2.0 * a);
    // a < 0 flips the order
    Ok(if r0 <= r1 {
        Roots::Two(r0, r1)
    } else {
        Roots::Two(r1, r0)
    })
}
