//! Profile builders.
//!
//! Each builder turns a handful of dimensions into an ordered `Profile`:
//! - `cam`: `OffsetCam` (ray sampling), `LobeCam` (circle tangencies)
//! - `gear`: `InvoluteGear`, `CycloidGear` (parametric sampling)
//! - `wheel`: `Wheel` (smoothed cross-section polygon)
//!
//! `smooth_vertices` covers free-form polygons given as vertex descriptors.

mod cam;
mod cfg;
mod entity;
mod gear;
mod wheel;

pub use cam::{LobeArcs, LobeCam, OffsetCam};
pub use cfg::ProfileCfg;
pub use entity::{Arc, Entity, Profile};
pub use gear::{
    epicycloid_point, hypocycloid_point, involute_point, involute_radius, involute_theta,
    CycloidGear, InvoluteGear, ToothProfile,
};
pub use wheel::Wheel;

use crate::error::GeomError;
use crate::geom2::Point2;
use crate::polygon::{smooth, Polygon, Smoothed, Vertex};

/// Plain vertex descriptor: coordinate plus fillet request.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VertexSpec {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub facets: usize,
}

/// Build a polygon from descriptors and smooth it under `cfg.fillet_policy`.
///
/// A descriptor with `radius > 0` and `facets == 0` takes its facet count
/// from `cfg.facets_for_radius`, scaled to the corner's worst case (a half turn).
pub fn smooth_vertices(
    specs: &[VertexSpec],
    closed: bool,
    cfg: &ProfileCfg,
) -> Result<Smoothed, GeomError> {
    let verts = specs
        .iter()
        .map(|s| {
            let facets = if s.radius > 0.0 && s.facets == 0 {
                cfg.facets_for_arc(s.radius, std::f64::consts::PI)
            } else {
                s.facets
            };
            Vertex::filleted(Point2::new(s.x, s.y), s.radius, facets)
        })
        .collect::<Result<Vec<_>, _>>()?;
    smooth(&Polygon::new(verts, closed)?, cfg.fillet_policy)
}

/// Profile holding the smoothed polygon of `smooth_vertices`.
pub fn polygon_profile(
    name: &str,
    specs: &[VertexSpec],
    closed: bool,
    cfg: &ProfileCfg,
) -> Result<Profile, GeomError> {
    let s = smooth_vertices(specs, closed, cfg)?;
    let mut out = Profile::new(name);
    out.polyline(s.polygon.points(), closed);
    Ok(out)
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), GeomError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeomError::InvalidParameter {
            name,
            value,
            reason: "must be finite and > 0",
        })
    }
}

pub(crate) fn check_steps(name: &'static str, steps: usize) -> Result<usize, GeomError> {
    if steps == 0 {
        return Err(GeomError::InvalidParameter {
            name,
            value: 0.0,
            reason: "need at least one sample step",
        });
    }
    Ok(steps)
}
